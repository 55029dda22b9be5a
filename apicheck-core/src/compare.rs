use crate::cookie::{ExpectedCookie, HttpCookie};
use cookie::time::OffsetDateTime;
use std::fmt;

/// Attributes checked by [`compare_cookies`], in reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CookieField {
    Value,
    Domain,
    Path,
    Expires,
    MaxAge,
    Secure,
    HttpOnly,
}

impl CookieField {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Domain => "Domain",
            Self::Path => "Path",
            Self::Expires => "Expires",
            Self::MaxAge => "MaxAge",
            Self::Secure => "Secure",
            Self::HttpOnly => "HttpOnly",
        }
    }
}

impl fmt::Display for CookieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Timestamp(OffsetDateTime),
    Integer(i64),
    Flag(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Timestamp(timestamp) => write!(f, "{timestamp}"),
            Self::Integer(integer) => write!(f, "{integer}"),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub field: CookieField,
    pub expected: FieldValue,
    pub actual: FieldValue,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mismatched field {}. Expected {} but received {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Outcome of checking one actual cookie against an expectation.
///
/// `mismatches` is always empty when `found` is false.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    pub found: bool,
    pub mismatches: Vec<Mismatch>,
}

impl Comparison {
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.found && self.mismatches.is_empty()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.mismatches.iter().map(ToString::to_string).collect()
    }
}

impl ExpectedCookie {
    /// Compares only the attributes that were set on the expectation.
    /// Timestamps are equal when they denote the same instant.
    #[must_use]
    pub fn compare(&self, actual: &HttpCookie) -> Comparison {
        if self.name != actual.name {
            tracing::trace!(
                expected = %self.name,
                actual = %actual.name,
                "cookie name does not match"
            );
            return Comparison::default();
        }
        let mut mismatches = Vec::new();
        let mut check = |field, expected: Option<FieldValue>, actual: FieldValue| {
            if let Some(expected) = expected {
                if expected != actual {
                    mismatches.push(Mismatch {
                        field,
                        expected,
                        actual,
                    });
                }
            }
        };
        check(
            CookieField::Value,
            self.value.clone().map(FieldValue::Text),
            FieldValue::Text(actual.value.clone()),
        );
        check(
            CookieField::Domain,
            self.domain.clone().map(FieldValue::Text),
            FieldValue::Text(actual.domain.clone()),
        );
        check(
            CookieField::Path,
            self.path.clone().map(FieldValue::Text),
            FieldValue::Text(actual.path.clone()),
        );
        check(
            CookieField::Expires,
            self.expires.map(FieldValue::Timestamp),
            FieldValue::Timestamp(actual.expires),
        );
        check(
            CookieField::MaxAge,
            self.max_age.map(FieldValue::Integer),
            FieldValue::Integer(actual.max_age),
        );
        check(
            CookieField::Secure,
            self.secure.map(FieldValue::Flag),
            FieldValue::Flag(actual.secure),
        );
        check(
            CookieField::HttpOnly,
            self.http_only.map(FieldValue::Flag),
            FieldValue::Flag(actual.http_only),
        );
        if !mismatches.is_empty() {
            tracing::debug!(
                cookie = %self.name,
                mismatches = mismatches.len(),
                "cookie attributes do not match"
            );
        }
        Comparison {
            found: true,
            mismatches,
        }
    }
}

/// Returns whether `actual` carries the expected name, along with one message
/// per specified attribute that differs.
#[must_use]
pub fn compare_cookies(expected: &ExpectedCookie, actual: &HttpCookie) -> (bool, Vec<String>) {
    let comparison = expected.compare(actual);
    let messages = comparison.messages();
    (comparison.found, messages)
}
