use cookie::{time::Duration, time::OffsetDateTime, Cookie, Expiration};

/// A partially specified cookie. Attributes left unset are not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpectedCookie {
    pub(crate) name: String,
    pub(crate) value: Option<String>,
    pub(crate) path: Option<String>,
    pub(crate) domain: Option<String>,
    pub(crate) expires: Option<OffsetDateTime>,
    pub(crate) max_age: Option<i64>,
    pub(crate) secure: Option<bool>,
    pub(crate) http_only: Option<bool>,
}

impl ExpectedCookie {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            path: None,
            domain: None,
            expires: None,
            max_age: None,
            secure: None,
            http_only: None,
        }
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..self
        }
    }

    pub fn path(self, path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..self
        }
    }

    pub fn domain(self, domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..self
        }
    }

    pub fn expires(self, expires: OffsetDateTime) -> Self {
        Self {
            expires: Some(expires),
            ..self
        }
    }

    /// In seconds. Negative values are kept as is.
    pub fn max_age(self, max_age: i64) -> Self {
        Self {
            max_age: Some(max_age),
            ..self
        }
    }

    pub fn secure(self, secure: bool) -> Self {
        Self {
            secure: Some(secure),
            ..self
        }
    }

    pub fn http_only(self, http_only: bool) -> Self {
        Self {
            http_only: Some(http_only),
            ..self
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn to_http_cookie(&self) -> HttpCookie {
        HttpCookie {
            name: self.name.clone(),
            value: self.value.clone().unwrap_or_default(),
            path: self.path.clone().unwrap_or_default(),
            domain: self.domain.clone().unwrap_or_default(),
            expires: self.expires.unwrap_or(OffsetDateTime::UNIX_EPOCH),
            max_age: self.max_age.unwrap_or_default(),
            secure: self.secure.unwrap_or_default(),
            http_only: self.http_only.unwrap_or_default(),
        }
    }
}

impl From<ExpectedCookie> for HttpCookie {
    fn from(expected: ExpectedCookie) -> Self {
        expected.to_http_cookie()
    }
}

/// A cookie with every attribute populated.
///
/// Attributes missing from the wire take their zero value: an empty string,
/// the unix epoch for `expires`, `0` for `max_age` and `false` for flags.
/// A `max_age` below zero means the cookie is to be deleted immediately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: String,
    pub expires: OffsetDateTime,
    pub max_age: i64,
    pub secure: bool,
    pub http_only: bool,
}

impl HttpCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: String::new(),
            domain: String::new(),
            expires: OffsetDateTime::UNIX_EPOCH,
            max_age: 0,
            secure: false,
            http_only: false,
        }
    }

    /// Builds a cookie suitable for a `Set-Cookie` or `Cookie` header.
    /// Zero valued attributes are left out.
    ///
    /// `Expires` is rendered at second precision, so a sub-second `expires`
    /// does not survive a trip through the header text.
    #[must_use]
    pub fn to_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::new(self.name.clone(), self.value.clone());
        if !self.path.is_empty() {
            cookie.set_path(self.path.clone());
        }
        if !self.domain.is_empty() {
            cookie.set_domain(self.domain.clone());
        }
        if self.expires != OffsetDateTime::UNIX_EPOCH {
            cookie.set_expires(Expiration::DateTime(self.expires));
        }
        if self.max_age > 0 {
            cookie.set_max_age(Duration::seconds(self.max_age));
        } else if self.max_age < 0 {
            cookie.set_max_age(Duration::ZERO);
        }
        if self.secure {
            cookie.set_secure(true);
        }
        if self.http_only {
            cookie.set_http_only(true);
        }
        cookie
    }
}

impl<'c> From<&Cookie<'c>> for HttpCookie {
    fn from(cookie: &Cookie<'c>) -> Self {
        let expires = match cookie.expires() {
            Some(Expiration::DateTime(expires)) => expires,
            Some(Expiration::Session) | None => OffsetDateTime::UNIX_EPOCH,
        };
        let max_age = match cookie.max_age() {
            Some(max_age) if max_age.is_positive() => max_age.whole_seconds(),
            Some(_) => -1,
            None => 0,
        };
        Self {
            name: cookie.name().to_string(),
            value: cookie.value().to_string(),
            path: cookie.path().unwrap_or_default().to_string(),
            domain: cookie.domain().unwrap_or_default().to_string(),
            expires,
            max_age,
            secure: cookie.secure().unwrap_or_default(),
            http_only: cookie.http_only().unwrap_or_default(),
        }
    }
}

impl<'c> From<Cookie<'c>> for HttpCookie {
    fn from(cookie: Cookie<'c>) -> Self {
        Self::from(&cookie)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpectedCookie, HttpCookie};
    use cookie::{
        time::{Duration, OffsetDateTime},
        Cookie,
    };
    use time::macros::datetime;

    #[test]
    fn unset_attributes_convert_to_zero_values() {
        let converted = ExpectedCookie::new("session").to_http_cookie();
        assert_eq!(converted, HttpCookie::new("session", ""));
        assert_eq!(converted.expires, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(converted.max_age, 0);
        assert!(!converted.secure);
        assert!(!converted.http_only);
    }

    #[test]
    fn set_attributes_are_copied_verbatim() {
        let expires = datetime!(2024-01-01 0:00 UTC);
        let converted: HttpCookie = ExpectedCookie::new("session")
            .value("abc123")
            .path("/")
            .domain("example.com")
            .expires(expires)
            .max_age(-7)
            .secure(true)
            .http_only(true)
            .into();
        assert_eq!(
            converted,
            HttpCookie {
                name: "session".to_string(),
                value: "abc123".to_string(),
                path: "/".to_string(),
                domain: "example.com".to_string(),
                expires,
                max_age: -7,
                secure: true,
                http_only: true,
            }
        );
    }

    #[test]
    fn last_setter_call_wins() {
        let twice = ExpectedCookie::new("session").value("x").value("y");
        assert_eq!(twice, ExpectedCookie::new("session").value("y"));
        assert_eq!(twice.to_http_cookie().value, "y");
    }

    #[test]
    fn empty_name_is_accepted() {
        assert_eq!(ExpectedCookie::new("").name(), "");
    }

    #[test]
    fn parsed_cookie_fills_missing_attributes_with_zero_values() {
        let parsed = Cookie::parse("id=42").unwrap();
        assert_eq!(HttpCookie::from(&parsed), HttpCookie::new("id", "42"));
    }

    #[test]
    fn parsed_cookie_keeps_present_attributes() {
        let parsed = Cookie::parse(
            "id=42; Path=/api; Domain=example.com; Max-Age=60; \
             Expires=Wed, 21 Oct 2015 07:28:00 GMT; Secure; HttpOnly",
        )
        .unwrap();
        let cookie = HttpCookie::from(parsed);
        assert_eq!(cookie.path, "/api");
        assert_eq!(cookie.domain, "example.com");
        assert_eq!(cookie.max_age, 60);
        assert_eq!(cookie.expires, datetime!(2015-10-21 7:28 UTC));
        assert!(cookie.secure);
        assert!(cookie.http_only);
    }

    #[test]
    fn non_positive_max_age_marks_cookie_for_deletion() {
        let parsed = Cookie::parse("id=42; Max-Age=0").unwrap();
        assert_eq!(HttpCookie::from(&parsed).max_age, -1);
    }

    #[test]
    fn header_round_trip_truncates_expires_to_seconds() {
        let cookie = HttpCookie {
            expires: datetime!(2024-01-01 0:00:00.5 UTC),
            ..HttpCookie::new("id", "42")
        };
        let rendered = cookie.to_cookie().to_string();
        let parsed = HttpCookie::from(Cookie::parse(rendered).unwrap());
        assert_eq!(parsed.expires, datetime!(2024-01-01 0:00 UTC));
    }

    #[test]
    fn to_cookie_skips_zero_values() {
        let rendered = HttpCookie::new("id", "42").to_cookie();
        assert_eq!(rendered.to_string(), "id=42");
    }

    #[test]
    fn to_cookie_renders_set_attributes() {
        let rendered = HttpCookie {
            path: "/".to_string(),
            max_age: 60,
            secure: true,
            http_only: true,
            ..HttpCookie::new("id", "42")
        }
        .to_cookie();
        assert_eq!(rendered.path(), Some("/"));
        assert_eq!(rendered.max_age(), Some(Duration::seconds(60)));
        assert_eq!(rendered.secure(), Some(true));
        assert_eq!(rendered.http_only(), Some(true));
        assert!(rendered.domain().is_none());
        assert!(rendered.expires().is_none());
    }

    #[test]
    fn negative_max_age_renders_as_zero() {
        let rendered = HttpCookie {
            max_age: -1,
            ..HttpCookie::new("id", "")
        }
        .to_cookie();
        assert_eq!(rendered.max_age(), Some(Duration::ZERO));
    }
}
