use crate::{errors::CookieAssertionError, response::ResponseCookies};
use apicheck_core::ExpectedCookie;

/// Cookie assertions to run against a response.
#[derive(Clone, Debug, Default)]
pub struct CookieExpectations {
    cookies: Vec<ExpectedCookie>,
    present: Vec<String>,
    not_present: Vec<String>,
}

impl CookieExpectations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cookie(mut self, cookie: ExpectedCookie) -> Self {
        self.cookies.push(cookie);
        self
    }

    pub fn cookies(mut self, cookies: impl IntoIterator<Item = ExpectedCookie>) -> Self {
        self.cookies.extend(cookies);
        self
    }

    pub fn present(mut self, name: impl Into<String>) -> Self {
        self.present.push(name.into());
        self
    }

    pub fn not_present(mut self, name: impl Into<String>) -> Self {
        self.not_present.push(name.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty() && self.present.is_empty() && self.not_present.is_empty()
    }

    /// Runs the expected cookie checks, then the presence checks, and
    /// returns the first failure.
    ///
    /// Mismatches are collected from every response cookie sharing the
    /// expected name.
    pub fn verify(&self, actual: &ResponseCookies) -> Result<(), CookieAssertionError> {
        for expected in &self.cookies {
            let mut found = false;
            let mut mismatches = Vec::new();
            for cookie in actual {
                let comparison = expected.compare(cookie);
                if comparison.found {
                    found = true;
                    mismatches.extend(comparison.messages());
                }
            }
            if !found {
                tracing::debug!(cookie = expected.name(), "expected cookie not found");
                return Err(CookieAssertionError::NotFound(expected.name().to_string()));
            }
            if !mismatches.is_empty() {
                return Err(CookieAssertionError::Mismatched {
                    name: expected.name().to_string(),
                    mismatches,
                });
            }
        }
        if let Some(name) = self.present.iter().find(|name| !actual.contains(name)) {
            tracing::debug!(cookie = %name, "cookie expected to be present");
            return Err(CookieAssertionError::NotFound(name.clone()));
        }
        if let Some(name) = self.not_present.iter().find(|name| actual.contains(name)) {
            tracing::debug!(cookie = %name, "cookie expected to be absent");
            return Err(CookieAssertionError::UnexpectedlyPresent(name.clone()));
        }
        Ok(())
    }
}
