use apicheck_core::HttpCookie;
use cookie::Cookie;
use http::{header::SET_COOKIE, HeaderMap};

/// Cookies set by a response, in header order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseCookies(Vec<HttpCookie>);

impl ResponseCookies {
    pub fn new(cookies: Vec<HttpCookie>) -> Self {
        Self(cookies)
    }

    /// Reads every `Set-Cookie` header. Values that fail to parse are skipped.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let cookies = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|header| {
                let Ok(header) = std::str::from_utf8(header.as_bytes()) else {
                    tracing::warn!("skipping set-cookie header that is not utf-8");
                    return None;
                };
                match Cookie::parse(header) {
                    Ok(cookie) => Some(HttpCookie::from(&cookie)),
                    Err(err) => {
                        tracing::warn!(header, %err, "skipping unparsable set-cookie header");
                        None
                    }
                }
            })
            .collect();
        Self(cookies)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HttpCookie> {
        self.0.iter()
    }

    /// First cookie with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HttpCookie> {
        self.0.iter().find(|cookie| cookie.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<HttpCookie>> for ResponseCookies {
    fn from(cookies: Vec<HttpCookie>) -> Self {
        Self::new(cookies)
    }
}

impl FromIterator<HttpCookie> for ResponseCookies {
    fn from_iter<T: IntoIterator<Item = HttpCookie>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResponseCookies {
    type Item = &'a HttpCookie;
    type IntoIter = std::slice::Iter<'a, HttpCookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
