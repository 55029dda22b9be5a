use crate::errors::CookieAssertionError;
use apicheck_core::ExpectedCookie;
use http::HeaderValue;

/// Renders a `Cookie` request header from the given cookies.
///
/// Only names and values are sent; unset values are sent empty. Names must be
/// tokens and values cookie octets, otherwise one cookie could be read as
/// several by the server.
pub fn request_cookie_header(
    cookies: &[ExpectedCookie],
) -> Result<HeaderValue, CookieAssertionError> {
    let pairs = cookies
        .iter()
        .map(|cookie| {
            let cookie = cookie.to_http_cookie();
            if !cookie.name.bytes().all(is_token) {
                return Err(rejected(format!("cookie name {:?}", cookie.name)));
            }
            if !cookie.value.bytes().all(is_cookie_octet) {
                return Err(rejected(format!(
                    "value of cookie {:?}: {:?}",
                    cookie.name, cookie.value
                )));
            }
            Ok(cookie.to_cookie().stripped().to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;
    HeaderValue::from_str(&pairs.join("; ")).map_err(|err| rejected(err.to_string()))
}

fn rejected(reason: String) -> CookieAssertionError {
    tracing::debug!(%reason, "cookie header rejected");
    CookieAssertionError::InvalidHeader(reason)
}

fn is_token(b: u8) -> bool {
    b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b)
}

fn is_cookie_octet(b: u8) -> bool {
    b.is_ascii_graphic() && !matches!(b, b'"' | b',' | b';' | b'\\')
}
