pub mod compare;
pub mod cookie;

pub use crate::compare::{compare_cookies, CookieField, Comparison, FieldValue, Mismatch};
pub use crate::cookie::{ExpectedCookie, HttpCookie};
