pub mod errors;
pub mod expectations;
pub mod request;
pub mod response;

pub use crate::expectations::CookieExpectations;
pub use crate::request::request_cookie_header;
pub use crate::response::ResponseCookies;
