use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CookieAssertionError {
    #[error("ExpectedCookie not found - {0}")]
    NotFound(String),

    #[error("ExpectedCookie found - {0}")]
    UnexpectedlyPresent(String),

    #[error("cookie {name} mismatched: {}", mismatches.join(", "))]
    Mismatched {
        name: String,
        mismatches: Vec<String>,
    },

    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}
