pub use apicheck_core::*;
#[cfg(feature = "http")]
pub use apicheck_http::*;
