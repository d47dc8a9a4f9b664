//! Errors are boxed so reqwest, serde_json and message-only failures share
//! one `Result`.

mod generic_error;
mod ok_or_generic;

pub use generic_error::GenericError;
pub use ok_or_generic::OkOrGeneric;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
