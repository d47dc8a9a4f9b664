use super::generic_error::GenericError;
use std::fmt::Display;

/// Converts a missing or failed value into a [`GenericError`] carrying `msg`.
pub trait OkOrGeneric<T> {
	fn ok_or_generic<S: ToString>(self, msg: S) -> Result<T, GenericError>;
}

impl<T> OkOrGeneric<T> for Option<T> {
	fn ok_or_generic<S: ToString>(self, msg: S) -> Result<T, GenericError> {
		self.ok_or_else(|| GenericError(msg.to_string()))
	}
}

/// The source error's message is appended after the given one.
impl<T, E: Display> OkOrGeneric<T> for Result<T, E> {
	fn ok_or_generic<S: ToString>(self, msg: S) -> Result<T, GenericError> {
		self.map_err(|e| GenericError(format!("{} ({})", msg.to_string(), e)))
	}
}
