use std::fmt::Display;

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, JumbleError>;

/// Errors raised by the generators, the vocabulary store and the text composer.
///
/// Every variant is a usage error: the same input always fails the same way,
/// so nothing here is worth retrying. The error is `Clone` because a failed
/// vocabulary load is cached and handed to every later caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JumbleError {
	/// A single-sided bound contradicts the sign implied by the operation.
	#[error("The value given is {value}, but it must be {expected}.")]
	InvalidBound {
		/// The offending bound, rendered as given.
		value: String,
		/// The sign the bound should have had.
		expected: &'static str,
	},

	/// A two-sided range whose minimum is greater than its maximum.
	#[error("The minimum value given is {min}, but it must be smaller than the maximum value given which is {max}.")]
	InvalidRange { min: String, max: String },

	/// A count or length that must be strictly positive was not.
	#[error("{0}")]
	InvalidArgument(String),

	/// A vocabulary could not be read or parsed.
	#[error("Failed to load vocabulary {source_name}: {reason}")]
	VocabularyLoad { source_name: String, reason: String },

	/// No vocabulary entry matches the requested initial or prefix.
	#[error("{0}")]
	LookupMiss(String),
}

impl JumbleError {
	pub(crate) fn invalid_bound(value: impl Display, expected: &'static str) -> Self {
		Self::InvalidBound { value: value.to_string(), expected }.logged()
	}

	pub(crate) fn invalid_range(min: impl Display, max: impl Display) -> Self {
		Self::InvalidRange { min: min.to_string(), max: max.to_string() }.logged()
	}

	pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument(message.into()).logged()
	}

	pub(crate) fn vocabulary_load(source_name: impl Into<String>, reason: impl Display) -> Self {
		let error = Self::VocabularyLoad { source_name: source_name.into(), reason: reason.to_string() };
		log::error!("{error}");
		error
	}

	pub(crate) fn lookup_miss(message: impl Into<String>) -> Self {
		Self::LookupMiss(message.into()).logged()
	}

	fn logged(self) -> Self {
		log::debug!("{self}");
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_bound_echoes_the_value() {
		let error = JumbleError::invalid_bound(-5, "positive");
		assert_eq!(error.to_string(), "The value given is -5, but it must be positive.");
	}

	#[test]
	fn invalid_range_echoes_both_values() {
		let error = JumbleError::invalid_range(10, 2);
		assert_eq!(
			error.to_string(),
			"The minimum value given is 10, but it must be smaller than the maximum value given which is 2."
		);
	}

	#[test]
	fn vocabulary_load_names_the_source() {
		let error = JumbleError::vocabulary_load("lorem-ipsum", "expected value at line 1 column 1");
		assert_eq!(
			error.to_string(),
			"Failed to load vocabulary lorem-ipsum: expected value at line 1 column 1"
		);
	}
}
