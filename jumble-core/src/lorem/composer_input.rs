use crate::error::{JumbleError, Result};

/// Default number of words of a sentence, `[MIN_WORDS, MAX_WORDS)`.
pub const MIN_WORDS: i32 = 10;
pub const MAX_WORDS: i32 = 20;

/// Default number of sentences of a paragraph, `[MIN_SENTENCES, MAX_SENTENCES)`.
pub const MIN_SENTENCES: i32 = 3;
pub const MAX_SENTENCES: i32 = 5;

pub(crate) const NOT_POSITIVE: &str = "The integers provided should be positive";

/// Shape of the text produced when a call does not fix the counts itself.
///
/// # Invariants
/// - every bound is strictly positive
/// - `min_words <= max_words` and `min_sentences <= max_sentences`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerInput {
	min_words: i32,
	max_words: i32,
	min_sentences: i32,
	max_sentences: i32,
}

impl Default for ComposerInput {
	fn default() -> Self {
		Self {
			min_words: MIN_WORDS,
			max_words: MAX_WORDS,
			min_sentences: MIN_SENTENCES,
			max_sentences: MAX_SENTENCES,
		}
	}
}

impl ComposerInput {
	/// Creates an input with explicit word and sentence ranges.
	///
	/// # Errors
	/// `InvalidArgument` if a bound is not strictly positive or a range is reversed.
	pub fn new(min_words: i32, max_words: i32, min_sentences: i32, max_sentences: i32) -> Result<Self> {
		let mut input = Self::default();
		input.set_words_range(min_words, max_words)?;
		input.set_sentences_range(min_sentences, max_sentences)?;
		Ok(input)
	}

	/// Fewest words of a default sentence.
	pub fn min_words(&self) -> i32 {
		self.min_words
	}

	/// Exclusive upper bound on the words of a default sentence.
	pub fn max_words(&self) -> i32 {
		self.max_words
	}

	/// Fewest sentences of a default paragraph.
	pub fn min_sentences(&self) -> i32 {
		self.min_sentences
	}

	/// Exclusive upper bound on the sentences of a default paragraph.
	pub fn max_sentences(&self) -> i32 {
		self.max_sentences
	}

	/// Sets the range of words per sentence.
	///
	/// # Errors
	/// `InvalidArgument` if a bound is not strictly positive or `min > max`.
	/// The input is left unchanged on error.
	pub fn set_words_range(&mut self, min: i32, max: i32) -> Result<()> {
		check_range(min, max, "words")?;
		self.min_words = min;
		self.max_words = max;
		Ok(())
	}

	/// Sets the range of sentences per paragraph.
	///
	/// # Errors
	/// `InvalidArgument` if a bound is not strictly positive or `min > max`.
	/// The input is left unchanged on error.
	pub fn set_sentences_range(&mut self, min: i32, max: i32) -> Result<()> {
		check_range(min, max, "sentences")?;
		self.min_sentences = min;
		self.max_sentences = max;
		Ok(())
	}
}

fn check_range(min: i32, max: i32, unit: &str) -> Result<()> {
	if min <= 0 || max <= 0 {
		return Err(JumbleError::invalid_argument(NOT_POSITIVE));
	}
	if min > max {
		return Err(JumbleError::invalid_argument(format!(
			"The minimum number of {unit} given is {min}, but it must not exceed the maximum which is {max}"
		)));
	}
	Ok(())
}
