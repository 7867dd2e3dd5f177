//! Random word selection from a vocabulary.
//!
//! The free functions draw from the process-wide [`dictionary`]; a
//! [`WordPicker`] works over any [`Vocabulary`].
//!
//! [`dictionary`]: crate::vocabulary::dictionary

use crate::error::{JumbleError, Result};
use crate::juggler::IntJuggler;
use crate::vocabulary::{self, Vocabulary};

/// Picks uniformly random words, optionally constrained by how they start.
#[derive(Debug, Clone, Copy)]
pub struct WordPicker<'a> {
	vocabulary: &'a Vocabulary,
}

impl<'a> WordPicker<'a> {
	/// Creates a picker over `vocabulary`.
	pub fn new(vocabulary: &'a Vocabulary) -> Self {
		Self { vocabulary }
	}

	/// Any word of the vocabulary.
	pub fn random_word(&self) -> Result<&'a str> {
		pick(self.vocabulary.words())
	}

	/// A word starting with `letter`, matched case-insensitively.
	///
	/// # Errors
	/// `LookupMiss` if `letter` is not in `A`–`Z` or no word starts with it.
	pub fn random_word_starting_with(&self, letter: char) -> Result<&'a str> {
		if !letter.is_ascii_alphabetic() {
			return Err(JumbleError::lookup_miss(format!(
				"The character \"{letter}\" given is not in the English alphabet"
			)));
		}

		match self.vocabulary.words_starting_with(letter) {
			Some(words) if !words.is_empty() => pick(words),
			_ => Err(JumbleError::lookup_miss(format!("No words start with \"{letter}\""))),
		}
	}

	/// A word starting with `prefix`, matched case-insensitively.
	///
	/// # Errors
	/// `LookupMiss` if no word starts with `prefix`.
	pub fn random_word_with_prefix(&self, prefix: &str) -> Result<&'a str> {
		let upper = prefix.to_uppercase();
		let matches: Vec<&'a String> = self
			.vocabulary
			.words()
			.iter()
			.filter(|word| word.to_uppercase().starts_with(&upper))
			.collect();

		if matches.is_empty() {
			return Err(JumbleError::lookup_miss(format!("No words start with \"{prefix}\"")));
		}
		let index = IntJuggler::positive_smaller_than(size_of(matches.len()))?;
		Ok(matches[index as usize].as_str())
	}
}

fn pick(words: &[String]) -> Result<&str> {
	let index = IntJuggler::positive_smaller_than(size_of(words.len()))?;
	Ok(words[index as usize].as_str())
}

fn size_of(len: usize) -> i32 {
	i32::try_from(len).unwrap_or(i32::MAX)
}

/// A random dictionary word.
pub fn random_word() -> Result<&'static str> {
	WordPicker::new(vocabulary::dictionary()?).random_word()
}

/// A random dictionary word starting with `letter`.
pub fn random_word_starting_with(letter: char) -> Result<&'static str> {
	WordPicker::new(vocabulary::dictionary()?).random_word_starting_with(letter)
}

/// A random dictionary word starting with `prefix`.
pub fn random_word_with_prefix(prefix: &str) -> Result<&'static str> {
	WordPicker::new(vocabulary::dictionary()?).random_word_with_prefix(prefix)
}
