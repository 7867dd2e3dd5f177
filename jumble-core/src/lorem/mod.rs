//! Lorem-ipsum text composition.
//!
//! The free functions compose from the process-wide [`lorem_ipsum`]
//! vocabulary with the default [`ComposerInput`]. Build a [`Composer`] to
//! use another vocabulary or other default ranges.
//!
//! [`lorem_ipsum`]: crate::vocabulary::lorem_ipsum

use crate::error::Result;
use crate::vocabulary;

/// Sentence and paragraph construction over any vocabulary.
pub mod composer;

/// Default word and sentence ranges, with validated setters.
pub mod composer_input;

pub use composer::{Composer, PUNCTUATIONS};
pub use composer_input::ComposerInput;

fn composer() -> Result<Composer<'static>> {
	Ok(Composer::new(vocabulary::lorem_ipsum()?))
}

/// A sentence of 10 to 19 words.
pub fn sentence() -> Result<String> {
	composer()?.sentence()
}

/// A sentence of exactly `words` words.
pub fn sentence_of_words(words: i32) -> Result<String> {
	composer()?.sentence_of_words(words)
}

/// A sentence with a word count in `[min_words, max_words)`.
pub fn sentence_of_words_between(min_words: i32, max_words: i32) -> Result<String> {
	composer()?.sentence_of_words_between(min_words, max_words)
}

/// A paragraph of 3 or 4 sentences of 10 to 19 words.
pub fn paragraph() -> Result<String> {
	composer()?.paragraph()
}

/// A paragraph of exactly `sentences` sentences.
pub fn paragraph_with_sentences(sentences: i32) -> Result<String> {
	composer()?.paragraph_with_sentences(sentences)
}

/// A paragraph with a sentence count in `[min_sentences, max_sentences)`.
pub fn paragraph_with_sentences_between(min_sentences: i32, max_sentences: i32) -> Result<String> {
	composer()?.paragraph_with_sentences_between(min_sentences, max_sentences)
}

/// A paragraph of `sentences` sentences of `words` words.
pub fn paragraph_with_sentences_of_words(sentences: i32, words: i32) -> Result<String> {
	composer()?.paragraph_with_sentences_of_words(sentences, words)
}

/// A paragraph of `sentences` sentences with `[min_words, max_words)` words each.
pub fn paragraph_with_sentences_of_words_between(sentences: i32, min_words: i32, max_words: i32) -> Result<String> {
	composer()?.paragraph_with_sentences_of_words_between(sentences, min_words, max_words)
}

/// A paragraph with both counts drawn from ranges.
pub fn paragraph_with_sentences_between_of_words_between(
	min_sentences: i32,
	max_sentences: i32,
	min_words: i32,
	max_words: i32,
) -> Result<String> {
	composer()?.paragraph_with_sentences_between_of_words_between(min_sentences, max_sentences, min_words, max_words)
}
