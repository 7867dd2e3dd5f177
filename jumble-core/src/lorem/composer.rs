use crate::error::{JumbleError, Result};
use crate::juggler::IntJuggler;
use crate::vocabulary::Vocabulary;

use super::composer_input::{ComposerInput, NOT_POSITIVE};

/// Marks a sentence may end with.
pub const PUNCTUATIONS: [char; 3] = ['.', '!', '?'];

/// Terminal written while building, swapped for a random mark afterwards.
const PLACEHOLDER: char = '.';
const COMMA: char = ',';

/// Sentences longer than a cadence drawn in `[CADENCE_MIN, CADENCE_MAX)`
/// end with a comma unless they close the paragraph.
const CADENCE_MIN: i32 = 3;
const CADENCE_MAX: i32 = 10;

/// Builds sentences and paragraphs from a vocabulary.
///
/// Every draw (word indices, counts, cadence, punctuation) goes through
/// [`IntJuggler`].
///
/// # Notes
/// - Words are drawn with repetition.
/// - All sentences of one paragraph have the same number of words.
/// - A `.` inside a vocabulary word is treated like a sentence end.
#[derive(Debug, Clone)]
pub struct Composer<'a> {
	vocabulary: &'a Vocabulary,
	input: ComposerInput,
}

impl<'a> Composer<'a> {
	/// Creates a composer using the default `ComposerInput`.
	pub fn new(vocabulary: &'a Vocabulary) -> Self {
		Self::with_input(vocabulary, ComposerInput::default())
	}

	/// Creates a composer whose default sentences and paragraphs follow `input`.
	pub fn with_input(vocabulary: &'a Vocabulary, input: ComposerInput) -> Self {
		Self { vocabulary, input }
	}

	/// Words the composer draws from.
	pub fn vocabulary(&self) -> &'a Vocabulary {
		self.vocabulary
	}

	/// Ranges used when a call does not fix the counts itself.
	pub fn input(&self) -> &ComposerInput {
		&self.input
	}

	/// One sentence with a word count in the input's word range.
	pub fn sentence(&self) -> Result<String> {
		self.compose(1, self.default_words()?)
	}

	/// One sentence of exactly `words` words.
	///
	/// # Errors
	/// `InvalidArgument` if `words <= 0`.
	pub fn sentence_of_words(&self, words: i32) -> Result<String> {
		if words <= 0 {
			return Err(JumbleError::invalid_argument("The number of words provided needs to be positive"));
		}
		self.compose(1, words)
	}

	/// One sentence with a word count in `[min_words, max_words)`.
	///
	/// # Errors
	/// `InvalidArgument` if a bound is not strictly positive,
	/// `InvalidRange` if `min_words > max_words`.
	pub fn sentence_of_words_between(&self, min_words: i32, max_words: i32) -> Result<String> {
		check_positive(&[min_words, max_words])?;
		self.compose(1, IntJuggler::between(min_words, max_words)?)
	}

	/// One paragraph with sentence and word counts taken from the input's ranges.
	pub fn paragraph(&self) -> Result<String> {
		self.compose(self.default_sentences()?, self.default_words()?)
	}

	/// A paragraph of exactly `sentences` sentences.
	///
	/// # Errors
	/// `InvalidArgument` if `sentences <= 0`.
	pub fn paragraph_with_sentences(&self, sentences: i32) -> Result<String> {
		if sentences <= 0 {
			return Err(JumbleError::invalid_argument("The number of sentences provided needs to be positive"));
		}
		self.compose(sentences, self.default_words()?)
	}

	/// A paragraph with a sentence count in `[min_sentences, max_sentences)`.
	///
	/// # Errors
	/// `InvalidArgument` if a bound is not strictly positive,
	/// `InvalidRange` if the range is reversed.
	pub fn paragraph_with_sentences_between(&self, min_sentences: i32, max_sentences: i32) -> Result<String> {
		check_positive(&[min_sentences, max_sentences])?;
		self.compose(IntJuggler::between(min_sentences, max_sentences)?, self.default_words()?)
	}

	/// A paragraph of `sentences` sentences of `words` words each.
	///
	/// # Errors
	/// `InvalidArgument` if either count is not strictly positive.
	pub fn paragraph_with_sentences_of_words(&self, sentences: i32, words: i32) -> Result<String> {
		check_positive(&[sentences, words])?;
		self.compose(sentences, words)
	}

	/// A paragraph of `sentences` sentences, each with a word count in
	/// `[min_words, max_words)`.
	///
	/// # Errors
	/// `InvalidArgument` if a count is not strictly positive,
	/// `InvalidRange` if the word range is reversed.
	pub fn paragraph_with_sentences_of_words_between(
		&self,
		sentences: i32,
		min_words: i32,
		max_words: i32,
	) -> Result<String> {
		check_positive(&[sentences, min_words, max_words])?;
		self.compose(sentences, IntJuggler::between(min_words, max_words)?)
	}

	/// A paragraph with both the sentence count and the word count drawn from ranges.
	///
	/// # Errors
	/// `InvalidArgument` if a bound is not strictly positive,
	/// `InvalidRange` if either range is reversed.
	pub fn paragraph_with_sentences_between_of_words_between(
		&self,
		min_sentences: i32,
		max_sentences: i32,
		min_words: i32,
		max_words: i32,
	) -> Result<String> {
		check_positive(&[min_sentences, max_sentences, min_words, max_words])?;
		self.compose(
			IntJuggler::between(min_sentences, max_sentences)?,
			IntJuggler::between(min_words, max_words)?,
		)
	}

	fn default_words(&self) -> Result<i32> {
		IntJuggler::between(self.input.min_words(), self.input.max_words())
	}

	fn default_sentences(&self) -> Result<i32> {
		IntJuggler::between(self.input.min_sentences(), self.input.max_sentences())
	}

	/// Builds `sentences` sentences of `words` words, then randomizes their
	/// terminal marks and capitals in a second pass.
	fn compose(&self, sentences: i32, words: i32) -> Result<String> {
		log::trace!("Composing {sentences} sentence(s) of {words} word(s) from {}", self.vocabulary.name());

		let mut paragraph = Vec::with_capacity(sentences as usize);
		for i in 0..sentences {
			let sentence_words = self.random_words(words)?;
			paragraph.push(construct_sentence(&sentence_words, i == sentences - 1)?);
		}

		punctuate(&paragraph.join(" "))
	}

	fn random_words(&self, count: i32) -> Result<Vec<&'a str>> {
		let words = self.vocabulary.words();
		let size = i32::try_from(words.len()).unwrap_or(i32::MAX);
		(0..count)
			.map(|_| IntJuggler::positive_smaller_than(size).map(|index| words[index as usize].as_str()))
			.collect()
	}
}

fn check_positive(values: &[i32]) -> Result<()> {
	if values.iter().any(|v| *v <= 0) {
		return Err(JumbleError::invalid_argument(NOT_POSITIVE));
	}
	Ok(())
}

/// Joins the words and appends either a comma or the placeholder terminal.
fn construct_sentence(words: &[&str], is_last_sentence: bool) -> Result<String> {
	let cadence = IntJuggler::between(CADENCE_MIN, CADENCE_MAX)?;
	let mark = if words.len() > cadence as usize && !is_last_sentence { COMMA } else { PLACEHOLDER };

	let mut sentence = words.join(" ");
	sentence.push(mark);
	Ok(sentence)
}

/// Second pass over a paragraph.
///
/// - The first word character of the text is capitalized.
/// - Each placeholder that opens another sentence (optional whitespace, then
///   a word character) becomes a random mark from [`PUNCTUATIONS`], and that
///   word character is capitalized.
/// - The closing placeholder of the text stays a `.`.
fn punctuate(paragraph: &str) -> Result<String> {
	let chars: Vec<char> = paragraph.chars().collect();
	let mut text = String::with_capacity(paragraph.len());
	let mut capitalize_next = true;

	for (i, &c) in chars.iter().enumerate() {
		if c == PLACEHOLDER && opens_sentence(&chars[i + 1..]) {
			text.push(random_punctuation()?);
			capitalize_next = true;
		} else if capitalize_next && c.is_alphanumeric() {
			text.extend(c.to_uppercase());
			capitalize_next = false;
		} else {
			text.push(c);
		}
	}

	Ok(text)
}

fn opens_sentence(rest: &[char]) -> bool {
	rest.iter()
		.find(|c| !c.is_whitespace())
		.is_some_and(|c| c.is_alphanumeric())
}

fn random_punctuation() -> Result<char> {
	let index = IntJuggler::positive_smaller_than(PUNCTUATIONS.len() as i32)?;
	Ok(PUNCTUATIONS[index as usize])
}

#[cfg(test)]
mod tests {
	use super::*;

	fn vocabulary() -> Vocabulary {
		let words = ["alpha", "beta", "gamma", "delta", "epsilon"].map(str::to_owned).to_vec();
		Vocabulary::new("greek", words).unwrap()
	}

	fn ends_with_mark(token: &str) -> bool {
		token.ends_with(PUNCTUATIONS)
	}

	#[test]
	fn sentence_of_words_has_the_requested_length() {
		let vocabulary = vocabulary();
		let composer = Composer::new(&vocabulary);
		for words in 1..30 {
			let sentence = composer.sentence_of_words(words).unwrap();
			let tokens: Vec<&str> = sentence.split(' ').collect();
			assert_eq!(tokens.len(), words as usize);
			assert!(ends_with_mark(tokens.last().unwrap()), "{sentence}");
			assert!(sentence.chars().next().unwrap().is_uppercase());
		}
	}

	#[test]
	fn sentence_only_uses_vocabulary_words() {
		let vocabulary = vocabulary();
		let sentence = Composer::new(&vocabulary).sentence_of_words(50).unwrap();
		for token in sentence.split(' ') {
			let word = token.trim_end_matches([',', '.', '!', '?']).to_lowercase();
			assert!(vocabulary.words().contains(&word), "{word} not in vocabulary");
		}
	}

	#[test]
	fn non_positive_counts_are_rejected_with_a_fixed_message() {
		let vocabulary = vocabulary();
		let composer = Composer::new(&vocabulary);

		let error = composer.sentence_of_words(0).unwrap_err();
		assert_eq!(error.to_string(), "The number of words provided needs to be positive");

		let error = composer.paragraph_with_sentences(-1).unwrap_err();
		assert_eq!(error.to_string(), "The number of sentences provided needs to be positive");

		for error in [
			composer.sentence_of_words_between(0, 4).unwrap_err(),
			composer.paragraph_with_sentences_between(2, 0).unwrap_err(),
			composer.paragraph_with_sentences_of_words(3, 0).unwrap_err(),
			composer.paragraph_with_sentences_of_words_between(0, 1, 2).unwrap_err(),
			composer.paragraph_with_sentences_between_of_words_between(1, 2, 3, -4).unwrap_err(),
		] {
			assert_eq!(error, JumbleError::InvalidArgument(NOT_POSITIVE.to_owned()));
		}
	}

	#[test]
	fn reversed_ranges_are_invalid_ranges() {
		let vocabulary = vocabulary();
		let error = Composer::new(&vocabulary).sentence_of_words_between(9, 3).unwrap_err();
		assert!(matches!(error, JumbleError::InvalidRange { .. }));
	}

	#[test]
	fn custom_input_shapes_default_paragraphs() {
		let vocabulary = vocabulary();
		let input = ComposerInput::new(4, 4, 2, 2).unwrap();
		let composer = Composer::with_input(&vocabulary, input);
		assert_eq!(composer.paragraph().unwrap().split(' ').count(), 8);
		assert_eq!(composer.sentence().unwrap().split(' ').count(), 4);
	}

	#[test]
	fn construct_sentence_closes_the_last_sentence_with_the_placeholder() {
		let words = ["a"; 12];
		for _ in 0..100 {
			assert!(construct_sentence(&words, true).unwrap().ends_with(PLACEHOLDER));
		}
	}

	#[test]
	fn construct_sentence_uses_commas_for_long_inner_sentences() {
		let words = ["a"; 10];
		for _ in 0..100 {
			assert!(construct_sentence(&words, false).unwrap().ends_with(COMMA));
		}
	}

	#[test]
	fn construct_sentence_keeps_short_inner_sentences_closed() {
		let words = ["a"; 3];
		for _ in 0..100 {
			assert!(construct_sentence(&words, false).unwrap().ends_with(PLACEHOLDER));
		}
	}

	#[test]
	fn punctuate_keeps_the_closing_period() {
		for _ in 0..100 {
			let text = punctuate("lorem ipsum. dolor sit. amet.").unwrap();
			assert!(text.ends_with("amet."), "{text}");
		}
	}

	#[test]
	fn punctuate_only_rewrites_placeholders_opening_a_sentence() {
		let mut marks = Vec::new();
		for _ in 0..300 {
			let text = punctuate("lorem. ipsum. ").unwrap();
			marks.push(text.chars().nth(5).unwrap());
			assert!(text.ends_with(". "), "{text}");
			assert!(text.starts_with("Lorem") && text.contains(" Ipsum"));
		}
		for mark in PUNCTUATIONS {
			assert!(marks.contains(&mark), "{mark} never used");
		}
	}

	#[test]
	fn paragraphs_end_with_a_period() {
		let vocabulary = vocabulary();
		let composer = Composer::new(&vocabulary);
		for _ in 0..100 {
			assert!(composer.paragraph_with_sentences_of_words(4, 2).unwrap().ends_with('.'));
			assert!(composer.sentence_of_words(3).unwrap().ends_with('.'));
		}
	}

	#[test]
	fn punctuate_capitalizes_after_every_mark() {
		let text = punctuate("lorem ipsum. dolor sit, amet. consectetur.").unwrap();
		let tokens: Vec<&str> = text.split(' ').collect();
		assert_eq!(tokens[0], "Lorem");
		assert!(tokens[2].starts_with('D'));
		assert_eq!(tokens[3], "sit,");
		assert!(tokens[4].starts_with('a'));
		assert!(tokens[5].starts_with('C'));
		assert!(ends_with_mark(tokens[1]) && ends_with_mark(tokens[4]) && ends_with_mark(tokens[5]));
	}
}
