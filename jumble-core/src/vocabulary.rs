use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{JumbleError, Result};
use crate::io::{read_to_string, vocabulary_name};

/// Environment variable pointing at a JSON file replacing the embedded lorem-ipsum words.
pub const LOREM_IPSUM_PATH_VAR: &str = "JUMBLE_LOREM_IPSUM_PATH";

/// Environment variable pointing at a JSON file replacing the embedded dictionary.
pub const DICTIONARY_PATH_VAR: &str = "JUMBLE_DICTIONARY_PATH";

const LOREM_IPSUM_NAME: &str = "lorem_ipsum";
const DICTIONARY_NAME: &str = "dictionary";

const EMBEDDED_LOREM_IPSUM: &str = include_str!("../data/lorem_ipsum.json");
const EMBEDDED_DICTIONARY: &str = include_str!("../data/dictionary.json");

static LOREM_IPSUM: OnceLock<Result<Vocabulary>> = OnceLock::new();
static DICTIONARY: OnceLock<Result<Vocabulary>> = OnceLock::new();

/// Accepted shapes of a vocabulary file: a bare array of words, or an
/// object holding the array under `words`.
#[derive(Deserialize)]
#[serde(untagged)]
enum VocabularyFile {
	Words(Vec<String>),
	Document { words: Vec<String> },
}

impl VocabularyFile {
	fn into_words(self) -> Vec<String> {
		match self {
			VocabularyFile::Words(words) | VocabularyFile::Document { words } => words,
		}
	}
}

/// Where a process-wide vocabulary is read from on first access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
	/// The word list compiled into the crate.
	Embedded,
	/// A JSON file on disk.
	Path(PathBuf),
}

impl VocabularySource {
	/// `Path` when the environment variable `var` is set, `Embedded` otherwise.
	pub fn from_env(var: &str) -> Self {
		match env::var_os(var) {
			Some(path) if !path.is_empty() => VocabularySource::Path(PathBuf::from(path)),
			_ => VocabularySource::Embedded,
		}
	}
}

/// An immutable, non-empty, ordered word list.
///
/// # Invariants
/// - `words` is never empty and holds no blank entry
/// - `by_initial` maps each uppercase ASCII letter to the words starting
///   with it, in vocabulary order; letters without words have no entry
#[derive(Debug, Clone)]
pub struct Vocabulary {
	name: String,
	words: Vec<String>,
	by_initial: HashMap<char, Vec<String>>,
}

impl Vocabulary {
	/// Builds a vocabulary from a list of words.
	///
	/// Surrounding whitespace is trimmed from every word.
	///
	/// # Errors
	/// `VocabularyLoad` if the list is empty or holds a blank word.
	pub fn new(name: &str, words: Vec<String>) -> Result<Self> {
		if words.is_empty() {
			return Err(JumbleError::vocabulary_load(name, "the word list is empty"));
		}

		let mut trimmed = Vec::with_capacity(words.len());
		for (position, word) in words.into_iter().enumerate() {
			let word = word.trim();
			if word.is_empty() {
				return Err(JumbleError::vocabulary_load(name, format!("word {position} is blank")));
			}
			trimmed.push(word.to_owned());
		}

		let mut by_initial: HashMap<char, Vec<String>> = HashMap::new();
		for word in &trimmed {
			if let Some(initial) = initial_of(word) {
				by_initial.entry(initial).or_default().push(word.clone());
			}
		}

		Ok(Self { name: name.to_owned(), words: trimmed, by_initial })
	}

	/// Parses a vocabulary from JSON text.
	///
	/// # Errors
	/// `VocabularyLoad` if the text is not a word list or the list is invalid.
	pub fn from_json(name: &str, json: &str) -> Result<Self> {
		let file: VocabularyFile = serde_json::from_str(json)
			.map_err(|e| JumbleError::vocabulary_load(name, e))?;
		Self::new(name, file.into_words())
	}

	/// Reads a vocabulary from a JSON file, named after the file stem.
	///
	/// # Errors
	/// `VocabularyLoad` if the file cannot be read or parsed.
	pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let name = vocabulary_name(path).map_err(|e| JumbleError::vocabulary_load(path.display().to_string(), e))?;
		let json = read_to_string(path).map_err(|e| JumbleError::vocabulary_load(name.as_str(), e))?;
		Self::from_json(&name, &json)
	}

	/// Name of the vocabulary, used in logs and errors.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// All words, in load order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Words grouped by uppercase initial letter.
	pub fn words_by_initial(&self) -> &HashMap<char, Vec<String>> {
		&self.by_initial
	}

	/// Words whose initial is `letter`, case-insensitively.
	pub fn words_starting_with(&self, letter: char) -> Option<&[String]> {
		self.by_initial
			.get(&letter.to_ascii_uppercase())
			.map(Vec::as_slice)
	}

	/// Number of words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Whether the vocabulary holds no word.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

fn initial_of(word: &str) -> Option<char> {
	word.chars()
		.next()
		.filter(char::is_ascii_alphabetic)
		.map(|c| c.to_ascii_uppercase())
}

fn load(name: &str, source: VocabularySource, embedded: &str) -> Result<Vocabulary> {
	let vocabulary = match &source {
		VocabularySource::Embedded => Vocabulary::from_json(name, embedded),
		VocabularySource::Path(path) => Vocabulary::from_path(path),
	}?;
	log::info!("Loaded vocabulary {} ({} words) from {:?}", vocabulary.name(), vocabulary.len(), source);
	Ok(vocabulary)
}

/// The pseudo-Latin vocabulary used by the text composer.
///
/// Loaded once per process, from `JUMBLE_LOREM_IPSUM_PATH` when set or from
/// the embedded list otherwise. Concurrent first callers wait for the single
/// load and all observe the same result.
///
/// # Errors
/// `VocabularyLoad`, on this and every later call, if loading failed.
pub fn lorem_ipsum() -> Result<&'static Vocabulary> {
	LOREM_IPSUM
		.get_or_init(|| load(LOREM_IPSUM_NAME, VocabularySource::from_env(LOREM_IPSUM_PATH_VAR), EMBEDDED_LOREM_IPSUM))
		.as_ref()
		.map_err(Clone::clone)
}

/// The uppercase English dictionary used by the word picker.
///
/// Same loading rules as [`lorem_ipsum`], with `JUMBLE_DICTIONARY_PATH`.
///
/// # Errors
/// `VocabularyLoad`, on this and every later call, if loading failed.
pub fn dictionary() -> Result<&'static Vocabulary> {
	DICTIONARY
		.get_or_init(|| load(DICTIONARY_NAME, VocabularySource::from_env(DICTIONARY_PATH_VAR), EMBEDDED_DICTIONARY))
		.as_ref()
		.map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;
	use std::thread;

	use super::*;

	fn words(list: &[&str]) -> Vec<String> {
		list.iter().map(|w| (*w).to_owned()).collect()
	}

	#[test]
	fn groups_words_by_uppercase_initial() {
		let vocabulary = Vocabulary::new("test", words(&["apple", "Avocado", "banana", "42", "cherry"])).unwrap();
		assert_eq!(vocabulary.words_starting_with('A').unwrap(), ["apple", "Avocado"]);
		assert_eq!(vocabulary.words_starting_with('b').unwrap(), ["banana"]);
		assert!(vocabulary.words_starting_with('z').is_none());
		assert_eq!(vocabulary.words_by_initial().len(), 3);
		assert_eq!(vocabulary.len(), 5);
	}

	#[test]
	fn rejects_empty_and_blank_lists() {
		let error = Vocabulary::new("empty", Vec::new()).unwrap_err();
		assert_eq!(error.to_string(), "Failed to load vocabulary empty: the word list is empty");

		let error = Vocabulary::new("blank", words(&["one", "  "])).unwrap_err();
		assert_eq!(error.to_string(), "Failed to load vocabulary blank: word 1 is blank");
	}

	#[test]
	fn parses_both_json_shapes() {
		let bare = Vocabulary::from_json("bare", r#"["alpha", "beta"]"#).unwrap();
		let document = Vocabulary::from_json("document", r#"{"words": ["alpha", "beta"]}"#).unwrap();
		assert_eq!(bare.words(), document.words());
	}

	#[test]
	fn malformed_json_is_a_load_failure() {
		let error = Vocabulary::from_json("broken", "{ not json").unwrap_err();
		assert!(matches!(error, JumbleError::VocabularyLoad { ref source_name, .. } if source_name == "broken"));
	}

	#[test]
	fn missing_file_is_a_load_failure() {
		let error = Vocabulary::from_path("./no/such/words.json").unwrap_err();
		assert!(matches!(error, JumbleError::VocabularyLoad { ref source_name, .. } if source_name == "words"));
	}

	#[test]
	fn embedded_vocabularies_load() {
		assert!(lorem_ipsum().unwrap().len() > 50);
		let dictionary = dictionary().unwrap();
		assert!(dictionary.words().iter().all(|w| w == &w.to_uppercase()));
		assert!(dictionary.words_starting_with('n').is_some());
	}

	#[test]
	fn concurrent_first_access_observes_one_vocabulary() {
		let (tx, rx) = mpsc::channel();
		for _ in 0..8 {
			let tx = tx.clone();
			thread::spawn(move || {
				let address = lorem_ipsum().map(|v| v as *const Vocabulary as usize);
				tx.send(address).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let addresses: Vec<usize> = rx.iter().map(|a| a.unwrap()).collect();
		assert_eq!(addresses.len(), 8);
		assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
	}

	#[test]
	fn source_defaults_to_embedded() {
		assert_eq!(VocabularySource::from_env("JUMBLE_TEST_UNSET_VARIABLE"), VocabularySource::Embedded);
	}
}
