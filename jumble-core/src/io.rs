use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole vocabulary file into memory.
pub(crate) fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(path)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Names a vocabulary after the file it comes from.
///
/// - `"./data/dictionary.json"` → `"dictionary"`
/// - `"lorem_ipsum.json"` → `"lorem_ipsum"`
pub(crate) fn vocabulary_name<P: AsRef<Path>>(path: P) -> io::Result<String> {
	match path.as_ref().file_stem() {
		Some(stem) => Ok(stem.to_string_lossy().into_owned()),
		None => Err(io::Error::new(io::ErrorKind::InvalidInput, "Vocabulary path has no file name")),
	}
}
