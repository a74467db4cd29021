use crate::trie::Trie;
use crate::Error;
use log::debug;
use rand::seq::SliceRandom;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;

/// Words shorter than this are not valid boggle words.
pub const MIN_WORD_LEN: usize = 3;

/// Answers the two questions a search asks about a partial word.
pub trait Lexicon {
    /// Returns true if `word` is a complete, valid word.
    fn is_word(&self, word: &str) -> bool;
    /// Returns true if some valid word starts with `prefix`.
    fn is_prefix(&self, prefix: &str) -> bool;
}

/// The words that may be found on a board, stored in a [`Trie`](crate::Trie).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dictionary {
    trie: Trie,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not built from a file.
    wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} nodes from '{}'>",
            self.trie.len(),
            self.trie.node_count(),
            self.wordfile
        )
    }
}

impl Dictionary {
    /// Build a dictionary from a list of words.
    ///
    /// Words are trimmed and lowercased. Words shorter than
    /// [`MIN_WORD_LEN`](crate::MIN_WORD_LEN) are skipped.
    /// ## Errors
    /// If a word contains a non-alphabetic character.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Dictionary, Lexicon, Error};
    /// let dictionary = Dictionary::from_words(&["Cat", "at", "cattle"])?;
    /// assert_eq!(dictionary.word_count(), 2);
    /// assert!(dictionary.is_word("cat"));
    /// assert!(!dictionary.is_word("at"));
    /// assert!(dictionary.is_prefix("catt"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Dictionary, Error> {
        let mut trie = Trie::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.len() < MIN_WORD_LEN {
                continue;
            }
            trie.insert(&word.to_lowercase())?;
        }
        debug!(
            "built dictionary: {} words, {} nodes",
            trie.len(),
            trie.node_count()
        );
        Ok(Dictionary {
            trie,
            wordfile: String::new(),
        })
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    ///
    /// The words are shuffled before they are inserted, which keeps the trie
    /// balanced when the file is sorted.
    /// ## Errors
    /// Fails if the file can not be read, or a word contains a non-alphabetic
    /// character.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut words: Vec<&str> = contents.lines().collect();
        words.shuffle(&mut rand::thread_rng());
        let mut dictionary = Dictionary::from_words(&words)?;
        dictionary.wordfile = String::from(wordfile);
        debug!("loaded {}", dictionary);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::DeserializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Write the dictionary to `path` with bincode.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_to(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::WriteError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::SerializeError(String::from(path)))
    }

    /// The number of words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }

    /// Return reference to our trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Path of the file the dictionary was read from, empty if none.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }
}

/// Strings that are not valid trie keys are neither words nor prefixes.
impl Lexicon for Dictionary {
    fn is_word(&self, word: &str) -> bool {
        word.len() >= MIN_WORD_LEN && self.trie.contains_exact(word).unwrap_or(false)
    }

    fn is_prefix(&self, prefix: &str) -> bool {
        self.trie.contains_prefix(prefix).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    #[test]
    fn test_short_words_skipped() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        assert_eq!(dictionary.word_count(), 6);
        for &word in WORDS {
            assert_eq!(dictionary.is_word(word), word.len() >= MIN_WORD_LEN);
        }
        assert!(!dictionary.is_prefix("af"));
        assert!(dictionary.is_prefix("be"));
        assert!(!dictionary.is_word("be"));
        Ok(())
    }

    #[test]
    fn test_normalize() -> Result<()> {
        let dictionary = Dictionary::from_words(&["  Belt\r", "BAR", ""])?;
        assert_eq!(dictionary.word_count(), 2);
        assert!(dictionary.is_word("belt"));
        assert!(dictionary.is_word("bar"));
        assert!(!dictionary.is_word("BAR"));
        Ok(())
    }

    #[test]
    fn test_invalid_lookup() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        assert!(!dictionary.is_word(""));
        assert!(!dictionary.is_prefix(""));
        assert!(!dictionary.is_prefix("b-"));
        assert!(!dictionary.is_word("bel!"));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidKey(\"don't\")")]
    fn test_invalid_word() {
        Dictionary::from_words(&["cat", "don't"]).unwrap();
    }

    #[test]
    fn test_from_file() -> Result<()> {
        let path = std::env::temp_dir().join(format!("boggle-words-{}.txt", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "cat\ncot\nat\nDOG\n\nbelt").unwrap();
        }
        let wordfile = path.to_str().unwrap();
        let dictionary = Dictionary::from_file(wordfile)?;
        std::fs::remove_file(&path).unwrap();
        assert_eq!(dictionary.word_count(), 4);
        assert_eq!(dictionary.wordfile(), wordfile);
        assert_eq!(dictionary.trie().keys(), vec!["belt", "cat", "cot", "dog"]);
        println!("{}", dictionary);
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_deserialize_from() -> Result<()> {
        let path = std::env::temp_dir().join(format!("boggle-words-{}.bin", std::process::id()));
        let path = path.to_str().unwrap();
        let dictionary = Dictionary::from_words(WORDS)?;
        dictionary.serialize_to(path)?;
        let loaded = Dictionary::deserialize_from(path)?;
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded.wordfile(), path);
        assert_eq!(loaded.trie().keys(), dictionary.trie().keys());
        assert!(loaded.is_word("belt"));
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_serialize_to_missing_dir() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        match dictionary.serialize_to("no/such/dir/words.bin") {
            Err(Error::WriteError { path, source }) => {
                assert_eq!(path, "no/such/dir/words.bin");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected WriteError, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        match Dictionary::from_file("no/such/wordfile.txt") {
            Err(Error::ReadError { path, .. }) => assert_eq!(path, "no/such/wordfile.txt"),
            other => panic!("expected ReadError, got {:?}", other),
        }
    }
}
