use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary {0} could not be deserialized")]
    DeserializeError(String),

    /// Error creating the file to write a dictionary to
    #[cfg(feature = "bincode")]
    #[error("Dictionary file \"{path}\" could not be created")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// Error serializing dictionary with bincode
    #[cfg(feature = "bincode")]
    #[error("Dictionary could not be serialized to {0}")]
    SerializeError(String),

    /// An empty key can not be stored or looked up in the trie
    #[error("Empty key")]
    EmptyKey,

    /// The trie has no room for the nodes of another key
    #[error("Trie is full, can not insert \"{0}\"")]
    TrieFull(String),

    /// The key contains a non-alphabetic character
    #[error("Invalid key \"{0}\": non-alphabetic character")]
    InvalidKey(String),

    /// The number of letters does not fill a `dimension` x `dimension` board
    #[error("Board dimension {dimension} does not match {len} letters")]
    DimensionMismatch { dimension: usize, len: usize },

    /// The board string is empty or only whitespace
    #[error("Board is empty")]
    EmptyBoard,

    /// The board contains a non-alphabetic character
    #[error("Invalid letter '{letter}' in board \"{board}\"")]
    InvalidBoardLetter { letter: char, board: String },

    /// A letter appears twice while the board rules require unique letters
    #[error("Duplicate letter '{0}' in board")]
    DuplicateLetter(char),
}
