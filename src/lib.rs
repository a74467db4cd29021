//! A boggle solver library for Rust.
//! <br>
//! This crate finds all words from a dictionary on a boggle board: words of
//! three or more letters, formed by a path of adjacent cells (horizontally,
//! vertically or diagonally) that uses every cell at most once.
//! It can use the `rayon` crate to search from all cells in parallel.
//!
//! # How to use `boggle_solver`
//! Create a [`Dictionary`](crate::Dictionary) from a list of words or a word
//! file, and a square [`Board`](crate::Board) from its letters, row by row.
//! A `q` on the board stands for the two letters `qu`.
//! The word file must be in utf-8 and contain one word per line.
//!
//! # Basic usage
//!  ```
//! # use boggle_solver::{solve, Board, Dictionary, Error};
//! let dictionary = Dictionary::from_words(&["quit", "quits", "its", "sit", "suit"])?;
//! let board = Board::new(2, "iqts")?;
//! println!("{}", board);
//! let words = solve(&board, &dictionary);
//! assert_eq!(words.as_ref(), &["its", "quit", "quits", "sit"]);
//! for word in &words {
//!     println!("{}", word);
//! }
//! # Ok::<(), Error>(())
//! ```
//!
//! # About implementation
//! The dictionary is a ternary search trie. The search abandons a path as soon
//! as its letters are not the start of any dictionary word.
mod board;
mod dictionary;
mod error;
mod results;
mod search;
mod trie;

pub use crate::board::{Board, Cell, Neighbors, Pos, Rules};
pub use crate::dictionary::{Dictionary, Lexicon, MIN_WORD_LEN};
pub use crate::error::Error;
pub use crate::results::ResultSet;
pub use crate::search::{solve, Searcher};
pub use crate::trie::Trie;
