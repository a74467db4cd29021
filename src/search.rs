use crate::board::{Board, Pos};
use crate::dictionary::{Dictionary, Lexicon};
use crate::results::ResultSet;

#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, trace};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::ops::{Deref, DerefMut};

/// The partial word built by one search, and the cells it occupies.
#[derive(Debug)]
struct Path {
    word: String,
    visited: Vec<bool>,
}

impl Path {
    fn new(cells: usize) -> Path {
        Path {
            word: String::new(),
            visited: vec![false; cells],
        }
    }

    fn word(&self) -> &str {
        &self.word
    }

    fn is_visited(&self, offset: usize) -> bool {
        self.visited[offset]
    }

    /// Put the cell at `offset` with `letters` on the path.
    /// The cell is taken off again when the returned `Step` is dropped.
    fn enter(&mut self, offset: usize, letters: &str) -> Step<'_> {
        let len = self.word.len();
        self.word.push_str(letters);
        self.visited[offset] = true;
        Step {
            path: self,
            offset,
            len,
        }
    }
}

/// A cell on the path, valid for one level of the search.
struct Step<'p> {
    path: &'p mut Path,
    offset: usize,
    /// Length of the word before this cell was entered.
    len: usize,
}

impl Drop for Step<'_> {
    fn drop(&mut self) {
        // a "qu" cell takes both letters with it
        self.path.word.truncate(self.len);
        self.path.visited[self.offset] = false;
    }
}

impl Deref for Step<'_> {
    type Target = Path;
    fn deref(&self) -> &Path {
        self.path
    }
}

impl DerefMut for Step<'_> {
    fn deref_mut(&mut self) -> &mut Path {
        self.path
    }
}

/// Finds all words of a [`Lexicon`](crate::Lexicon) on a [`Board`](crate::Board).
///
/// Every cell starts a depth first search along adjacent cells. A branch is
/// abandoned as soon as the letters collected so far are not the start of any
/// word.
#[derive(Debug)]
pub struct Searcher<'a, L = Dictionary> {
    board: &'a Board,
    lexicon: &'a L,
}

impl<'a, L: Lexicon> Searcher<'a, L> {
    pub fn new(board: &'a Board, lexicon: &'a L) -> Searcher<'a, L> {
        Searcher { board, lexicon }
    }

    /// Add all words that start at `start` to `found`.
    pub fn search_from(&self, start: Pos, found: &mut ResultSet) {
        trace!("search from {:?}", start);
        let mut path = Path::new(self.board.cells().len());
        self.extend(&mut path, start, found);
    }

    fn extend(&self, path: &mut Path, pos: Pos, found: &mut ResultSet) {
        let cell = self.board[pos];
        let mut step = path.enter(self.board.offset(pos), cell.as_str());
        if !self.lexicon.is_prefix(step.word()) {
            return;
        }
        if self.lexicon.is_word(step.word()) {
            found.add_if_absent(step.word());
        }
        for next in self.board.neighbors(pos) {
            if !step.is_visited(self.board.offset(next)) {
                self.extend(&mut step, next, found);
            }
        }
    }

    /// Search from every cell, one after the other.
    pub fn find_words_sequential(&self) -> ResultSet {
        let mut found = ResultSet::new();
        for pos in self.board.positions() {
            self.search_from(pos, &mut found);
        }
        debug!("found {} words on {} cells", found.len(), self.board.cells().len());
        found
    }

    /// Find all words on the board.
    #[cfg(not(feature = "rayon"))]
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn find_words(&self) -> ResultSet {
        self.find_words_sequential()
    }

    /// Find all words on the board, searching from all cells in parallel.
    #[cfg(feature = "rayon")]
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn find_words(&self) -> ResultSet
    where
        L: Sync,
    {
        let n = self.board.cells().len();
        let dimension = self.board.dimension();
        let found = (0..n)
            .into_par_iter()
            .map(|i| {
                let mut found = ResultSet::new();
                self.search_from((i / dimension, i % dimension), &mut found);
                found
            })
            .reduce(ResultSet::new, ResultSet::merge);
        debug!("found {} words on {} cells", found.len(), n);
        found
    }
}

/// Find all words from `dictionary` on `board`.
/// ## Examples
/// ```
/// # use boggle_solver::{solve, Board, Dictionary, Error};
/// let board = Board::new(3, "catdogxyz")?;
/// let dictionary = Dictionary::from_words(&["cat", "cot", "dog", "act", "toy"])?;
/// let words = solve(&board, &dictionary);
/// assert_eq!(words.as_ref(), &["cat", "cot", "dog", "toy"]);
/// # Ok::<(), Error>(())
/// ```
pub fn solve(board: &Board, dictionary: &Dictionary) -> ResultSet {
    Searcher::new(board, dictionary).find_words()
}
