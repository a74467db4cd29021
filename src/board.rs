use crate::Error;
use std::fmt;
use std::ops::Index;
use tinyvec::ArrayVec;

/// A board position as `(row, col)`.
pub type Pos = (usize, usize);

/// The in-bounds neighbors of a position, at most 8.
pub type Neighbors = ArrayVec<[Pos; 8]>;

const ASCII_LC: &str = "abcdefghijklmnopqrstuvwxyz";

/// Neighbor offsets in the order W, NW, N, NE, E, SE, S, SW.
const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// A single square on the board.
///
/// Holds one lowercase letter. The letter `q` stands for the digraph `qu`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell(u8);

impl Cell {
    fn from_char(ch: char) -> Option<Cell> {
        if ch.is_ascii_alphabetic() {
            Some(Cell(ch.to_ascii_lowercase() as u8))
        } else {
            None
        }
    }

    /// The letters on this cell: a single letter, or `"qu"`.
    pub fn as_str(&self) -> &'static str {
        if self.0 == b'q' {
            "qu"
        } else {
            let i = (self.0 - b'a') as usize;
            &ASCII_LC[i..=i]
        }
    }

    /// The number of letters on this cell, 1 or 2.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    pub fn is_digraph(&self) -> bool {
        self.0 == b'q'
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Validation rules applied when a board is created.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rules {
    /// Reject boards that use a letter more than once.
    pub unique_letters: bool,
}

/// A square boggle board of `dimension` x `dimension` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

/// Display the board as one line per row, cells separated by spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .cells
            .chunks(self.dimension)
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{:<2}", cell))
                    .collect::<Vec<String>>()
                    .join(" ")
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Pos) -> &Cell {
        assert!(col < self.dimension, "column {} out of bounds", col);
        &self.cells[row * self.dimension + col]
    }
}

impl Board {
    /// Create a board from `letters`, the rows of the board appended to each
    /// other. A `q` on the board stands for `qu`.
    /// ## Errors
    /// - If the number of letters is not `dimension * dimension`.
    /// - If `letters` is empty or only whitespace.
    /// - If `letters` contains a non-alphabetic character.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let board = Board::new(2, "abQd")?;
    /// assert_eq!(board[(1, 0)].as_str(), "qu");
    /// assert_eq!(board.to_string(), "a  b\nqu d");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(dimension: usize, letters: &str) -> Result<Board, Error> {
        Board::with_rules(dimension, letters, Rules::default())
    }

    /// Create a board, and check it against `rules` as well.
    /// ## Errors
    /// As [`new`](Board::new), and if a rule is violated.
    pub fn with_rules(dimension: usize, letters: &str, rules: Rules) -> Result<Board, Error> {
        let len = letters.chars().count();
        if dimension.checked_mul(dimension) != Some(len) {
            return Err(Error::DimensionMismatch { dimension, len });
        }
        if letters.trim().is_empty() {
            return Err(Error::EmptyBoard);
        }
        let mut seen = [false; 26];
        let mut cells = Vec::with_capacity(len);
        for letter in letters.chars() {
            let cell = Cell::from_char(letter).ok_or_else(|| Error::InvalidBoardLetter {
                letter,
                board: String::from(letters),
            })?;
            if rules.unique_letters {
                let i = (cell.0 - b'a') as usize;
                if seen[i] {
                    return Err(Error::DuplicateLetter(cell.0 as char));
                }
                seen[i] = true;
            }
            cells.push(cell);
        }
        Ok(Board { dimension, cells })
    }

    /// The number of rows (and columns) of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at `row`, `col`, or None if out of bounds.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.dimension && col < self.dimension {
            Some(self.cells[row * self.dimension + col])
        } else {
            None
        }
    }

    /// All positions on the board, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let n = self.dimension;
        (0..self.cells.len()).map(move |i| (i / n, i % n))
    }

    /// Index of `pos` in a row-major list of cells.
    pub(crate) fn offset(&self, (row, col): Pos) -> usize {
        row * self.dimension + col
    }

    /// The positions adjacent to `pos`, horizontally, vertically or
    /// diagonally, in the order W, NW, N, NE, E, SE, S, SW.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let board = Board::new(3, "abcdefghi")?;
    /// assert_eq!(board.neighbors((0, 0)).as_slice(), &[(0, 1), (1, 1), (1, 0)]);
    /// assert_eq!(board.neighbors((1, 1)).len(), 8);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn neighbors(&self, (row, col): Pos) -> Neighbors {
        let n = self.dimension as isize;
        let mut neighbors = Neighbors::new();
        for (dr, dc) in DIRECTIONS.iter() {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r >= 0 && r < n && c >= 0 && c < n {
                neighbors.push((r as usize, c as usize));
            }
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_board() -> Result<()> {
        let board = Board::new(3, "CatDogXyz")?;
        assert_eq!(board.dimension(), 3);
        assert_eq!(board[(0, 0)].as_str(), "c");
        assert_eq!(board[(1, 2)].as_str(), "g");
        assert_eq!(board.cell_at(2, 2).map(|c| c.as_str()), Some("z"));
        assert_eq!(board.cell_at(3, 0), None);
        assert_eq!(board.cell_at(0, 3), None);
        assert_eq!(board.to_string(), "c  a  t\nd  o  g\nx  y  z");
        Ok(())
    }

    #[test]
    fn test_digraph() -> Result<()> {
        let board = Board::new(2, "qQua")?;
        assert_eq!(board[(0, 0)].as_str(), "qu");
        assert_eq!(board[(0, 1)].as_str(), "qu");
        assert_eq!(board[(1, 0)].as_str(), "u");
        assert!(board[(0, 0)].is_digraph());
        assert_eq!(board[(0, 0)].len(), 2);
        assert_eq!(board[(1, 1)].len(), 1);
        Ok(())
    }

    #[test]
    fn test_random_boards() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let dimension = rng.gen_range(1..=6);
            let letters: String = (0..dimension * dimension)
                .map(|_| {
                    let ch = rng.gen_range(b'a'..=b'z') as char;
                    if rng.gen() {
                        ch.to_ascii_uppercase()
                    } else {
                        ch
                    }
                })
                .collect();
            let board = Board::new(dimension, &letters)?;
            assert_eq!(board.cells().len(), dimension * dimension);
            for cell in board.cells() {
                let s = cell.as_str();
                assert!(s == "qu" || (s.len() == 1 && s.chars().all(|c| c.is_ascii_lowercase())));
            }
        }
        Ok(())
    }

    #[test]
    fn test_neighbors() -> Result<()> {
        let board = Board::new(3, "abcdefghi")?;
        let expect = [
            (1, 0),
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (2, 1),
            (2, 0),
        ];
        assert_eq!(board.neighbors((1, 1)).as_slice(), &expect);
        assert_eq!(
            board.neighbors((2, 2)).as_slice(),
            &[(2, 1), (1, 1), (1, 2)]
        );
        assert_eq!(
            board.neighbors((0, 1)).as_slice(),
            &[(0, 0), (0, 2), (1, 2), (1, 1), (1, 0)]
        );
        let single = Board::new(1, "a")?;
        assert!(single.neighbors((0, 0)).is_empty());
        Ok(())
    }

    #[test]
    fn test_positions() -> Result<()> {
        let board = Board::new(2, "abcd")?;
        let positions: Vec<Pos> = board.positions().collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(board.offset((1, 0)), 2);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "DimensionMismatch { dimension: 3, len: 4 }")]
    fn test_dimension_mismatch() {
        Board::new(3, "abcd").unwrap();
    }

    #[test]
    fn test_dimension_overflow() {
        // squares to 1 when wrapped
        let dimension = (1usize << (usize::BITS - 1)) + 1;
        assert!(matches!(
            Board::new(dimension, "a"),
            Err(Error::DimensionMismatch { len: 1, .. })
        ));
        assert!(matches!(
            Board::new(usize::MAX, "ab"),
            Err(Error::DimensionMismatch { len: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_boards() {
        assert!(matches!(Board::new(2, "    "), Err(Error::EmptyBoard)));
        assert!(matches!(Board::new(0, ""), Err(Error::EmptyBoard)));
        assert!(matches!(
            Board::new(2, "ab1d"),
            Err(Error::InvalidBoardLetter { letter: '1', .. })
        ));
        assert!(matches!(
            Board::new(2, "ab d"),
            Err(Error::InvalidBoardLetter { letter: ' ', .. })
        ));
        assert!(matches!(
            Board::new(1, "é"),
            Err(Error::InvalidBoardLetter { letter: 'é', .. })
        ));
    }

    #[test]
    fn test_unique_letters() -> Result<()> {
        let rules = Rules {
            unique_letters: true,
        };
        assert!(Board::new(2, "abAb").is_ok());
        assert!(matches!(
            Board::with_rules(2, "abAc", rules),
            Err(Error::DuplicateLetter('a'))
        ));
        let board = Board::with_rules(2, "abqd", rules)?;
        assert_eq!(board[(1, 0)].as_str(), "qu");
        Ok(())
    }
}
