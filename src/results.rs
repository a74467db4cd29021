use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

/// The words found on a board: unique, and in ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet(Vec<String>);

impl Deref for ResultSet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One word per line.
impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

impl ResultSet {
    pub fn new() -> ResultSet {
        ResultSet(Vec::new())
    }

    /// Add `word` if it is not present yet, keeping the words sorted.
    /// Returns true if the word was added.
    /// ## Examples
    /// ```
    /// use boggle_solver::ResultSet;
    /// let mut words = ResultSet::new();
    /// assert!(words.add_if_absent("cat"));
    /// assert!(words.add_if_absent("act"));
    /// assert!(!words.add_if_absent("cat"));
    /// assert_eq!(words.as_ref(), &["act", "cat"]);
    /// ```
    pub fn add_if_absent(&mut self, word: &str) -> bool {
        match self.0.binary_search_by(|w| w.as_str().cmp(word)) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, String::from(word));
                true
            }
        }
    }

    /// Returns true if `word` is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.0.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    /// Merge two sets into one.
    pub fn merge(self, other: ResultSet) -> ResultSet {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        let mut merged = Vec::with_capacity(self.len() + other.len());
        let mut left = self.0.into_iter().peekable();
        let mut right = other.0.into_iter().peekable();
        while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
            match l.cmp(r) {
                Ordering::Less => merged.extend(left.next()),
                Ordering::Greater => merged.extend(right.next()),
                Ordering::Equal => {
                    merged.extend(left.next());
                    right.next();
                }
            }
        }
        merged.extend(left);
        merged.extend(right);
        ResultSet(merged)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl AsRef<[String]> for ResultSet {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for ResultSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for word in iter {
            set.add_if_absent(word.as_ref());
        }
        set
    }
}

impl IntoIterator for ResultSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
