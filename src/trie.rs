//! A ternary search trie over ASCII letters.
//!
//! Every node holds one character and three links: to a sibling with a
//! lesser character, to a sibling with a greater character, and to the node
//! for the next character of the key. Nodes live in a single `Vec` and link to
//! each other by index.
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

type NodeId = u32;

/// Nodes are addressed by `NodeId`, which limits the size of the trie.
const MAX_NODES: usize = NodeId::MAX as usize;

#[derive(Debug, Clone, Copy)]
enum Link {
    Lesser,
    Next,
    Greater,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    ch: u8,
    terminal: bool,
    lesser: Option<NodeId>,
    next: Option<NodeId>,
    greater: Option<NodeId>,
}

impl Node {
    fn new(ch: u8) -> Node {
        Node {
            ch,
            terminal: false,
            lesser: None,
            next: None,
            greater: None,
        }
    }

    fn link(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Lesser => self.lesser,
            Link::Next => self.next,
            Link::Greater => self.greater,
        }
    }

    fn link_mut(&mut self, link: Link) -> &mut Option<NodeId> {
        match link {
            Link::Lesser => &mut self.lesser,
            Link::Next => &mut self.next,
            Link::Greater => &mut self.greater,
        }
    }
}

/// A set of keys that answers exact and prefix membership queries.
///
/// Keys must be non-empty and consist of ASCII letters only. The trie is case
/// sensitive.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trie {
    /// The root node is `nodes[0]`, if any.
    nodes: Vec<Node>,
    /// Number of distinct keys.
    len: usize,
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Trie: {} keys, {} nodes>", self.len, self.nodes.len())
    }
}

/// Inserting `key` creates at most one node per character.
fn check_room(node_count: usize, key: &str) -> Result<(), Error> {
    if node_count.saturating_add(key.len()) > MAX_NODES {
        return Err(Error::TrieFull(String::from(key)));
    }
    Ok(())
}

fn validate(key: &str) -> Result<&[u8], Error> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    if !key.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(Error::InvalidKey(String::from(key)));
    }
    Ok(key.as_bytes())
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    /// The number of distinct keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn push_node(&mut self, ch: u8) -> usize {
        self.nodes.push(Node::new(ch));
        self.nodes.len() - 1
    }

    /// Insert `key`, and return `true` if it was not present yet.
    /// ## Errors
    /// If `key` is empty or contains a non-alphabetic character, or the trie
    /// has no room left for its nodes. The trie is not modified in that case.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Trie, Error};
    /// let mut trie = Trie::new();
    /// assert!(trie.insert("tea")?);
    /// assert!(!trie.insert("tea")?);
    /// assert_eq!(trie.len(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn insert(&mut self, key: &str) -> Result<bool, Error> {
        let bytes = validate(key)?;
        check_room(self.nodes.len(), key)?;
        let key = bytes;
        if self.nodes.is_empty() {
            self.push_node(key[0]);
        }
        let mut node = 0;
        let mut i = 0;
        loop {
            let (link, ch) = match key[i].cmp(&self.nodes[node].ch) {
                Ordering::Less => (Link::Lesser, key[i]),
                Ordering::Greater => (Link::Greater, key[i]),
                Ordering::Equal if i + 1 < key.len() => {
                    i += 1;
                    (Link::Next, key[i])
                }
                Ordering::Equal => break,
            };
            node = match self.nodes[node].link(link) {
                Some(child) => child as usize,
                None => {
                    let child = self.push_node(ch);
                    // fits, see check_room
                    *self.nodes[node].link_mut(link) = Some(child as NodeId);
                    child
                }
            };
        }
        let node = &mut self.nodes[node];
        if node.terminal {
            Ok(false)
        } else {
            node.terminal = true;
            self.len += 1;
            Ok(true)
        }
    }

    /// Return the index of the node for the last character of `key`.
    fn find(&self, key: &[u8]) -> Option<usize> {
        if self.nodes.is_empty() {
            return None;
        }
        let mut node = 0;
        let mut i = 0;
        loop {
            let n = &self.nodes[node];
            let link = match key[i].cmp(&n.ch) {
                Ordering::Less => n.lesser,
                Ordering::Greater => n.greater,
                Ordering::Equal if i + 1 < key.len() => {
                    i += 1;
                    n.next
                }
                Ordering::Equal => return Some(node),
            };
            node = link? as usize;
        }
    }

    /// Returns true if `key` was inserted in the trie.
    /// ## Errors
    /// If `key` is empty or contains a non-alphabetic character.
    pub fn contains_exact(&self, key: &str) -> Result<bool, Error> {
        let key = validate(key)?;
        Ok(self
            .find(key)
            .map_or(false, |node| self.nodes[node].terminal))
    }

    /// Returns true if `key` is a prefix of (or equal to) an inserted key.
    /// ## Errors
    /// If `key` is empty or contains a non-alphabetic character.
    pub fn contains_prefix(&self, key: &str) -> Result<bool, Error> {
        let key = validate(key)?;
        Ok(self.find(key).is_some())
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.len);
        if !self.nodes.is_empty() {
            let mut prefix = Vec::new();
            self.collect(0, &mut prefix, &mut keys);
        }
        keys
    }

    fn collect(&self, node: usize, prefix: &mut Vec<u8>, keys: &mut Vec<String>) {
        let n = &self.nodes[node];
        if let Some(lesser) = n.lesser {
            self.collect(lesser as usize, prefix, keys);
        }
        prefix.push(n.ch);
        if n.terminal {
            // only ASCII letters are ever stored
            keys.push(prefix.iter().map(|&b| b as char).collect());
        }
        if let Some(next) = n.next {
            self.collect(next as usize, prefix, keys);
        }
        prefix.pop();
        if let Some(greater) = n.greater {
            self.collect(greater as usize, prefix, keys);
        }
    }
}
