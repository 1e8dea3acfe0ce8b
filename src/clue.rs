//! The detective's notebook: a Binary Search Tree of collected clues.
//!
//! Clues are ordered by their text. The tree never holds the same clue twice
//! and nothing is ever removed from it. Like a tree in a functional language,
//! [`ClueIndex::insert`] consumes the index and hands back the updated one.
//!
//! # Examples
//!
//! ```
//! use detective_quest::clue::{Clue, ClueIndex};
//!
//! let index = ClueIndex::new();
//! assert!(index.is_empty());
//!
//! let index = index
//!     .insert(Clue::new("Pegadas na lama").unwrap())
//!     .insert(Clue::new("Carta anonima").unwrap())
//!     .insert(Clue::new("Pegadas na lama").unwrap());
//!
//! // Sorted, and the repeated clue only shows up once.
//! assert_eq!(index.list_in_order(), vec!["Carta anonima", "Pegadas na lama"]);
//! ```

use std::cmp;
use std::fmt;

use crate::error::{check_len, Result};

/// Longest clue text accepted by [`Clue::new`].
pub const MAX_CLUE_TEXT: usize = 99;

/// A short piece of evidence found in a room.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clue(String);

impl Clue {
    /// Wraps `text`, rejecting anything longer than [`MAX_CLUE_TEXT`]
    /// characters.
    pub fn new(text: &str) -> Result<Self> {
        check_len(text, MAX_CLUE_TEXT)?;
        Ok(Self(text.to_string()))
    }

    /// The clue's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Binary Search Tree of [`Clue`]s.
#[derive(Clone, Debug)]
pub enum ClueIndex {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A clue and its two subtrees.
    Node(ClueNode),
}

/// A `ClueNode` stores one clue. Everything in `left` sorts before it and
/// everything in `right` sorts after it.
#[derive(Clone, Debug)]
pub struct ClueNode {
    clue: Clue,
    left: Box<ClueIndex>,
    right: Box<ClueIndex>,
}

impl Default for ClueIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ClueIndex {
    /// Generates a new, empty `ClueIndex`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns the index with `clue` added. Inserting a clue that is already
    /// present gives back the same index.
    pub fn insert(self, clue: Clue) -> Self {
        match self {
            Self::Leaf => Self::Node(ClueNode {
                clue,
                left: Box::new(Self::Leaf),
                right: Box::new(Self::Leaf),
            }),
            Self::Node(n) => match clue.cmp(&n.clue) {
                cmp::Ordering::Less => Self::Node(ClueNode {
                    left: Box::new((*n.left).insert(clue)),
                    ..n
                }),
                cmp::Ordering::Equal => Self::Node(n),
                cmp::Ordering::Greater => Self::Node(ClueNode {
                    right: Box::new((*n.right).insert(clue)),
                    ..n
                }),
            },
        }
    }

    /// Whether a clue with this exact text has been collected.
    pub fn contains(&self, text: &str) -> bool {
        let mut current = self;
        while let Self::Node(n) = current {
            current = match text.cmp(n.clue.as_str()) {
                cmp::Ordering::Less => &*n.left,
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => &*n.right,
            };
        }

        false
    }

    /// All clue texts in ascending order.
    pub fn list_in_order(&self) -> Vec<&str> {
        self.iter().map(Clue::as_str).collect()
    }

    /// Visits the clues in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }

    /// Number of clues collected.
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.len() + n.right.len(),
        }
    }

    /// Whether no clue has been collected yet.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Number of levels in the tree. An empty index has a height of 0.
    pub fn height(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a Clue;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`ClueIndex`], created by [`ClueIndex::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Iter<'a> {
    /// Pushes `tree` and all of its left descendants so the smallest clue is on top.
    fn push_left_spine(&mut self, mut tree: &'a ClueIndex) {
        while let ClueIndex::Node(n) = tree {
            self.stack.push(n);
            tree = &*n.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Clue;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.clue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(text: &str) -> Clue {
        Clue::new(text).unwrap()
    }

    #[test]
    fn test_insert() {
        let index = ClueIndex::new();
        let index = index.insert(clue("Faca desaparecida"));

        assert!(index.contains("Faca desaparecida"));
        assert!(!index.contains("Carta anonima"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn empty_index() {
        let index = ClueIndex::new();

        assert!(index.is_empty());
        assert_eq!(index.height(), 0);
        assert!(index.list_in_order().is_empty());
    }

    #[test]
    fn lists_in_alphabetical_order() {
        let texts = [
            "Livro manchado de sangue",
            "Faca desaparecida",
            "Carta anonima",
            "Pegadas na lama",
            "Alianca roubada",
            "Garrafa de veneno",
        ];
        let index = texts
            .iter()
            .fold(ClueIndex::new(), |index, text| index.insert(clue(text)));

        assert_eq!(
            index.list_in_order(),
            vec![
                "Alianca roubada",
                "Carta anonima",
                "Faca desaparecida",
                "Garrafa de veneno",
                "Livro manchado de sangue",
                "Pegadas na lama",
            ]
        );
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let index = ClueIndex::new()
            .insert(clue("b"))
            .insert(clue("a"))
            .insert(clue("c"));
        let before: Vec<String> = index.iter().map(Clue::to_string).collect();
        let height = index.height();

        let index = index.insert(clue("a"));

        assert_eq!(index.list_in_order(), before);
        assert_eq!(index.height(), height);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn ascending_inserts_grow_to_the_right() {
        let index = ["a", "b", "c", "d"]
            .iter()
            .fold(ClueIndex::new(), |index, text| index.insert(clue(text)));

        // No balancing, so this is a linked list leaning right.
        assert_eq!(index.height(), 4);
    }

    #[test]
    fn comparison_is_byte_wise() {
        let index = ClueIndex::new()
            .insert(clue("alianca"))
            .insert(clue("Zebra"));

        // Upper case sorts before lower case.
        assert_eq!(index.list_in_order(), vec!["Zebra", "alianca"]);
    }

    #[test]
    fn clue_text_is_limited() {
        assert!(Clue::new(&"x".repeat(MAX_CLUE_TEXT)).is_ok());
        assert!(Clue::new(&"x".repeat(MAX_CLUE_TEXT + 1)).is_err());
    }
}
