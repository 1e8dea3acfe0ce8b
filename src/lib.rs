//! Detective Quest: a small text adventure built around three classic data
//! structures, mostly for educational purposes.
//!
//! ## The mansion
//!
//! The map is a [`RoomTree`](room::RoomTree), a binary tree where every room
//! has at most a left and a right exit. The detective starts at the root and
//! can only walk down. Rooms without exits are leaves; walking into one shows
//! it and then puts the detective back in the room they came from.
//!
//! ## The notebook
//!
//! Clues found along the way go into a [`ClueIndex`](clue::ClueIndex), a
//! Binary Search Tree ordered by clue text. Its invariants are the usual ones:
//!
//! 1. For every node, all the clues in its left subtree sort before its own.
//! 2. For every node, all the clues in its right subtree sort after its own.
//!
//! Walking left subtree, node, right subtree therefore lists the clues
//! alphabetically. Inserting a clue that is already there changes nothing.
//!
//! ## The suspects
//!
//! Each clue also points at a suspect. A [`SuspectLedger`](suspect::SuspectLedger)
//! is a fixed-size hash table, chaining on collisions, from suspect names to
//! the clues against them. The suspect with the longest list is the most
//! likely culprit.
//!
//! ## Playing
//!
//! An [`ExplorationSession`](session::ExplorationSession) ties the three
//! together and talks to the player through a [`Terminal`](terminal::Terminal).
//! [`level::play`] runs a complete game.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod clue;
pub mod error;
pub mod evidence;
pub mod level;
pub mod room;
pub mod session;
pub mod suspect;
pub mod terminal;


pub use error::{QuestError, Result};
