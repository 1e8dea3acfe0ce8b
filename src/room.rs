//! The mansion map: a binary tree of rooms.
//!
//! Rooms live in an arena owned by the [`RoomTree`] and refer to their children
//! by [`RoomId`]. The tree is wired up once with [`RoomTree::connect`] and is
//! read-only afterwards. You can only walk down it.
//!
//! # Examples
//!
//! ```
//! use detective_quest::room::{Direction, RoomTree};
//!
//! let mut tree = RoomTree::new();
//! let hall = tree.create_room("Hall").unwrap();
//! let library = tree.create_room("Library").unwrap();
//! tree.connect(Some(hall), Some(library), None);
//!
//! assert_eq!(tree.child(hall, Direction::Left).unwrap(), library);
//! assert!(tree.child(hall, Direction::Right).is_err());
//! assert!(tree.is_leaf(library));
//! ```

use std::fmt;

use tracing::trace;

use crate::error::{check_len, QuestError, Result};

/// Longest room name accepted by [`RoomTree::create_room`].
pub const MAX_ROOM_NAME: usize = 49;

/// The two ways out of a room.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the left child.
    Left,
    /// Towards the right child.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Handle to a room inside a particular [`RoomTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(usize);

impl RoomId {
    /// Position of the room in its tree's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single room and the ids of its (optional) children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    name: String,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room reached by going left, if any.
    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    /// The room reached by going right, if any.
    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    /// The room reached by going in `direction`, if any.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Leaves have no exits at all.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The mansion layout. The first room created is the root.
#[derive(Clone, Debug, Default)]
pub struct RoomTree {
    rooms: Vec<Room>,
}

impl RoomTree {
    /// Generates a new, empty `RoomTree`.
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Builds the seven-room mansion every game is played in:
    ///
    /// ```text
    ///                  Hall de Entrada
    ///                 /               \
    ///          Biblioteca            Cozinha
    ///           /     \             /       \
    ///       Sotao    Jardim  Quarto Principal  Adega
    /// ```
    pub fn mansion() -> Self {
        let mut tree = Self::new();
        let mut room = |name: &str| {
            tree.rooms.push(Room {
                name: name.to_string(),
                left: None,
                right: None,
            });
            RoomId(tree.rooms.len() - 1)
        };

        let hall = room("Hall de Entrada");
        let library = room("Biblioteca");
        let kitchen = room("Cozinha");
        let attic = room("Sotao");
        let garden = room("Jardim");
        let bedroom = room("Quarto Principal");
        let cellar = room("Adega");

        tree.connect(Some(hall), Some(library), Some(kitchen));
        tree.connect(Some(library), Some(attic), Some(garden));
        tree.connect(Some(kitchen), Some(bedroom), Some(cellar));

        tree
    }

    /// Adds a room with no children and returns its id. Names longer than
    /// [`MAX_ROOM_NAME`] characters are rejected.
    pub fn create_room(&mut self, name: &str) -> Result<RoomId> {
        check_len(name, MAX_ROOM_NAME)?;

        self.rooms.push(Room {
            name: name.to_string(),
            left: None,
            right: None,
        });
        Ok(RoomId(self.rooms.len() - 1))
    }

    /// Makes `left` and `right` the children of `parent`, replacing whatever
    /// was there. Does nothing when `parent` is `None` or not in this tree.
    pub fn connect(
        &mut self,
        parent: Option<RoomId>,
        left: Option<RoomId>,
        right: Option<RoomId>,
    ) {
        if let Some(room) = parent.and_then(|id| self.rooms.get_mut(id.0)) {
            trace!(room = %room.name, ?left, ?right, "connecting room");
            room.left = left;
            room.right = right;
        }
    }

    /// The entrance, or `None` if no room has been created yet.
    pub fn root(&self) -> Option<RoomId> {
        if self.rooms.is_empty() {
            None
        } else {
            Some(RoomId(0))
        }
    }

    /// Looks up a room by id.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms.get(id.0).ok_or(QuestError::UnknownRoom(id.0))
    }

    /// Finds the first room called `name`.
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.name == name)
            .map(RoomId)
    }

    /// Moves from `id` in `direction`. Asking for a missing child is a
    /// [`QuestError::DeadEnd`].
    pub fn child(&self, id: RoomId, direction: Direction) -> Result<RoomId> {
        let room = self.room(id)?;
        room.exit(direction).ok_or_else(|| QuestError::DeadEnd {
            room: room.name.clone(),
            direction,
        })
    }

    /// Whether `id` is a leaf. Unknown ids count as leaves.
    pub fn is_leaf(&self, id: RoomId) -> bool {
        self.room(id).map_or(true, Room::is_leaf)
    }

    /// Number of rooms in the tree.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the tree has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mansion_has_seven_rooms() {
        let tree = RoomTree::mansion();
        assert_eq!(tree.len(), 7);

        let hall = tree.root().unwrap();
        assert_eq!(tree.room(hall).unwrap().name(), "Hall de Entrada");

        let library = tree.child(hall, Direction::Left).unwrap();
        let kitchen = tree.child(hall, Direction::Right).unwrap();
        assert_eq!(tree.room(library).unwrap().name(), "Biblioteca");
        assert_eq!(tree.room(kitchen).unwrap().name(), "Cozinha");

        let attic = tree.child(library, Direction::Left).unwrap();
        let garden = tree.child(library, Direction::Right).unwrap();
        let bedroom = tree.child(kitchen, Direction::Left).unwrap();
        let cellar = tree.child(kitchen, Direction::Right).unwrap();

        assert_eq!(tree.room(attic).unwrap().name(), "Sotao");
        assert_eq!(tree.room(garden).unwrap().name(), "Jardim");
        assert_eq!(tree.room(bedroom).unwrap().name(), "Quarto Principal");
        assert_eq!(tree.room(cellar).unwrap().name(), "Adega");
    }

    #[test]
    fn leaves_are_dead_ends() {
        let tree = RoomTree::mansion();

        for name in ["Sotao", "Jardim", "Quarto Principal", "Adega"] {
            let id = tree.find(name).unwrap();
            assert!(tree.is_leaf(id));

            for direction in [Direction::Left, Direction::Right] {
                match tree.child(id, direction) {
                    Err(QuestError::DeadEnd { room, direction: d }) => {
                        assert_eq!(room, name);
                        assert_eq!(d, direction);
                    }
                    other => panic!("expected a dead end, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn create_room_rejects_long_names() {
        let mut tree = RoomTree::new();

        assert!(tree.create_room(&"a".repeat(MAX_ROOM_NAME)).is_ok());
        assert!(matches!(
            tree.create_room(&"a".repeat(MAX_ROOM_NAME + 1)),
            Err(QuestError::NameTooLong { .. })
        ));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn connect_without_parent_is_a_no_op() {
        let mut tree = RoomTree::new();
        let a = tree.create_room("a").unwrap();
        let b = tree.create_room("b").unwrap();

        tree.connect(None, Some(a), Some(b));
        assert!(tree.is_leaf(a));
        assert!(tree.is_leaf(b));
    }

    #[test]
    fn connect_replaces_children() {
        let mut tree = RoomTree::new();
        let a = tree.create_room("a").unwrap();
        let b = tree.create_room("b").unwrap();
        let c = tree.create_room("c").unwrap();

        tree.connect(Some(a), Some(b), Some(c));
        tree.connect(Some(a), None, Some(b));

        assert!(tree.child(a, Direction::Left).is_err());
        assert_eq!(tree.child(a, Direction::Right).unwrap(), b);
    }

    #[test]
    fn unknown_rooms() {
        let tree = RoomTree::new();
        assert_eq!(tree.root(), None);
        assert!(matches!(
            tree.room(RoomId(3)),
            Err(QuestError::UnknownRoom(3))
        ));
        assert!(tree.is_leaf(RoomId(3)));
    }
}
