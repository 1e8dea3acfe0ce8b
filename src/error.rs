//! Errors raised while building the mansion or playing through it.
//!
//! None of these are fatal to the process. `DeadEnd` and `InvalidChoice` only
//! cancel the action that caused them; the session reports them and prompts
//! again.

use std::io;

use thiserror::Error;

use crate::room::Direction;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuestError>;

/// Everything that can go wrong in a quest.
#[derive(Error, Debug)]
pub enum QuestError {
    /// A room, clue or suspect name is longer than its fixed limit.
    #[error("'{name}' is longer than {max} characters")]
    NameTooLong {
        /// The rejected name.
        name: String,
        /// The limit it broke.
        max: usize,
    },

    /// There is no room in the requested direction.
    #[error("dead end: '{room}' has no exit to the {direction}")]
    DeadEnd {
        /// The room the player tried to leave.
        room: String,
        /// Where they tried to go.
        direction: Direction,
    },

    /// The player typed something the menu doesn't offer.
    #[error("invalid option '{0}'")]
    InvalidChoice(char),

    /// The difficulty level isn't 1, 2 or 3.
    #[error("invalid level '{0}'")]
    InvalidLevel(String),

    /// A room id that doesn't belong to the tree it was used with.
    #[error("no room with id {0}")]
    UnknownRoom(usize),

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Rejects `name` if it has more than `max` characters.
pub(crate) fn check_len(name: &str, max: usize) -> Result<()> {
    if name.chars().count() > max {
        return Err(QuestError::NameTooLong {
            name: name.to_string(),
            max,
        });
    }

    Ok(())
}
