//! Which room hides which clue, and who that clue points at.

use std::collections::HashMap;

use crate::clue::Clue;
use crate::error::Result;
use crate::suspect::SuspectName;

/// A clue waiting to be found in a room, and the suspect it implicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evidence {
    /// What the detective finds.
    pub clue: Clue,
    /// Who it points at.
    pub suspect: SuspectName,
}

/// Maps room names to the [`Evidence`] hidden in them.
#[derive(Clone, Debug, Default)]
pub struct ClueTable {
    rooms: HashMap<String, Evidence>,
}

impl ClueTable {
    /// Generates a new, empty `ClueTable`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The evidence hidden in [`RoomTree::mansion`](crate::room::RoomTree::mansion).
    pub fn mansion() -> Self {
        let mut table = Self::new();
        let entries = [
            ("Biblioteca", "Livro manchado de sangue", "Professor Blackwood"),
            ("Cozinha", "Faca desaparecida", "Chef Madame Rouge"),
            ("Sotao", "Carta anonima", "Senhorita Violet"),
            ("Jardim", "Pegadas na lama", "Jardineiro Brown"),
            ("Quarto Principal", "Alianca roubada", "Senhorita Violet"),
            ("Adega", "Garrafa de veneno", "Senhorita Violet"),
        ];
        for (room, clue, suspect) in entries.iter() {
            // All of these are well within the name limits.
            if let Ok(evidence) = Self::evidence(clue, suspect) {
                table.rooms.insert(room.to_string(), evidence);
            }
        }

        table
    }

    fn evidence(clue: &str, suspect: &str) -> Result<Evidence> {
        Ok(Evidence {
            clue: Clue::new(clue)?,
            suspect: SuspectName::new(suspect)?,
        })
    }

    /// Hides `clue`, pointing at `suspect`, in the room called `room`.
    /// Replaces whatever was hidden there before.
    pub fn hide(&mut self, room: &str, clue: &str, suspect: &str) -> Result<()> {
        let evidence = Self::evidence(clue, suspect)?;
        self.rooms.insert(room.to_string(), evidence);
        Ok(())
    }

    /// The evidence in the room called `room`, if there is any.
    pub fn lookup(&self, room: &str) -> Option<&Evidence> {
        self.rooms.get(room)
    }

    /// Number of rooms holding evidence.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no room holds evidence.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
