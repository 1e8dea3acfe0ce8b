//! Who did it? A small chained hash table from suspect names to the clues
//! pointing at them.
//!
//! The table has a fixed number of buckets ([`BUCKETS`]). A name's bucket is the
//! sum of its bytes modulo the bucket count. That hash is deterministic and
//! cheap, but it is weak: anagrams always collide, and anyone choosing names
//! could pile them all into one bucket. It is fine for a handful of hardcoded
//! suspects, and colliding names simply share a chain.
//!
//! # Examples
//!
//! ```
//! use detective_quest::clue::Clue;
//! use detective_quest::suspect::{SuspectLedger, SuspectName};
//!
//! let mut ledger = SuspectLedger::new();
//! let violet = SuspectName::new("Senhorita Violet").unwrap();
//!
//! ledger.record_clue(Clue::new("Carta anonima").unwrap(), violet.clone());
//! ledger.record_clue(Clue::new("Alianca roubada").unwrap(), violet);
//!
//! let culprit = ledger.most_likely_suspect().unwrap();
//! assert_eq!(culprit.name().as_str(), "Senhorita Violet");
//! assert_eq!(culprit.tally(), 2);
//! ```

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::clue::Clue;
use crate::error::{check_len, Result};

/// Number of buckets in a [`SuspectLedger`].
pub const BUCKETS: usize = 10;

/// Longest suspect name accepted by [`SuspectName::new`].
pub const MAX_SUSPECT_NAME: usize = 49;

/// Bucket that `name` hashes to: the sum of its bytes modulo [`BUCKETS`].
pub fn bucket_of(name: &str) -> usize {
    name.bytes().map(usize::from).sum::<usize>() % BUCKETS
}

/// The name of someone clues can point at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuspectName(String);

impl SuspectName {
    /// Wraps `name`, rejecting anything longer than [`MAX_SUSPECT_NAME`]
    /// characters.
    pub fn new(name: &str) -> Result<Self> {
        check_len(name, MAX_SUSPECT_NAME)?;
        Ok(Self(name.to_string()))
    }

    /// The suspect's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuspectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A suspect and every clue recorded against them, newest first.
#[derive(Clone, Debug)]
pub struct SuspectRecord {
    name: SuspectName,
    clues: VecDeque<Clue>,
}

impl SuspectRecord {
    /// The suspect's name.
    pub fn name(&self) -> &SuspectName {
        &self.name
    }

    /// Clues pointing at this suspect, most recent first.
    pub fn clues(&self) -> impl Iterator<Item = &Clue> + '_ {
        self.clues.iter()
    }

    /// How many clues point at this suspect. Always at least 1, since a
    /// record only exists once a clue has been recorded.
    pub fn tally(&self) -> usize {
        self.clues.len()
    }
}

impl fmt::Display for SuspectRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Suspeito: {} ({} pistas)", self.name, self.tally())?;
        for clue in &self.clues {
            writeln!(f, "  - {}", clue)?;
        }

        Ok(())
    }
}

/// Fixed-size hash table of [`SuspectRecord`]s keyed by name, chaining on
/// collision. Within a chain the most recently added suspect comes first.
#[derive(Clone, Debug, Default)]
pub struct SuspectLedger {
    buckets: [VecDeque<SuspectRecord>; BUCKETS],
}

impl SuspectLedger {
    /// Generates a new, empty `SuspectLedger`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `clue` points at `suspect`.
    ///
    /// A known suspect gets the clue added to the front of their list. A new
    /// suspect is added to the front of their bucket's chain with this clue
    /// as their only one.
    pub fn record_clue(&mut self, clue: Clue, suspect: SuspectName) {
        let index = bucket_of(suspect.as_str());
        let bucket = &mut self.buckets[index];

        match bucket.iter_mut().find(|record| record.name == suspect) {
            Some(record) => {
                record.clues.push_front(clue);
                debug!(suspect = %record.name, tally = record.tally(), "suspect implicated again");
            }
            None => {
                debug!(suspect = %suspect, bucket = index, "new suspect");
                let mut clues = VecDeque::new();
                clues.push_front(clue);
                bucket.push_front(SuspectRecord {
                    name: suspect,
                    clues,
                });
            }
        }
    }

    /// Every record, bucket by bucket, in chain order within each bucket.
    pub fn list_all(&self) -> impl Iterator<Item = &SuspectRecord> + '_ {
        self.buckets.iter().flatten()
    }

    /// The suspect with the most clues against them. On a tie, the one
    /// [`list_all`](Self::list_all) yields first wins. `None` when nobody has
    /// been implicated.
    pub fn most_likely_suspect(&self) -> Option<&SuspectRecord> {
        self.list_all().fold(None, |best: Option<&SuspectRecord>, record| match best {
            Some(best) if best.tally() >= record.tally() => Some(best),
            _ => Some(record),
        })
    }

    /// Looks up a suspect by name.
    pub fn get(&self, name: &str) -> Option<&SuspectRecord> {
        self.buckets[bucket_of(name)]
            .iter()
            .find(|record| record.name.as_str() == name)
    }

    /// Number of distinct suspects.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(VecDeque::len).sum()
    }

    /// Whether nobody has been implicated yet.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(VecDeque::is_empty)
    }
}

impl fmt::Display for SuspectLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.list_all() {
            writeln!(f)?;
            write!(f, "{}", record)?;
        }

        Ok(())
    }
}
