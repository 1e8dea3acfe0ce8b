//! Walking the mansion.
//!
//! An [`ExplorationSession`] keeps the path from the entrance to the room the
//! detective is standing in. Going left or right pushes a room onto that
//! path. Entering a room with no exits shows it and then pops straight back
//! to its parent, which is the only way to move back up. Choosing to exit
//! ends the whole exploration, however deep the detective is.
//!
//! In [`Mode::Full`] every entry into a room that hides [`Evidence`] adds its
//! clue to the session's [`ClueIndex`] and records it in the
//! [`SuspectLedger`]. With [`Rediscovery::EveryVisit`] walking back into the
//! same room records it again: the index ignores the repeat but the suspect's
//! tally goes up. [`Rediscovery::FirstVisit`] only counts the first entry.
//!
//! # Examples
//!
//! ```
//! use detective_quest::evidence::ClueTable;
//! use detective_quest::room::{Direction, RoomTree};
//! use detective_quest::session::{Choice, ExplorationSession, SessionConfig, State};
//!
//! let tree = RoomTree::mansion();
//! let table = ClueTable::mansion();
//! let mut session = ExplorationSession::new(&tree, &table, SessionConfig::default());
//!
//! session.start().unwrap();
//! session.handle(Choice::Go(Direction::Left)).unwrap();
//!
//! assert!(session.clues().contains("Livro manchado de sangue"));
//! assert_eq!(session.ledger().get("Professor Blackwood").unwrap().tally(), 1);
//!
//! session.handle(Choice::Exit).unwrap();
//! assert_eq!(session.state(), State::Finished);
//! ```

use std::collections::HashSet;
use std::mem;

use tracing::{debug, info};

use crate::clue::ClueIndex;
use crate::error::{QuestError, Result};
use crate::evidence::{ClueTable, Evidence};
use crate::room::{Direction, RoomId, RoomTree};
use crate::suspect::SuspectLedger;
use crate::terminal::Terminal;

/// Which menu the detective gets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Navigation and exit only. Nothing is collected.
    Reduced,
    /// Navigation plus clue collection and the clue/suspect listings.
    Full,
}

/// Whether walking back into a room finds its clue again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rediscovery {
    /// Every entry records the room's clue against its suspect.
    EveryVisit,
    /// Only the first entry in a session counts.
    FirstVisit,
}

/// Options for an [`ExplorationSession`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Which menu to offer.
    pub mode: Mode,
    /// How repeat visits are treated.
    pub rediscovery: Rediscovery,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Full,
            rediscovery: Rediscovery::EveryVisit,
        }
    }
}

/// Something the detective can do in a room.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Walk into the child room in that direction.
    Go(Direction),
    /// List the clues collected so far.
    ViewClues,
    /// List every suspect and the clues against them.
    ViewSuspects,
    /// Stop exploring.
    Exit,
}

impl Choice {
    /// Reads a menu token. `p` and `a` only exist in [`Mode::Full`].
    pub fn parse(token: char, mode: Mode) -> Result<Self> {
        let choice = match token.to_ascii_lowercase() {
            'e' => Self::Go(Direction::Left),
            'd' => Self::Go(Direction::Right),
            'p' => Self::ViewClues,
            'a' => Self::ViewSuspects,
            's' => Self::Exit,
            _ => return Err(QuestError::InvalidChoice(token)),
        };

        if mode == Mode::Reduced && !choice.is_navigation() {
            return Err(QuestError::InvalidChoice(token));
        }

        Ok(choice)
    }

    /// The token that selects this choice.
    pub fn token(self) -> char {
        match self {
            Self::Go(Direction::Left) => 'e',
            Self::Go(Direction::Right) => 'd',
            Self::ViewClues => 'p',
            Self::ViewSuspects => 'a',
            Self::Exit => 's',
        }
    }

    fn is_navigation(self) -> bool {
        matches!(self, Self::Go(_) | Self::Exit)
    }
}

/// Where a session is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Created but not started.
    Ready,
    /// Waiting for a choice in this room.
    AtRoom(RoomId),
    /// Done. No more choices are accepted.
    Finished,
}

/// What happened as the result of a choice, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The detective walked into this room.
    Entered(RoomId),
    /// Evidence turned up in the room just entered.
    Discovered(Evidence),
    /// The room just entered has no exits.
    NoExits(RoomId),
    /// Back in this room after a room with no exits.
    Returned(RoomId),
    /// The clue listing was asked for.
    ListedClues,
    /// The suspect listing was asked for.
    ListedSuspects,
    /// The detective chose to stop exploring.
    Exited,
}

/// Clues and suspects gathered by a finished session.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// Every distinct clue found.
    pub clues: ClueIndex,
    /// Who the clues point at.
    pub ledger: SuspectLedger,
}

/// One walk through a [`RoomTree`].
pub struct ExplorationSession<'a> {
    tree: &'a RoomTree,
    table: &'a ClueTable,
    config: SessionConfig,
    clues: ClueIndex,
    ledger: SuspectLedger,
    path: Vec<RoomId>,
    searched: HashSet<RoomId>,
    state: State,
}

impl<'a> ExplorationSession<'a> {
    /// A session over `tree`, finding the evidence in `table`. Nothing
    /// happens until [`start`](Self::start).
    pub fn new(tree: &'a RoomTree, table: &'a ClueTable, config: SessionConfig) -> Self {
        Self {
            tree,
            table,
            config,
            clues: ClueIndex::new(),
            ledger: SuspectLedger::new(),
            path: Vec::new(),
            searched: HashSet::new(),
            state: State::Ready,
        }
    }

    /// The session's current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The room the detective is in, if the session is still going.
    pub fn current(&self) -> Option<RoomId> {
        match self.state {
            State::AtRoom(id) => Some(id),
            State::Ready | State::Finished => None,
        }
    }

    /// Clues collected so far.
    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// Suspects implicated so far.
    pub fn ledger(&self) -> &SuspectLedger {
        &self.ledger
    }

    /// Ends the session and hands over what it found.
    pub fn into_report(self) -> Report {
        Report {
            clues: self.clues,
            ledger: self.ledger,
        }
    }

    /// Walks in through the tree's root. A tree with no rooms finishes the
    /// session straight away. Starting twice does nothing the second time.
    pub fn start(&mut self) -> Result<Vec<Event>> {
        if self.state != State::Ready {
            return Ok(Vec::new());
        }

        match self.tree.root() {
            Some(root) => self.enter(root),
            None => {
                self.state = State::Finished;
                Ok(Vec::new())
            }
        }
    }

    /// Applies one choice in the current room.
    ///
    /// Going somewhere without a room fails with [`QuestError::DeadEnd`] and
    /// the detective stays put. Choices after the session has finished are
    /// ignored.
    pub fn handle(&mut self, choice: Choice) -> Result<Vec<Event>> {
        let current = match self.state {
            State::AtRoom(id) => id,
            State::Ready | State::Finished => return Ok(Vec::new()),
        };

        if self.config.mode == Mode::Reduced && !choice.is_navigation() {
            return Err(QuestError::InvalidChoice(choice.token()));
        }

        match choice {
            Choice::Go(direction) => {
                let next = self.tree.child(current, direction)?;
                self.enter(next)
            }
            Choice::ViewClues => Ok(vec![Event::ListedClues]),
            Choice::ViewSuspects => Ok(vec![Event::ListedSuspects]),
            Choice::Exit => {
                info!(room = %self.tree.room(current)?.name(), "leaving the mansion");
                self.path.clear();
                self.state = State::Finished;
                Ok(vec![Event::Exited])
            }
        }
    }

    /// Plays the session to the end against `terminal`.
    ///
    /// Bad tokens and dead ends are shown to the player, who is asked again.
    /// Running out of input counts as choosing to exit.
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        if self.tree.is_empty() {
            terminal.display(DEAD_END)?;
        }
        let events = self.start()?;
        self.show(terminal, &events)?;

        while let State::AtRoom(current) = self.state {
            let token = match terminal.read_choice(&self.menu(current)?)? {
                Some(token) => token,
                None => {
                    debug!("input closed");
                    Choice::Exit.token()
                }
            };

            match Choice::parse(token, self.config.mode).and_then(|choice| self.handle(choice)) {
                Ok(events) => self.show(terminal, &events)?,
                Err(QuestError::DeadEnd { room, direction }) => {
                    debug!(%room, %direction, "dead end");
                    terminal.display(DEAD_END)?;
                }
                Err(QuestError::InvalidChoice(token)) => {
                    debug!(%token, "invalid choice");
                    terminal.display("Opcao invalida!")?;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    fn enter(&mut self, id: RoomId) -> Result<Vec<Event>> {
        let tree = self.tree;
        let room = tree.room(id)?;
        debug!(room = %room.name(), depth = self.path.len(), "entering room");

        let mut events = vec![Event::Entered(id)];
        if self.config.mode == Mode::Full {
            events.extend(self.search(id, room.name()).map(Event::Discovered));
        }

        if !room.is_leaf() {
            self.path.push(id);
            self.state = State::AtRoom(id);
            return Ok(events);
        }

        events.push(Event::NoExits(id));
        match self.path.last() {
            Some(&parent) => {
                events.push(Event::Returned(parent));
                self.state = State::AtRoom(parent);
            }
            None => self.state = State::Finished,
        }

        Ok(events)
    }

    /// Records the evidence hidden in `id`, if any, and returns it.
    fn search(&mut self, id: RoomId, name: &str) -> Option<Evidence> {
        let table = self.table;
        let evidence = table.lookup(name)?;
        let first_visit = self.searched.insert(id);
        if !first_visit && self.config.rediscovery == Rediscovery::FirstVisit {
            return None;
        }

        debug!(clue = %evidence.clue, suspect = %evidence.suspect, "clue found");
        self.clues = mem::take(&mut self.clues).insert(evidence.clue.clone());
        self.ledger
            .record_clue(evidence.clue.clone(), evidence.suspect.clone());

        Some(evidence.clone())
    }

    fn menu(&self, id: RoomId) -> Result<String> {
        let room = self.tree.room(id)?;

        let mut menu = String::from("\nOpcoes:\n");
        if room.left().is_some() {
            menu.push_str("  [e] Ir para esquerda\n");
        }
        if room.right().is_some() {
            menu.push_str("  [d] Ir para direita\n");
        }
        if self.config.mode == Mode::Full {
            menu.push_str("  [p] Ver pistas coletadas\n");
            menu.push_str("  [a] Ver associacoes suspeitos\n");
        }
        menu.push_str("  [s] Sair da exploracao\n");
        menu.push_str("Escolha: ");

        Ok(menu)
    }

    fn show(&self, terminal: &mut dyn Terminal, events: &[Event]) -> Result<()> {
        for event in events {
            match event {
                Event::Entered(id) => terminal.display(&format!(
                    "\n--> Voce esta na sala: {}",
                    self.tree.room(*id)?.name()
                ))?,
                Event::Discovered(evidence) => {
                    terminal.display(&format!("[!] Pista encontrada: {}", evidence.clue))?
                }
                Event::NoExits(_) => terminal.display("Esta sala nao tem outras saidas.")?,
                Event::Returned(id) => terminal.display(&format!(
                    "\n--> Voce voltou para: {}",
                    self.tree.room(*id)?.name()
                ))?,
                Event::ListedClues => {
                    terminal.display("\n=== PISTAS COLETADAS (em ordem alfabetica) ===")?;
                    terminal.display(&clue_listing(&self.clues, "  Nenhuma pista coletada ainda."))?;
                }
                Event::ListedSuspects => terminal.display(&suspect_listing(&self.ledger))?,
                Event::Exited => terminal.display("Saindo da exploracao...")?,
            }
        }

        Ok(())
    }
}

const DEAD_END: &str = "Voce esta em um beco sem saida!";

/// One `  - clue` line per clue in order, or `empty` when there are none.
pub(crate) fn clue_listing(clues: &ClueIndex, empty: &str) -> String {
    if clues.is_empty() {
        return empty.to_string();
    }

    clues
        .iter()
        .map(|clue| format!("  - {}", clue))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The suspect table under its heading.
pub(crate) fn suspect_listing(ledger: &SuspectLedger) -> String {
    let listing = format!("\n=== RELACAO PISTAS x SUSPEITOS ===\n{}", ledger);
    listing.trim_end().to_string()
}
