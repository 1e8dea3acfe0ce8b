//! Difficulty levels and a whole game from banner to goodbye.

use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::{QuestError, Result};
use crate::evidence::ClueTable;
use crate::room::RoomTree;
use crate::session::{
    clue_listing, suspect_listing, ExplorationSession, Mode, Rediscovery, Report, SessionConfig,
};
use crate::terminal::Terminal;

/// How much of the investigation the player gets to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// Level 1: just walk around.
    Novice,
    /// Level 2: collect clues.
    Adventurer,
    /// Level 3: collect clues and name the culprit.
    Master,
}

impl FromStr for Level {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Self::Novice),
            "2" => Ok(Self::Adventurer),
            "3" => Ok(Self::Master),
            other => Err(QuestError::InvalidLevel(other.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Novice => f.write_str("NOVATO"),
            Self::Adventurer => f.write_str("AVENTUREIRO"),
            Self::Master => f.write_str("MESTRE"),
        }
    }
}

impl Level {
    /// Session options for this level.
    pub fn config(self, rediscovery: Rediscovery) -> SessionConfig {
        let mode = match self {
            Self::Novice => Mode::Reduced,
            Self::Adventurer | Self::Master => Mode::Full,
        };

        SessionConfig { mode, rediscovery }
    }
}

/// Asks the player for a level. Running out of input is an invalid level.
pub fn read_level(terminal: &mut dyn Terminal) -> Result<Level> {
    terminal.display("Escolha o nivel de jogo:")?;
    terminal.display("  [1] Novato - Apenas exploracao")?;
    terminal.display("  [2] Aventureiro - Exploracao com pistas")?;
    terminal.display("  [3] Mestre - Exploracao, pistas e suspeitos")?;

    terminal
        .read_line("Nivel: ")?
        .unwrap_or_default()
        .parse()
}

/// Explores `tree` at `level` and prints the summary the level calls for.
pub fn investigate(
    level: Level,
    tree: &RoomTree,
    table: &ClueTable,
    rediscovery: Rediscovery,
    terminal: &mut dyn Terminal,
) -> Result<Report> {
    info!(%level, ?rediscovery, "starting investigation");
    terminal.display(&format!("\n=== NIVEL {} ===", level))?;

    let mut session = ExplorationSession::new(tree, table, level.config(rediscovery));
    session.run(terminal)?;
    let report = session.into_report();

    if level == Level::Novice {
        return Ok(report);
    }

    terminal.display("\n\n=== RESUMO DA INVESTIGACAO ===")?;
    terminal.display("\n--- Pistas Coletadas ---")?;
    terminal.display(&clue_listing(&report.clues, "Nenhuma pista foi coletada."))?;

    if level == Level::Master {
        terminal.display(&suspect_listing(&report.ledger))?;
        if let Some(culprit) = report.ledger.most_likely_suspect() {
            info!(suspect = %culprit.name(), tally = culprit.tally(), "most likely suspect");
            terminal.display("\n=== ANALISE FINAL ===")?;
            terminal.display(&format!("Suspeito mais provavel: {}", culprit.name()))?;
            terminal.display(&format!("Numero de pistas: {}", culprit.tally()))?;
        }
    }

    Ok(report)
}

/// Plays one game in the mansion.
///
/// `level` is the level given up front, if any; otherwise the player is
/// asked. An invalid level is reported and no exploration happens, which is
/// not an error. Returns what the investigation found, if there was one.
pub fn play(
    terminal: &mut dyn Terminal,
    level: Option<&str>,
    rediscovery: Rediscovery,
) -> Result<Option<Report>> {
    terminal.display("=== DETECTIVE QUEST ===")?;
    terminal.display("Bem-vindo a mansao do misterio!\n")?;

    let tree = RoomTree::mansion();
    let table = ClueTable::mansion();

    let level = match level {
        Some(level) => level.parse(),
        None => read_level(terminal),
    };
    let report = match level {
        Ok(level) => Some(investigate(level, &tree, &table, rediscovery, terminal)?),
        Err(QuestError::InvalidLevel(raw)) => {
            warn!(level = %raw, "invalid level");
            terminal.display("Nivel invalido!")?;
            None
        }
        Err(err) => return Err(err),
    };

    terminal.display("\n\nObrigado por jogar Detective Quest!")?;
    Ok(report)
}
