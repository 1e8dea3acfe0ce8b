//! Detective Quest CLI
//!
//! Usage: detective-quest [--level <1|2|3>] [--visit-once] [-v...]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use detective_quest::level;
use detective_quest::session::Rediscovery;
use detective_quest::terminal::StdTerminal;

/// Detective Quest - explore the mansion and find the culprit
#[derive(Parser, Debug)]
#[command(name = "detective-quest")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Difficulty level (1 Novato, 2 Aventureiro, 3 Mestre); asked for when missing
    #[arg(short, long)]
    level: Option<String>,

    /// Only find a room's clue the first time you enter it
    #[arg(long)]
    visit_once: bool,

    /// Verbosity level for logs on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let rediscovery = if cli.visit_once {
        Rediscovery::FirstVisit
    } else {
        Rediscovery::EveryVisit
    };

    let mut terminal = StdTerminal::stdio();
    level::play(&mut terminal, cli.level.as_deref(), rediscovery)?;

    Ok(())
}
