//! Connect Four in the terminal.
//!
//! ## Usage
//!
//! - `connect-four` - Play on this terminal, asking for both names
//! - `connect-four play --player1 Ann --player2 Ben` - Skip the name prompts
//! - `connect-four play --once` - Exit after a single game
//! - `connect-four rules` - Print the rules
//!
//! Logs go to stderr. `-v` enables info logs, `-vv` debug logs, and
//! `RUST_LOG` overrides both.

use std::io;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::console::Console;
use connect_four::constants::{COLS, CONNECT, ROWS};
use connect_four::player::Player;

/// Connect Four for two players sharing a terminal
#[derive(Parser)]
#[command(name = "connect-four")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on this terminal
    Play(PlayArgs),
    /// Print the rules of the game
    Rules,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Name of the first player (●); asked for when omitted
    #[arg(long)]
    player1: Option<String>,

    /// Name of the second player (○); asked for when omitted
    #[arg(long)]
    player2: Option<String>,

    /// Exit after one game instead of offering a rematch
    #[arg(long)]
    once: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play(args)) => play(args),
        None => play(PlayArgs::default()),
        Some(Commands::Rules) => {
            print_rules();
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn play(args: PlayArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout()).once(args.once);
    if let Some(name) = args.player1 {
        console = console.with_name(Player::A, name);
    }
    if let Some(name) = args.player2 {
        console = console.with_name(Player::B, name);
    }

    let results = console.run().context("game session failed")?;
    info!(games = results.len(), "session finished");
    Ok(())
}

fn print_rules() {
    println!("Connect Four\n");
    println!("Two players take turns dropping tokens ({} and {}) into one of", Player::A, Player::B);
    println!("{COLS} columns of a {ROWS}-row grid. A token falls to the lowest free");
    println!("cell of its column. The first player to line up {CONNECT} tokens in a");
    println!("row, column or diagonal wins. A full grid with no line is a draw.");
}
