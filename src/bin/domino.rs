//! Play dominoes against bots in the terminal.
//!
//! Set `RUST_LOG=domino_engine=debug` to watch the engine's plies.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use domino_engine::{GameEvent, GameSession, SessionConfig, SessionSnapshot, Side, TurnPhase};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Dominoes: you against 1-3 bots
#[derive(Parser, Debug)]
#[command(name = "domino")]
#[command(about = "Play a round of dominoes against computer players", long_about = None)]
#[command(version)]
struct Cli {
    /// Players at the table, you included (2-4)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Seed for shuffling. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after one round instead of dealing again
    #[arg(long)]
    once: bool,
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(usize, Option<Side>),
    Side(Side),
    Draw,
    Cancel,
    Quit,
}

fn parse_side(word: &str) -> Option<Side> {
    match word {
        "l" | "left" => Some(Side::Left),
        "r" | "right" => Some(Side::Right),
        _ => None,
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let first = words.next()?.to_ascii_lowercase();
    let second = words.next().map(str::to_ascii_lowercase);

    match (first.as_str(), second.as_deref()) {
        ("q" | "quit", None) => Some(Command::Quit),
        ("d" | "draw", None) => Some(Command::Draw),
        ("c" | "cancel", None) => Some(Command::Cancel),
        (word, None) if parse_side(word).is_some() => parse_side(word).map(Command::Side),
        (number, side) => {
            let position = number.parse().ok()?;
            match side {
                None => Some(Command::Play(position, None)),
                Some(word) => parse_side(word).map(|s| Command::Play(position, Some(s))),
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = SessionConfig::new(cli.players)
        .with_seed(seed)
        .with_restart_on_end(!cli.once);

    info!(players = cli.players, seed, "starting session");
    let mut session = GameSession::new(config).context("could not start a session")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_events(&session.drain_events());

        if let Some(outcome) = session.outcome() {
            render(&session.snapshot());
            println!("Game End - {} (total {})", outcome, session.total_score());
            if cli.once || !prompt_continue(&mut lines)? {
                break;
            }
            session.advance_bots();
            continue;
        }

        // Bots, and the human's forced passes, need no input.
        if !session.advance_bots().is_empty() {
            continue;
        }

        render(&session.snapshot());
        match session.phase() {
            TurnPhase::AwaitingDisambiguation { tile } => {
                prompt(&format!("{} fits both ends: l / r (c to cancel)", tile))?
            }
            _ => prompt("tile number [l|r], d to draw, q to quit")?,
        }

        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read input")?;
        let Some(command) = parse_command(&line) else {
            println!("?");
            continue;
        };

        let result = match command {
            Command::Quit => break,
            Command::Play(position, side) => session.submit_human_move(position, side).map(drop),
            Command::Side(side) => session.choose_side(side).map(drop),
            Command::Draw => session.draw_from_pool().map(drop),
            Command::Cancel => session.cancel_pending(),
        };
        if let Err(err) = result {
            println!("{}", err);
        }
    }

    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    print!("{}> ", text);
    io::stdout().flush().context("failed to flush stdout")
}

fn prompt_continue(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<bool> {
    prompt("play again? [Y/n]")?;
    match lines.next() {
        None => Ok(false),
        Some(line) => {
            let line = line.context("failed to read input")?;
            Ok(!line.trim().eq_ignore_ascii_case("n"))
        }
    }
}

fn print_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::RoundStarted { round, player_count } => {
                println!("=== Round {} ({} players) ===", round, player_count)
            }
            GameEvent::Redealt { redeals } => println!("(redealt {} time(s): 5 or more doubles)", redeals),
            GameEvent::TilePlayed { player, tile, side } if !player.is_human() => {
                println!("{} played {} on the {}", player, tile, side)
            }
            GameEvent::TileDrawn { player } => println!("{} drew a tile", player),
            GameEvent::PassOccurred { player } => println!("{}: PASS", player),
            _ => {}
        }
    }
}

fn render(snapshot: &SessionSnapshot) {
    let board: String = snapshot
        .board
        .iter()
        .map(|placed| {
            let mark = if placed.is_pending_double_play {
                "?"
            } else if placed.is_last_played {
                "*"
            } else {
                ""
            };
            format!("{}{}", placed.tile, mark)
        })
        .collect();

    println!();
    for view in &snapshot.opponents {
        match &view.tiles {
            Some(tiles) => {
                let shown: Vec<_> = tiles.iter().map(ToString::to_string).collect();
                println!("  {}: {}", view.player, shown.join(" "));
            }
            None => println!("  {}: {} tiles", view.player, view.count),
        }
    }
    if snapshot.pool_count > 0 {
        println!("  pool: {} tiles", snapshot.pool_count);
    }
    println!("  board: {}", if board.is_empty() { "(empty)".to_string() } else { board });

    let hand: Vec<_> = snapshot
        .human_hand
        .iter()
        .enumerate()
        .map(|(i, tile)| format!("{}:{}", i, tile))
        .collect();
    println!("  hand:  {}", hand.join("  "));
}
