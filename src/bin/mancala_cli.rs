// src/bin/mancala_cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use mancala::config::{AppConfig, FirstPlayer, DEFAULT_CONFIG_PATH, MAX_CONFIG_DEPTH};
use mancala::{best_move, Game, GameOutcome, Pit, Player};

#[derive(Parser, Debug)]
#[command(name = "mancala_cli", about = "Play Kalah against the computer in the terminal")]
struct Args {
    /// Search depth in plies (overrides the config file)
    #[arg(long)]
    depth: Option<u8>,

    /// TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Let the computer open the game
    #[arg(long)]
    computer_first: bool,

    /// Let the search play both sides
    #[arg(long)]
    self_play: bool,
}

fn main() -> Result<()> {
    mancala::logging::init();
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    apply_overrides(&args, &mut config)?;

    let mut game = Game::new(&config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "You play {} (pits {}). Stores: 1 = South, 2 = North.",
        game.human_side(),
        pit_range(&game)
    );

    match play_out(&mut game, args.self_play, &mut lines)? {
        Some(outcome) => {
            println!("\n{}", game.board());
            println!("{}", outcome.announcement());
        }
        None => println!("Game abandoned."),
    }
    Ok(())
}

/// Command line flags take precedence over the config file
fn apply_overrides(args: &Args, config: &mut AppConfig) -> Result<()> {
    if let Some(depth) = args.depth {
        if depth == 0 || depth > MAX_CONFIG_DEPTH {
            bail!("--depth must be in 1..={MAX_CONFIG_DEPTH}");
        }
        config.ai.depth = depth;
    }
    if args.computer_first {
        config.game.first_player = FirstPlayer::Computer;
    }
    Ok(())
}

/// Plays moves until the game ends; `None` means the player quit.
fn play_out(
    game: &mut Game,
    self_play: bool,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<GameOutcome>> {
    loop {
        if let Some(outcome) = game.outcome() {
            return Ok(Some(outcome));
        }
        println!("\n{}", game.board());

        let side = game.current_side();
        if game.player(side) == Player::Computer {
            let result = game.play_computer()?;
            if let Some(pit) = result.best_move {
                println!(
                    "Computer sows {pit} (score {}, {} nodes, {}ms)",
                    result.score, result.nodes, result.time_ms
                );
            }
            continue;
        }

        if self_play {
            let Some(pit) = best_move(game.board(), side, game.depth()) else {
                bail!("no move found for {side}");
            };
            let landing = game.play(side, pit)?;
            println!("{side} sows {pit}, last seed in {landing}");
            continue;
        }

        print!("Your move ({}): ", pit_range(game));
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!();
            return Ok(None);
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        let Some(pit) = parse_pit(input) else {
            println!("Enter a pit letter A-L, or q to quit");
            continue;
        };
        match game.play_human(pit) {
            Ok(landing) => println!("You sow {pit}, last seed in {landing}"),
            Err(err) => println!("{err}"),
        }
    }
}

fn parse_pit(input: &str) -> Option<Pit> {
    let mut chars = input.chars();
    let label = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Pit::from_label(label)
}

fn pit_range(game: &Game) -> String {
    let pits = game.human_side().pits();
    format!("{}-{}", pits[0], pits[pits.len() - 1])
}
