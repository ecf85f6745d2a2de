use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{Agent, MinimaxAgent, SearchEngine};
use connect_four::config::EngineConfig;
use connect_four::game::{calculate_score, Difficulty, GameState, GameStatus, Player, COLS};

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "play", about = "Play Connect Four against the computer")]
struct Cli {
    /// Difficulty: easy, medium or hard
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer make the first move
    #[arg(long)]
    ai_first: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let depth = config.depth_for(cli.difficulty);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut agent = MinimaxAgent::with_engine(depth, SearchEngine::from_config(&config.search), rng);

    let first = if cli.ai_first { Player::AI } else { Player::HUMAN };
    let state = run(GameState::new(first), &mut agent, io::stdin().lock())?;

    print_board(&state);
    match state.status() {
        GameStatus::Won(winner, _) => println!("{} wins!", winner.name()),
        GameStatus::Draw => println!("It's a draw."),
        GameStatus::InProgress(_) => println!("Game abandoned."),
    }
    println!(
        "Score: {}",
        calculate_score(state.winner(), state.move_count(), cli.difficulty)
    );

    Ok(())
}

/// Alternate human and computer turns until the game ends or input runs out.
fn run(mut state: GameState, agent: &mut dyn Agent, input: impl BufRead) -> Result<GameState> {
    let mut lines = input.lines();

    while !state.is_game_over() {
        if state.current_player() == Player::AI {
            let Some(col) = agent.select_column(&state) else {
                break;
            };
            state = state
                .apply_move(col)
                .with_context(|| format!("computer chose illegal column {}", col + 1))?;
            println!("Computer plays column {}", col + 1);
            continue;
        }

        print_board(&state);
        print!("Your move (1-{COLS}): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading move")?;

        let col = match line.trim().parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) => n - 1,
            _ => {
                println!("Enter a column number from 1 to {COLS}.");
                continue;
            }
        };

        match state.apply_move(col) {
            Ok(next) => state = next,
            Err(e) => println!("Column {}: {e}", col + 1),
        }
    }

    Ok(state)
}

fn print_board(state: &GameState) {
    let header: String = (1..=COLS).map(|c| c.to_string()).collect();
    println!("\n{header}\n{}\n", state.board());
}
