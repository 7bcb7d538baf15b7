use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use minimax_tictactoe::ai::{Agent, Position, RandomAgent, Strategy};
use minimax_tictactoe::config::AppConfig;
use minimax_tictactoe::error::MatchError;
use minimax_tictactoe::game::{CubeState, GameOutcome, GameState, Player};

/// Seconds granted per move; agents size their search by depth up front.
const MOVE_TIME_BUDGET: Duration = Duration::from_secs(10);

/// Run headless agent-vs-agent match series.
#[derive(Parser)]
#[command(name = "arena", about = "Run agent-vs-agent tic-tac-toe matches")]
struct Cli {
    /// Board to play: 2d or 3d
    #[arg(long, default_value = "2d")]
    board: String,

    /// Opponent for the configured agent: random, or minimax for a
    /// plain-minimax cross-check of the pruning search
    #[arg(long, default_value = "random")]
    opponent: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the search depth for both boards
    #[arg(long)]
    depth: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.opponent.as_str() {
        "random" | "minimax" => {}
        other => bail!("unknown opponent '{}' (expected 'random' or 'minimax')", other),
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.depth_2d = depth;
        config.search.depth_3d = depth;
    }
    config.validate()?;

    // A plain-minimax twin of the configured agent, when requested
    let mut cross_check = config.search.clone();
    cross_check.strategy = Strategy::Minimax;

    match cli.board.as_str() {
        "2d" => {
            let champion: Box<dyn Agent<GameState>> = Box::new(config.search.agent_2d());
            let opponent: Box<dyn Agent<GameState>> = match cli.opponent.as_str() {
                "random" => Box::new(RandomAgent::new()),
                _ => Box::new(cross_check.agent_2d()),
            };
            run_series(config.arena.games, champion, opponent)
        }
        "3d" => {
            let champion: Box<dyn Agent<CubeState>> = Box::new(config.search.agent_3d());
            let opponent: Box<dyn Agent<CubeState>> = match cli.opponent.as_str() {
                "random" => Box::new(RandomAgent::new()),
                _ => Box::new(cross_check.agent_3d()),
            };
            run_series(config.arena.games, champion, opponent)
        }
        other => bail!("unknown board '{}' (expected '2d' or '3d')", other),
    }
}

/// The game-level surface the arena needs on top of the provider contract.
trait Playable: Position + PartialEq {
    fn initial() -> Self;
    fn outcome(&self) -> Option<GameOutcome>;
}

impl Playable for GameState {
    fn initial() -> Self {
        GameState::initial()
    }

    fn outcome(&self) -> Option<GameOutcome> {
        GameState::outcome(self)
    }
}

impl Playable for CubeState {
    fn initial() -> Self {
        CubeState::initial()
    }

    fn outcome(&self) -> Option<GameOutcome> {
        CubeState::outcome(self)
    }
}

fn run_series<S: Playable>(
    games: usize,
    mut champion: Box<dyn Agent<S>>,
    mut opponent: Box<dyn Agent<S>>,
) -> Result<()> {
    let champion_name = champion.name().to_string();
    let opponent_name = opponent.name().to_string();

    let mut wins = 0usize;
    let mut losses = 0usize;
    let mut draws = 0usize;

    for game in 0..games {
        // Alternate colors so neither side keeps the first-move advantage
        let champion_plays_x = game % 2 == 0;
        let winner = if champion_plays_x {
            play_game(champion.as_mut(), opponent.as_mut())
        } else {
            play_game(opponent.as_mut(), champion.as_mut())
        }?;

        let champion_side = if champion_plays_x { Player::X } else { Player::O };
        match winner {
            Some(player) if player == champion_side => wins += 1,
            Some(_) => losses += 1,
            None => draws += 1,
        }
        info!(
            "game {}/{}: winner {:?}",
            game + 1,
            games,
            winner.map(Player::name)
        );
    }

    println!(
        "{champion_name} vs {opponent_name}: {wins} wins, {losses} losses, {draws} draws over {games} games"
    );
    Ok(())
}

/// Play one game to completion, validating every state an agent returns.
fn play_game<'a, S: Playable>(
    x_agent: &'a mut dyn Agent<S>,
    o_agent: &'a mut dyn Agent<S>,
) -> Result<Option<Player>, MatchError> {
    let mut state = S::initial();

    while state.outcome().is_none() {
        let successors = state.successors();
        let agent = match state.mover() {
            Player::X => &mut *x_agent,
            Player::O => &mut *o_agent,
        };

        let deadline = Instant::now() + MOVE_TIME_BUDGET;
        let next = agent.select_move(&state, deadline);
        if !successors.contains(&next) {
            return Err(MatchError::IllegalMove {
                agent: agent.name().to_string(),
            });
        }
        state = next;
    }

    match state.outcome().ok_or(MatchError::MissingOutcome)? {
        GameOutcome::Winner(player) => Ok(Some(player)),
        GameOutcome::Draw => Ok(None),
    }
}
