//! Play night-shift games from the terminal.
//!
//! Batch mode plays many games with a built-in decider and reports the
//! win rate. Interactive mode asks you for reactions each round.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dialoguer::Input;
use night_shift::core::{DrawnCard, GameConfig, GameRng, GameState, Outcome, SelectionError};
use night_shift::engine::ReactionPick;
use night_shift::rules::{
    advance_round, parse_reaction_input, CautiousDecider, GameSummary, PassiveDecider,
    ReactionDecider, RoundController,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DeciderKind {
    Passive,
    Cautious,
    Interactive,
}

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Play night-shift games")]
struct Args {
    /// Master seed; each game derives its own stream from it
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Who picks the reactions
    #[arg(long, value_enum, default_value_t = DeciderKind::Cautious)]
    decider: DeciderKind,

    /// Power the cautious decider keeps in reserve
    #[arg(long, default_value_t = 0)]
    reserve: i64,

    /// Game configuration as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print game summaries as JSON
    #[arg(long)]
    json: bool,
}

fn print_draw(drawn: &[DrawnCard]) {
    for (number, d) in drawn.iter().enumerate() {
        let marker = if d.card.is_reactable() { "*" } else { " " };
        println!("  {:>2}{} {:<12} {}", number + 1, marker, d.card, d.pile);
    }
}

/// Reads reactions from the terminal.
#[derive(Default)]
struct Terminal {
    /// Whether the draw was already shown this round.
    asked: bool,
}

impl ReactionDecider for Terminal {
    fn choose(&mut self, drawn: &[DrawnCard], power: i64) -> Vec<ReactionPick> {
        println!("\nPower: {}", power);
        print_draw(drawn);
        self.asked = true;

        loop {
            let line: String = match Input::new()
                .with_prompt("React to (card numbers, 0 when done)")
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(error) => {
                    log::error!("could not read input: {}", error);
                    return Vec::new();
                }
            };
            match parse_reaction_input(&line) {
                Ok(picks) => return picks,
                Err(error) => println!("{}", error),
            }
        }
    }

    fn rejected(&mut self, error: &SelectionError) {
        println!("Not allowed: {}", error);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let config: GameConfig = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    config.validate();
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

fn play_interactive(config: GameConfig, rng: GameRng) -> GameSummary {
    let mut state = GameState::new_game(config, rng);
    let mut controller = RoundController::new(Terminal::default());
    let mut reports = Vec::new();

    while advance_round(&mut state) == Outcome::InProgress {
        println!("\n=== Round {} ===", state.round() + 1);
        let Ok(report) = controller.play_round(&mut state) else {
            break;
        };
        // No reaction was possible, so the draw has not been shown yet
        if !std::mem::take(&mut controller.decider_mut().asked) {
            println!("\nPower: {}", report.power_after);
            print_draw(&report.drawn);
        }
        if report.cost > 0 {
            println!("Reactions cost {} power", report.cost);
        }
        for event in &report.events {
            println!("- {}", event);
        }
        reports.push(report);
    }

    match state.outcome() {
        Outcome::Won => println!("\nYou made it through the night."),
        _ => println!("\nGame over."),
    }

    GameSummary {
        outcome: state.outcome(),
        rounds_played: reports.len(),
        final_power: state.power(),
        reports,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let master = GameRng::new(args.seed);

    let mut wins = 0;
    for game in 0..args.games {
        let rng = master.for_context(&format!("game-{}", game));
        let summary = match args.decider {
            DeciderKind::Interactive => play_interactive(config.clone(), rng),
            DeciderKind::Passive => {
                let mut state = GameState::new_game(config.clone(), rng);
                RoundController::new(PassiveDecider).play_game(&mut state)
            }
            DeciderKind::Cautious => {
                let mut state = GameState::new_game(config.clone(), rng);
                let decider = CautiousDecider {
                    reserve: args.reserve,
                    max_reactions: config.max_reactions,
                };
                RoundController::new(decider).play_game(&mut state)
            }
        };

        if summary.outcome == Outcome::Won {
            wins += 1;
        }
        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            log::info!(
                "game {}: {:?} after {} rounds, power {}",
                game,
                summary.outcome,
                summary.rounds_played,
                summary.final_power
            );
        }
    }

    if !args.json {
        println!(
            "{} of {} games won ({:.1}%)",
            wins,
            args.games,
            100.0 * wins as f64 / args.games.max(1) as f64
        );
    }
    Ok(())
}
