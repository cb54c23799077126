//! Shape Spy entry point
//!
//! Runs the puzzle in a terminal: the board is printed as text and the
//! player answers with a quadrant number.

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use shape_spy::renderer::TextRenderer;
use shape_spy::sim::RoundPhase;
use shape_spy::{RoundEngine, Settings};

/// Shape Spy - find the shape the prompt names
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fixed seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    log::info!("Shape Spy starting...");

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let stdout = io::stdout();
    let ansi = stdout.is_terminal();
    let renderer = TextRenderer::new(stdout, ansi);
    let mut engine = match RoundEngine::from_settings(&settings, renderer) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Colors in play: {:?}; shapes in play: {:?}",
        engine.colors(),
        engine.shapes()
    );

    println!("Pick the matching shape: 0-3, or q to quit.");
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("stdin read failed: {}", e);
                break;
            }
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }
        let Ok(index) = input.parse::<usize>() else {
            println!("Enter a quadrant number 0-3.");
            continue;
        };

        engine.on_shape_selected(index);
        if engine.phase() == RoundPhase::RoundTransition {
            // Terminal input is blocking, so wait out the delay in one go
            std::thread::sleep(Duration::from_millis(engine.transition_remaining_ms().into()));
            engine.advance(engine.transition_remaining_ms());
        }
    }

    log::info!(
        "Session over: {} points in {} rounds",
        engine.score(),
        engine.session().rounds_presented()
    );
    println!("Final score: {}", engine.score());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_seed_and_config() {
        let args = Args::try_parse_from(["shape-spy", "--seed=42", "--config", "spy.json"]).unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.config, Some(PathBuf::from("spy.json")));
    }

    #[test]
    fn test_no_args() {
        let args = Args::try_parse_from(["shape-spy"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = Args::try_parse_from(["shape-spy", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_bad_seed_rejected() {
        let err = Args::try_parse_from(["shape-spy", "--seed", "abc"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
