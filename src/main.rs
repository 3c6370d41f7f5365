//! Quoridor engine CLI
//!
//! Plays one headless match between the two configured opponents and prints
//! the final board. Usage: `quoridor [config.toml]`.

use std::path::PathBuf;

use quoridor::{Color, EngineConfig, Match, MatchEnd};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load_or_default(&PathBuf::from(path))?,
        None => EngineConfig::default(),
    };
    config.validate()?;

    println!("===========================================");
    println!("       Quoridor Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("===========================================\n");
    println!(
        "  White: {}  Black: {}  depth {}",
        config.strategy(Color::White).name(),
        config.strategy(Color::Black).name(),
        config.search.depth
    );

    let outcome = Match::from_config(&config).run();

    println!("\n{}\n", outcome.state);
    match outcome.end {
        MatchEnd::Won(color) => println!("  {} wins after {} plies", color.name(), outcome.plies),
        MatchEnd::Forfeit { loser } => println!(
            "  {} forfeits after {} plies, {} wins",
            loser.name(),
            outcome.plies,
            loser.opponent().name()
        ),
        MatchEnd::PlyLimit => println!("  No winner after {} plies", outcome.plies),
    }
    Ok(())
}
