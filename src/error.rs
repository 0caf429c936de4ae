use std::io;

use thiserror::Error;

use crate::world::ValidationError;

/// Failures while building a world from its TOML description.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("could not read world file: {0}")]
    Io(#[from] io::Error),

    #[error("world file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("world file failed validation:\n{}", format_problems(.0))]
    Invalid(Vec<ValidationError>),
}

/// Failures that end a running game. Player mistakes never end up here.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    World(#[from] WorldError),
}

fn format_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {}", p.message))
        .collect::<Vec<String>>()
        .join("\n")
}
