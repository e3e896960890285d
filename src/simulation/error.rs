use thiserror::Error;

use crate::core::{CardParseError, DeckError};

/// Errors that can stop a simulation. None of them are recoverable; the
/// whole run is abandoned and no partial results are returned.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SimulationError {
    #[error("Invalid card: {0}")]
    Card(#[from] CardParseError),

    #[error("Dealing failed: {0}")]
    Deck(#[from] DeckError),

    #[error("Configuration validation error: {0}")]
    InvalidConfig(String),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
