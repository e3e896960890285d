//! Monte carlo equity simulation.
//!
//! A `SimulationEngine` deals one `Round` per iteration. Each round shuffles
//! its own shoe, removes the known cards, completes the board and every hand,
//! then finds the winners. Winners are folded into a `Tally` and at the end
//! the counts become percentages in a `SimulationResult`.

/// Errors that stop a simulation.
mod error;
pub use self::error::{Result, SimulationError};

/// Configuration, defaults and input validation.
mod config;
pub use self::config::SimulationConfig;

/// A player and their hand.
mod player;
pub use self::player::{npc_name, Player};

/// Dealing and playing a single round.
mod round;
pub use self::round::{DealSpec, Round};

/// Counting wins and ties and turning them into percentages.
mod stats;
pub use self::stats::{percent, CategoryStat, CategoryStats, SimulationResult, Stats, Tally};

/// The iteration loop.
mod engine;
pub use self::engine::SimulationEngine;
