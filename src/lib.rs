#![deny(clippy::all)]
//! poker_odds estimates how often poker hands win against each other.
//!
//! Given some known hole cards, an optional partial board, and a number of
//! players, it repeatedly deals random completions of the deal, finds the
//! best five card hand for every player, and counts who wins.
//!
//! # Core
//!
//! The core module contains the building blocks: `Card`, `CardSet`, the
//! `Deck` cards are dealt from, and `evaluate` which finds the best five card
//! hand out of any number of cards.
//!
//! ```
//! use poker_odds::core::{CardSet, HandCategory, Rankable};
//!
//! let cards: CardSet = "Kc,Kd,Kh,Qc,Qd,Qh,2s".parse().unwrap();
//! let best = cards.best_hand();
//! assert_eq!(HandCategory::FullHouse, best.category);
//! assert_eq!("Kh,Kd,Kc,Qh,Qd", best.cards.to_string());
//! ```
//!
//! # Simulation
//!
//! The simulation module runs the monte carlo loop and reports win and tie
//! percentages for every player, optionally broken down by the category of
//! the winning hand.
//!
//! ```
//! use poker_odds::simulation::{SimulationConfig, SimulationEngine};
//!
//! let config = SimulationConfig {
//!     board: "Ah,7d,2c".to_string(),
//!     num_players: Some(3),
//!     iterations: 500,
//!     seed: Some(7),
//!     ..SimulationConfig::with_hands(["As,Kd", "8h,8c"])
//! };
//! let result = SimulationEngine::new(config).unwrap().simulate().unwrap();
//! assert_eq!(3, result.len());
//! assert!(result.get("NPC 1").is_some());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;

/// The monte carlo equity simulation.
pub mod simulation;
