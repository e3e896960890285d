use std::collections::HashSet;

use crate::core::CardSet;

use super::error::{Result, SimulationError};
use super::round::DealSpec;

/// Everything needed to run an equity simulation.
///
/// Omitted fields take the defaults below, both through `Default` and when
/// deserializing (field names are camelCase, e.g. `numPlayers`).
///
/// | field | default |
/// |---|---|
/// | `hands` | none |
/// | `num_players` | number of hands |
/// | `num_decks` | 1 |
/// | `board` | empty |
/// | `board_size` | 5 |
/// | `hand_size` | 2 |
/// | `iterations` | 1000 |
/// | `return_hand_stats` | false |
/// | `return_tie_hand_stats` | false |
/// | `seed` | none, a random seed is used |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Known hole cards, one comma separated string per player, e.g. `"Ac,Ad"`.
    pub hands: Vec<String>,
    /// Total players at the table. Players beyond `hands` get random cards.
    pub num_players: Option<usize>,
    /// How many 52 card decks make up the shoe.
    pub num_decks: usize,
    /// Community cards already known, comma separated.
    pub board: String,
    /// Community cards once the board is complete.
    pub board_size: usize,
    /// Hole cards each player ends up with.
    pub hand_size: usize,
    /// Number of deals to simulate.
    pub iterations: usize,
    /// Break outright wins down by hand category.
    pub return_hand_stats: bool,
    /// Break ties down by hand category.
    pub return_tie_hand_stats: bool,
    /// Optional random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hands: Vec::new(),
            num_players: None,
            num_decks: 1,
            board: String::new(),
            board_size: 5,
            hand_size: 2,
            iterations: 1000,
            return_hand_stats: false,
            return_tie_hand_stats: false,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for the given known hands, everything else
    /// defaulted.
    pub fn with_hands<S: Into<String>>(hands: impl IntoIterator<Item = S>) -> Self {
        Self {
            hands: hands.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// The number of players after defaulting.
    pub fn player_count(&self) -> usize {
        self.num_players.unwrap_or(self.hands.len())
    }

    /// Validate the configuration.
    ///
    /// This checks the shape of the input only. Whether the shoe holds enough
    /// cards for every player and the board is discovered while dealing.
    pub fn validate(&self) -> Result<()> {
        if self.hands.is_empty() && self.num_players.is_none() {
            return Err(SimulationError::InvalidConfig(
                "either num_players or hands must be provided".to_string(),
            ));
        }

        if let Some(num_players) = self.num_players {
            if num_players == 0 {
                return Err(SimulationError::InvalidConfig(
                    "num_players must be greater than 0".to_string(),
                ));
            }
            if num_players < self.hands.len() {
                return Err(SimulationError::InvalidConfig(format!(
                    "num_players ({}) must be at least the number of hands ({})",
                    num_players,
                    self.hands.len()
                )));
            }
        }

        if self.num_decks == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_decks must be greater than 0".to_string(),
            ));
        }

        if self.iterations == 0 {
            return Err(SimulationError::InvalidConfig(
                "iterations must be greater than 0".to_string(),
            ));
        }

        let board: CardSet = self.board.parse()?;
        if board.len() > self.board_size {
            return Err(SimulationError::InvalidConfig(format!(
                "board {:?} has more than board_size ({}) cards",
                self.board, self.board_size
            )));
        }

        let mut seen = HashSet::new();
        let mut all_unique = board.iter().all(|c| seen.insert(*c));
        for hand in &self.hands {
            let cards: CardSet = hand.parse()?;
            if cards.len() > self.hand_size {
                return Err(SimulationError::InvalidConfig(format!(
                    "hand {:?} has more than hand_size ({}) cards",
                    hand, self.hand_size
                )));
            }
            all_unique &= cards.iter().all(|c| seen.insert(*c));
        }
        if !all_unique {
            return Err(SimulationError::InvalidConfig(
                "input cards must be unique across hands and board".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse the card strings into what a `Round` needs to deal.
    pub fn deal_spec(&self) -> Result<DealSpec> {
        let board = self.board.parse()?;
        let hands = self
            .hands
            .iter()
            .map(|h| h.parse::<CardSet>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(DealSpec {
            board,
            hands,
            num_players: self.player_count(),
            hand_size: self.hand_size,
            board_size: self.board_size,
            num_decks: self.num_decks,
        })
    }
}
