use thiserror::Error;

use super::Card;

/// Errors produced while turning text into cards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum CardParseError {
    #[error("Card string must have a length of 2. Invalid: {0:?}")]
    WrongLength(String),
    #[error("Card string must begin with 2-9, T, J, Q, K, or A. Invalid: {0:?}")]
    UnexpectedValueChar(char),
    #[error("Card string must end with c, d, h, or s. Invalid: {0:?}")]
    UnexpectedSuitChar(char),
}

/// Errors from dealing out of a `Deck`.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DeckError {
    #[error("Deck is empty. There are either too many players, or the board size is too large")]
    Exhausted,
    #[error("Deck does not contain card {0}")]
    CardNotFound(Card),
}
