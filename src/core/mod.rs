/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Errors for parsing cards and dealing from a deck.
mod error;
pub use self::error::{CardParseError, DeckError};

/// An ordered group of cards.
mod card_set;
/// Export `CardSet`
pub use self::card_set::CardSet;

/// The undealt cards of a shoe.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Finding the best five card hand.
mod rank;
/// Export the evaluator and the types it produces.
pub use self::rank::{evaluate, BestHand, HandCategory, HandStrength, Rankable};
