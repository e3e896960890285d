use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, CardSet, DeckError, Suit, Value};

/// The undealt cards of a shoe made from one or more standard decks.
///
/// A `Deck` owns its cards and only allows them to leave through `draw` or
/// `remove`, so a card can never be in the deck and in someone's hand at the
/// same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: CardSet,
}

impl Deck {
    /// Create a shoe of `num_decks` full 52 card decks, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_odds::core::Deck;
    ///
    /// assert_eq!(52, Deck::new(1).len());
    /// assert_eq!(104, Deck::new(2).len());
    /// ```
    pub fn new(num_decks: usize) -> Self {
        let mut cards = CardSet::with_capacity(52 * num_decks);
        for _ in 0..num_decks {
            for v in Value::ALL {
                for s in Suit::ALL {
                    cards.push(Card::new(v, s));
                }
            }
        }
        Self { cards }
    }

    /// Randomly permute the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.as_mut_vec().shuffle(rng);
    }

    /// Take the card from the top (the end) of the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.as_mut_vec().pop().ok_or(DeckError::Exhausted)
    }

    /// Take a specific card out of the deck. Only the first copy is removed
    /// when the shoe holds several decks.
    pub fn remove(&mut self, card: &Card) -> Result<Card, DeckError> {
        self.cards
            .remove(card)
            .ok_or(DeckError::CardNotFound(*card))
    }

    /// Remove every card in `cards` from the deck.
    pub fn remove_all(&mut self, cards: &CardSet) -> Result<(), DeckError> {
        for card in cards {
            self.remove(card)?;
        }
        Ok(())
    }

    /// Does the deck still hold at least one copy of `card`?
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// How many cards are left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
