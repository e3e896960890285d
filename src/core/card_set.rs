use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use super::{Card, CardParseError};

/// An ordered, growable group of cards.
///
/// Hole cards, the board, and the combined cards handed to the evaluator
/// are all `CardSet`s. The structure itself allows duplicates; keeping every
/// physical card in exactly one place is the job of whoever deals them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` cards.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    /// Add a single card to the end.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append every card of `other` to the end of this set.
    pub fn extend_from_set(&mut self, other: &CardSet) {
        self.cards.extend_from_slice(&other.cards);
    }

    /// A new set holding this set's cards followed by `other`'s.
    pub fn concat(&self, other: &CardSet) -> CardSet {
        let mut cards = Vec::with_capacity(self.len() + other.len());
        cards.extend_from_slice(&self.cards);
        cards.extend_from_slice(&other.cards);
        CardSet { cards }
    }

    /// Remove the first card equal to `card`, returning it if there was one.
    pub fn remove(&mut self, card: &Card) -> Option<Card> {
        let idx = self.cards.iter().position(|c| c == card)?;
        Some(self.cards.remove(idx))
    }

    /// Count how many cards share each key.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_odds::core::{CardSet, Suit, Value};
    ///
    /// let cards: CardSet = "Ah,Ad,Kh".parse().unwrap();
    /// let by_value = cards.count_by(|c| c.value);
    /// assert_eq!(Some(&2), by_value.get(&Value::Ace));
    /// let by_suit = cards.count_by(|c| c.suit);
    /// assert_eq!(Some(&2), by_suit.get(&Suit::Heart));
    /// ```
    pub fn count_by<K, F>(&self, key: F) -> BTreeMap<K, usize>
    where
        K: Ord,
        F: Fn(&Card) -> K,
    {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(key(card)).or_insert(0) += 1;
        }
        counts
    }

    /// Sort in place, highest value first. Cards of the same value are
    /// ordered by suit so iteration order is deterministic.
    pub fn sort_desc(&mut self) {
        self.cards.sort_unstable_by(|a, b| b.cmp(a));
    }

    pub(crate) fn as_mut_vec(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

impl Deref for CardSet {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for CardSet {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Comma separated two character cards, e.g. `Ac,Kd`.
impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parse a comma separated list of cards. The empty string is the empty
/// set.
impl FromStr for CardSet {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(CardSet::new());
        }
        s.split(',').map(Card::from_str).collect()
    }
}
