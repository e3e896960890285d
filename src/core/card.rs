use std::fmt;
use std::str::FromStr;

use super::CardParseError;

/// Card rank or value.
///
/// The discriminant is the numeric rank used for every comparison, so
/// `Value::Ace as u8 == 14` and the ace sorts above the king.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// T
    Ten,
    /// J
    Jack,
    /// Q
    Queen,
    /// K
    King,
    /// A
    Ace,
}

impl Value {
    /// Every value, lowest first.
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// Given a character parse that char into a value.
    /// Face cards are upper case only.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_odds::core::Value;
    ///
    /// assert_eq!(Some(Value::Ace), Value::from_char('A'));
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }

    /// The english name of the value, e.g. "queen".
    pub fn long_name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::King => "king",
            Self::Queen => "queen",
            Self::Jack => "jack",
            Self::Ten => "ten",
            Self::Nine => "nine",
            Self::Eight => "eight",
            Self::Seven => "seven",
            Self::Six => "six",
            Self::Five => "five",
            Self::Four => "four",
            Self::Three => "three",
            Self::Two => "two",
        }
    }
}

/// Enum for the four different suits.
/// The order only exists to make sorting deterministic. It never
/// contributes to the strength of a hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs
    Club = 1,
    /// Diamonds
    Diamond,
    /// Hearts
    Heart,
    /// Spades
    Spade,
}

impl Suit {
    /// All the suits in discriminant order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Given a character that represents a suit try and parse that char.
    /// Only the lower case ascii forms are accepted.
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'c' => Some(Self::Club),
            'd' => Some(Self::Diamond),
            'h' => Some(Self::Heart),
            's' => Some(Self::Spade),
            _ => None,
        }
    }

    /// This Suit to a character.
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }

    /// Plural english name, e.g. "hearts".
    pub fn long_name(self) -> &'static str {
        match self {
            Self::Club => "clubs",
            Self::Diamond => "diamonds",
            Self::Heart => "hearts",
            Self::Spade => "spades",
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards order by value first and suit second, so sorting a slice of cards
/// in reverse gives the descending order the evaluator works from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Full name of the card, e.g. "ace of spades".
    pub fn long_name(&self) -> String {
        format!("{} of {}", self.value.long_name(), self.suit.long_name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse the two character form, value first then suit.
///
/// # Examples
///
/// ```
/// use poker_odds::core::{Card, Suit, Value};
///
/// let card: Card = "Td".parse().unwrap();
/// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
/// assert!("Tdx".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(v), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardParseError::WrongLength(s.to_string()));
        };
        let value = Value::from_char(v).ok_or(CardParseError::UnexpectedValueChar(v))?;
        let suit = Suit::from_char(su).ok_or(CardParseError::UnexpectedSuitChar(su))?;
        Ok(Card { value, suit })
    }
}
