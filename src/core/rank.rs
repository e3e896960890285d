use std::collections::BTreeSet;
use std::fmt;

use crate::core::card::{Card, Suit, Value};

use super::CardSet;

/// All the different possible hand categories, weakest first.
///
/// The derived `Ord` is the strength order, so
/// `HandCategory::HighCard < HandCategory::StraightFlush`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    Pair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    Trips,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    Quads,
    /// Five cards in a sequence all for the same suit.
    StraightFlush,
}

impl HandCategory {
    /// Every category, weakest first.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::Trips,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::Quads,
        HandCategory::StraightFlush,
    ];

    /// Position of this category in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The name used when reporting statistics.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "highCard",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "twoPair",
            HandCategory::Trips => "trips",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "fullHouse",
            HandCategory::Quads => "quads",
            HandCategory::StraightFlush => "straightFlush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strength of a hand reduced to something that can be compared
/// directly: the category, then the values of the chosen cards from most to
/// least significant.
///
/// Two hands tie exactly when their strengths are equal. Suits never take
/// part. Missing positions (fewer than five cards were evaluated) are `None`
/// and sort below every value.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct HandStrength {
    pub category: HandCategory,
    pub values: [Option<Value>; 5],
}

/// The best five cards that could be made and what they make.
///
/// `cards` is ordered so that comparing two hands of the same category
/// position by position decides the winner: the grouped cards first (highest
/// group first) and kickers after, highest first. A straight is ordered from
/// its top card down, so the wheel reads `5 4 3 2 A`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct BestHand {
    pub category: HandCategory,
    pub cards: CardSet,
}

impl BestHand {
    fn new(category: HandCategory, cards: Vec<Card>) -> Self {
        Self {
            category,
            cards: CardSet::from(cards),
        }
    }

    /// The comparable strength of this hand.
    pub fn strength(&self) -> HandStrength {
        let mut values = [None; 5];
        for (slot, card) in values.iter_mut().zip(self.cards.iter()) {
            *slot = Some(card.value);
        }
        HandStrength {
            category: self.category,
            values,
        }
    }
}

/// Given the distinct values of some cards, highest first, find the top card
/// of the best straight. The wheel reports `Value::Five`.
///
/// Runs are found by walking the values and extending the current run while
/// each value is exactly one below the last. The first run to reach five is
/// the highest straight. If nothing reaches five the last run is the lowest
/// one; if that is 5-4-3-2 and there's an ace then it's the wheel.
fn straight_high(values_desc: &[Value]) -> Option<Value> {
    let mut run_high = None;
    let mut run_len = 0;
    let mut last: Option<u8> = None;

    for &value in values_desc {
        let v = value as u8;
        if last.is_some_and(|l| l == v + 1) {
            run_len += 1;
        } else {
            run_high = Some(value);
            run_len = 1;
        }
        last = Some(v);

        if run_len == 5 {
            return run_high;
        }
    }

    if run_len == 4 && run_high == Some(Value::Five) && values_desc.first() == Some(&Value::Ace) {
        Some(Value::Five)
    } else {
        None
    }
}

/// One card for each value of the straight topped by `high`, taken from
/// `sorted`. For the wheel the ace goes last.
fn straight_cards(sorted: &[Card], high: Value) -> Vec<Card> {
    let top = high as u8;
    let wanted: Vec<u8> = if high == Value::Five {
        vec![5, 4, 3, 2, Value::Ace as u8]
    } else {
        (top - 4..=top).rev().collect()
    };
    wanted
        .into_iter()
        .filter_map(|v| sorted.iter().find(|c| c.value as u8 == v).copied())
        .collect()
}

/// Distinct values of `cards`, highest first.
fn distinct_values(cards: &[Card]) -> Vec<Value> {
    let set: BTreeSet<Value> = cards.iter().map(|c| c.value).collect();
    set.into_iter().rev().collect()
}

/// The first `n` cards of `sorted` having value `value`.
fn take_value(sorted: &[Card], value: Value, n: usize) -> Vec<Card> {
    sorted
        .iter()
        .filter(|c| c.value == value)
        .take(n)
        .copied()
        .collect()
}

/// Fill `made` up to five cards with the highest cards whose value isn't
/// already part of the made hand.
fn with_kickers(category: HandCategory, mut made: Vec<Card>, sorted: &[Card]) -> BestHand {
    let used: Vec<Value> = made.iter().map(|c| c.value).collect();
    let needed = 5usize.saturating_sub(made.len());
    made.extend(
        sorted
            .iter()
            .filter(|c| !used.contains(&c.value))
            .take(needed)
            .copied(),
    );
    BestHand::new(category, made)
}

/// Find the best five card hand that can be made from `cards`.
///
/// This works on any number of cards. With five or more cards the result
/// always holds exactly five. With fewer, the best partial hand is returned
/// (a pair of aces from two hole cards is still a pair).
///
/// # Examples
///
/// ```
/// use poker_odds::core::{evaluate, CardSet, HandCategory};
///
/// let cards: CardSet = "Ah,2c,3d,4s,5h,9c,Jd".parse().unwrap();
/// let best = evaluate(&cards);
/// assert_eq!(HandCategory::Straight, best.category);
/// assert_eq!("5h,4s,3d,2c,Ah", best.cards.to_string());
/// ```
pub fn evaluate(cards: &[Card]) -> BestHand {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let value_counts = CardSet::from(sorted.clone()).count_by(|c| c.value);
    let mut quad_values = Vec::new();
    let mut trip_values = Vec::new();
    let mut pair_values = Vec::new();
    for (&value, &count) in value_counts.iter().rev() {
        match count {
            0 | 1 => {}
            2 => pair_values.push(value),
            3 => trip_values.push(value),
            _ => quad_values.push(value),
        }
    }

    // Every suit holding five or more cards, with those cards.
    let flush_suits: Vec<(Suit, Vec<Card>)> = CardSet::from(sorted.clone())
        .count_by(|c| c.suit)
        .into_iter()
        .filter(|&(_, count)| count >= 5)
        .map(|(suit, _)| {
            let suited: Vec<Card> = sorted.iter().filter(|c| c.suit == suit).copied().collect();
            (suit, suited)
        })
        .collect();

    // Straight flush. The straight has to be made from the suited cards
    // alone; having a flush and a straight at the same time isn't enough.
    let best_straight_flush = flush_suits
        .iter()
        .filter_map(|(_, suited)| {
            straight_high(&distinct_values(suited)).map(|high| (high, suited))
        })
        .max_by_key(|&(high, _)| high);
    if let Some((high, suited)) = best_straight_flush {
        return BestHand::new(HandCategory::StraightFlush, straight_cards(suited, high));
    }

    if let Some(&quad) = quad_values.first() {
        return with_kickers(HandCategory::Quads, take_value(&sorted, quad, 4), &sorted);
    }

    if let Some(&trip) = trip_values.first() {
        // A second set can stand in for the pair.
        let pair = [trip_values.get(1), pair_values.first()]
            .into_iter()
            .flatten()
            .max()
            .copied();
        if let Some(pair) = pair {
            let mut made = take_value(&sorted, trip, 3);
            made.extend(take_value(&sorted, pair, 2));
            return BestHand::new(HandCategory::FullHouse, made);
        }
    }

    let best_flush = flush_suits
        .iter()
        .map(|(_, suited)| &suited[..5])
        .max_by_key(|top| top.iter().map(|c| c.value).collect::<Vec<_>>());
    if let Some(top) = best_flush {
        return BestHand::new(HandCategory::Flush, top.to_vec());
    }

    if let Some(high) = straight_high(&distinct_values(&sorted)) {
        return BestHand::new(HandCategory::Straight, straight_cards(&sorted, high));
    }

    if let Some(&trip) = trip_values.first() {
        return with_kickers(HandCategory::Trips, take_value(&sorted, trip, 3), &sorted);
    }

    match pair_values[..] {
        [high, low, ..] => {
            let mut made = take_value(&sorted, high, 2);
            made.extend(take_value(&sorted, low, 2));
            with_kickers(HandCategory::TwoPair, made, &sorted)
        }
        [pair] => with_kickers(HandCategory::Pair, take_value(&sorted, pair, 2), &sorted),
        [] => with_kickers(HandCategory::HighCard, Vec::new(), &sorted),
    }
}

/// Can this turn into a best hand? There are default implementations for
/// `CardSet`, `Vec<Card>` and card slices.
pub trait Rankable {
    /// The cards to consider.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Find the best five card hand from these cards.
    /// This doesn't cache; calling it twice does the work twice.
    fn best_hand(&self) -> BestHand {
        let cards: Vec<Card> = self.cards().collect();
        evaluate(&cards)
    }

    /// Shortcut for `self.best_hand().strength()`.
    fn strength(&self) -> HandStrength {
        self.best_hand().strength()
    }
}

impl Rankable for CardSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::core::Deck;

    fn best(s: &str) -> BestHand {
        s.parse::<CardSet>().unwrap().best_hand()
    }

    fn values(hand: &BestHand) -> Vec<Value> {
        hand.cards.iter().map(|c| c.value).collect()
    }

    #[test]
    fn test_category_order() {
        assert!(HandCategory::HighCard < HandCategory::StraightFlush);
        assert!(HandCategory::HighCard < HandCategory::Quads);
        assert!(HandCategory::Flush < HandCategory::FullHouse);
        for w in HandCategory::ALL.windows(2) {
            assert!(w[0] < w[1]);
        }
        for (idx, c) in HandCategory::ALL.iter().enumerate() {
            assert_eq!(idx, c.index());
        }
    }

    #[test]
    fn test_high_card() {
        let h = best("Ad,8h,9c,Tc,5c,3d,2s");
        assert_eq!(HandCategory::HighCard, h.category);
        assert_eq!(
            vec![Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five],
            values(&h)
        );
    }

    #[test]
    fn test_pair() {
        let h = best("Ad,8h,9c,Tc,5c,3d,Ac");
        assert_eq!(HandCategory::Pair, h.category);
        assert_eq!(
            vec![Value::Ace, Value::Ace, Value::Ten, Value::Nine, Value::Eight],
            values(&h)
        );
    }

    #[test]
    fn test_two_pair_from_three_pair() {
        let h = best("2h,2d,8d,8s,Kd,Ks,Th");
        assert_eq!(HandCategory::TwoPair, h.category);
        assert_eq!(
            vec![Value::King, Value::King, Value::Eight, Value::Eight, Value::Ten],
            values(&h)
        );
    }

    #[test]
    fn test_two_pair_kicker_can_be_third_pair() {
        let h = best("2h,2d,8d,8s,Kd,Ks,3h");
        assert_eq!(HandCategory::TwoPair, h.category);
        assert_eq!(
            vec![Value::King, Value::King, Value::Eight, Value::Eight, Value::Three],
            values(&h)
        );
        let h = best("9h,9d,8d,8s,Kd,Ks,3h");
        assert_eq!(
            vec![Value::King, Value::King, Value::Nine, Value::Nine, Value::Eight],
            values(&h)
        );
    }

    #[test]
    fn test_trips() {
        let h = best("2c,2s,2h,5s,6d,Jc,9h");
        assert_eq!(HandCategory::Trips, h.category);
        assert_eq!(
            vec![Value::Two, Value::Two, Value::Two, Value::Jack, Value::Nine],
            values(&h)
        );
    }

    #[test]
    fn test_straight() {
        let h = best("2c,3s,4h,5s,6d,Kc,Kh");
        assert_eq!(HandCategory::Straight, h.category);
        assert_eq!(
            vec![Value::Six, Value::Five, Value::Four, Value::Three, Value::Two],
            values(&h)
        );
    }

    #[test]
    fn test_straight_uses_one_card_per_value() {
        let h = best("9c,9d,8h,7s,7d,6c,5h");
        assert_eq!(HandCategory::Straight, h.category);
        assert_eq!(
            vec![Value::Nine, Value::Eight, Value::Seven, Value::Six, Value::Five],
            values(&h)
        );
    }

    #[test]
    fn test_straight_picks_highest_run() {
        let h = best("4c,5d,6h,7s,8d,9c,Th");
        assert_eq!(Value::Ten, values(&h)[0]);
    }

    #[test]
    fn test_rank_seven_straights() {
        let straights = [
            ("2h,3c,4s,5d,6d,Ts,Kh", Value::Six),
            ("3c,4s,5d,6d,7h,Ts,Kh", Value::Seven),
            ("4s,5d,6d,7h,8c,Ts,Kh", Value::Eight),
            ("5c,6c,7h,8h,9d,Ah,Ad", Value::Nine),
            ("6c,7c,8h,9h,Ts,Kc,6s", Value::Ten),
            ("7c,8h,9h,Ts,Kc,6s,Jh", Value::Jack),
            ("8h,9h,Ts,Qc,6s,Jh,As", Value::Queen),
            ("9h,Ts,Qc,6s,Jh,Ks,Kc", Value::King),
            ("Ts,Qc,6s,Jh,Ks,Ac,5h", Value::Ace),
        ];
        for (s, high) in straights {
            let h = best(s);
            assert_eq!(HandCategory::Straight, h.category, "{s}");
            assert_eq!(high, values(&h)[0], "{s}");
        }
    }

    #[test]
    fn test_wheel() {
        let h = best("Ad,2c,3s,4h,5s");
        assert_eq!(HandCategory::Straight, h.category);
        assert_eq!(
            vec![Value::Five, Value::Four, Value::Three, Value::Two, Value::Ace],
            values(&h)
        );
        assert_eq!(Value::Five, h.strength().values[0].unwrap());
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        let wheel = best("Ad,2c,3s,4h,5s,Kc,Qd");
        let six_high = best("6d,2c,3s,4h,5s,Kc,Qd");
        assert_eq!(HandCategory::Straight, wheel.category);
        assert!(wheel.strength() < six_high.strength());
        // An ace high straight beats both.
        let broadway = best("Ad,Kc,Qs,Jh,Ts,2c,3d");
        assert!(broadway.strength() > six_high.strength());
    }

    #[test]
    fn test_no_wheel_without_ace() {
        let h = best("Kd,2c,3s,4h,5s,9c,9d");
        assert_eq!(HandCategory::Pair, h.category);
    }

    #[test]
    fn test_wheel_with_six_is_six_high() {
        let h = best("Ad,2c,3s,4h,5s,6c");
        assert_eq!(Value::Six, values(&h)[0]);
    }

    #[test]
    fn test_flush() {
        let h = best("Ad,8d,9d,Td,5d,4d,Kc");
        assert_eq!(HandCategory::Flush, h.category);
        assert_eq!(
            vec![Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five],
            values(&h)
        );
        assert!(h.cards.iter().all(|c| c.suit == Suit::Diamond));
    }

    #[test]
    fn test_flush_and_straight_without_straight_flush() {
        // Hearts flush plus a 9 high straight that uses two off suit cards.
        let h = best("9h,8h,7c,6h,5d,2h,Kh");
        assert_eq!(HandCategory::Flush, h.category);
        assert_eq!(
            vec![Value::King, Value::Nine, Value::Eight, Value::Six, Value::Two],
            values(&h)
        );
    }

    #[test]
    fn test_flush_beats_straight() {
        let h = best("Th,9c,8h,7h,6s,3h,2h");
        assert_eq!(HandCategory::Flush, h.category);
    }

    #[test]
    fn test_full_house() {
        let h = best("Ad,Ac,9d,9c,9s,2c,3h");
        assert_eq!(HandCategory::FullHouse, h.category);
        assert_eq!(
            vec![Value::Nine, Value::Nine, Value::Nine, Value::Ace, Value::Ace],
            values(&h)
        );
    }

    #[test]
    fn test_full_house_two_sets() {
        let h = best("Kc,Kd,Kh,Qc,Qd,Qh,2s");
        assert_eq!(HandCategory::FullHouse, h.category);
        assert_eq!(
            vec![Value::King, Value::King, Value::King, Value::Queen, Value::Queen],
            values(&h)
        );
    }

    #[test]
    fn test_full_house_picks_best_pair() {
        let h = best("2h,2d,2c,8d,8s,Kd,Ks");
        assert_eq!(HandCategory::FullHouse, h.category);
        assert_eq!(
            vec![Value::Two, Value::Two, Value::Two, Value::King, Value::King],
            values(&h)
        );
    }

    #[test]
    fn test_full_house_lower_set_over_pair() {
        let h = best("As,2h,2d,2c,8d,8s,8c");
        assert_eq!(
            vec![Value::Eight, Value::Eight, Value::Eight, Value::Two, Value::Two],
            values(&h)
        );
    }

    #[test]
    fn test_full_house_pair_over_second_set() {
        // Two sets plus a pair higher than the lower set, only possible with
        // more than seven cards. The pair beats breaking up the second set.
        let h = best("Ac,Ad,Ah,2c,2d,2h,Kc,Kd");
        assert_eq!(HandCategory::FullHouse, h.category);
        assert_eq!("Ah,Ad,Ac,Kd,Kc", h.cards.to_string());
        assert!(h.strength() > best("Ac,Ad,Ah,2c,2d").strength());
    }

    #[test]
    fn test_full_house_beats_flush() {
        let h = best("Ah,Ad,As,Kh,Kd,2h,3h,4h");
        assert_eq!(HandCategory::FullHouse, h.category);
    }

    #[test]
    fn test_quads() {
        let h = best("2s,2h,2d,2c,Kd,9h,4s");
        assert_eq!(HandCategory::Quads, h.category);
        assert_eq!(
            vec![Value::Two, Value::Two, Value::Two, Value::Two, Value::King],
            values(&h)
        );
    }

    #[test]
    fn test_quads_plus_set() {
        let h = best("2s,2h,2d,2c,8d,8s,8c");
        assert_eq!(HandCategory::Quads, h.category);
        assert_eq!(Value::Eight, values(&h)[4]);
    }

    #[test]
    fn test_straight_flush() {
        let h = best("Ad,Kd,Qd,Jd,Td,9d,8d");
        assert_eq!(HandCategory::StraightFlush, h.category);
        assert_eq!(Value::Ace, values(&h)[0]);
    }

    #[test]
    fn test_straight_flush_below_mixed_straight() {
        // The best straight is ten high but the suited run is only nine high.
        let h = best("5s,6s,7s,8s,9s,Td,2c");
        assert_eq!(HandCategory::StraightFlush, h.category);
        assert_eq!(
            vec![Value::Nine, Value::Eight, Value::Seven, Value::Six, Value::Five],
            values(&h)
        );
    }

    #[test]
    fn test_straight_flush_wheel() {
        // Make sure that we pick up the wheel straight flush
        // over a different straight.
        let h = best("2d,3d,4d,5d,6h,7c,Ad");
        assert_eq!(HandCategory::StraightFlush, h.category);
        assert_eq!(
            vec![Value::Five, Value::Four, Value::Three, Value::Two, Value::Ace],
            values(&h)
        );
    }

    #[test]
    fn test_straight_flush_find_best_with_wheel() {
        let h = best("6d,Kd,Ad,2d,5d,4d,3d");
        assert_eq!(HandCategory::StraightFlush, h.category);
        assert_eq!(Value::Six, values(&h)[0]);
    }

    #[test]
    fn test_fewer_than_five_cards() {
        let h = best("Ad,Ac");
        assert_eq!(HandCategory::Pair, h.category);
        assert_eq!(2, h.cards.len());
        assert_eq!(
            [Some(Value::Ace), Some(Value::Ace), None, None, None],
            h.strength().values
        );
        let h = best("");
        assert_eq!(HandCategory::HighCard, h.category);
        assert!(h.cards.is_empty());
    }

    #[test]
    fn test_multi_deck_five_of_a_kind_is_quads() {
        let h = best("Ac,Ac,Ad,Ah,As,Kc,2d");
        assert_eq!(HandCategory::Quads, h.category);
        assert_eq!(5, h.cards.len());
        assert_eq!(Value::King, values(&h)[4]);
    }

    #[test]
    fn test_strength_ignores_suits() {
        let a = best("Ah,Kh,9c,7d,5s,3c,2d");
        let b = best("As,Kd,9h,7c,5d,3s,2h");
        assert_ne!(a, b);
        assert_eq!(a.strength(), b.strength());
    }

    #[test]
    fn test_kicker_decides() {
        let a = best("Ah,Ad,Kc,7d,5s,3c,2d");
        let b = best("As,Ac,Qh,7c,5d,3s,2h");
        assert!(a.strength() > b.strength());
    }

    #[test]
    fn test_always_five_cards() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..500 {
            let mut d = Deck::new(1);
            d.shuffle(&mut rng);
            let cards: CardSet = (0..7).map(|_| d.draw().unwrap()).collect();
            let h = cards.best_hand();
            assert_eq!(5, h.cards.len());
            // Every chosen card really came from the input.
            assert!(h.cards.iter().all(|c| cards.contains(c)));
        }
    }

    /// Picking the best five out of seven has to match the best of every
    /// five card subset.
    #[test]
    fn test_best_of_seven_matches_subsets() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..300 {
            let mut d = Deck::new(1);
            d.shuffle(&mut rng);
            let cards: Vec<Card> = (0..7).map(|_| d.draw().unwrap()).collect();
            let mut best_subset = None;
            for skip_a in 0..7 {
                for skip_b in (skip_a + 1)..7 {
                    let five: Vec<Card> = cards
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip_a && i != skip_b)
                        .map(|(_, c)| *c)
                        .collect();
                    let s = five.strength();
                    best_subset = best_subset.max(Some(s));
                }
            }
            assert_eq!(best_subset, Some(cards.strength()), "{cards:?}");
        }
    }

    #[test]
    fn test_strength_is_transitive() {
        let mut rng = StdRng::seed_from_u64(3);
        let strengths: Vec<HandStrength> = (0..40)
            .map(|_| {
                let mut d = Deck::new(1);
                d.shuffle(&mut rng);
                let cards: Vec<Card> = (0..7).map(|_| d.draw().unwrap()).collect();
                cards.strength()
            })
            .collect();
        for a in &strengths {
            for b in &strengths {
                for c in &strengths {
                    if a >= b && b >= c {
                        assert!(a >= c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!("highCard", HandCategory::HighCard.to_string());
        assert_eq!("straightFlush", HandCategory::StraightFlush.name());
    }
}
