use std::cmp::Ordering;

use crate::core::{evaluate, BestHand, Card, CardSet, HandStrength};

/// Name given to the `idx`th player (1 based) without known cards.
pub fn npc_name(idx: usize) -> String {
    format!("NPC {idx}")
}

/// One seat in a `Round`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    seat: usize,
    hole_cards: CardSet,
    best_hand: Option<BestHand>,
    strength: Option<HandStrength>,
}

impl Player {
    /// A player at `seat` with the given starting hole cards. More cards can
    /// be dealt with `deal`.
    pub fn new(name: impl Into<String>, seat: usize, hole_cards: CardSet) -> Self {
        Self {
            name: name.into(),
            seat,
            hole_cards,
            best_hand: None,
            strength: None,
        }
    }

    /// The identity used for statistics: the known hole cards as a string,
    /// or an `NPC n` name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of this player in the configured player order.
    pub fn seat(&self) -> usize {
        self.seat
    }

    pub fn hole_cards(&self) -> &CardSet {
        &self.hole_cards
    }

    /// The best hand, once `evaluate` has run.
    pub fn best_hand(&self) -> Option<&BestHand> {
        self.best_hand.as_ref()
    }

    pub fn strength(&self) -> Option<HandStrength> {
        self.strength
    }

    pub(crate) fn deal(&mut self, card: Card) {
        self.hole_cards.push(card);
    }

    /// Find the best hand from the hole cards plus `board` and remember it.
    pub fn evaluate(&mut self, board: &CardSet) -> &BestHand {
        let best = evaluate(&self.hole_cards.concat(board));
        self.strength = Some(best.strength());
        self.best_hand.insert(best)
    }

    /// Compare the evaluated hands. A player that hasn't been evaluated
    /// compares equal to everyone.
    pub fn compare(&self, other: &Player) -> Ordering {
        match (self.strength, other.strength) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HandCategory;

    fn player(hole: &str, board: &str) -> Player {
        let mut p = Player::new(hole, 0, hole.parse().unwrap());
        p.evaluate(&board.parse().unwrap());
        p
    }

    #[test]
    fn test_npc_name() {
        assert_eq!("NPC 1", npc_name(1));
        assert_eq!("NPC 12", npc_name(12));
    }

    #[test]
    fn test_evaluate_uses_board() {
        let p = player("Ah,Kh", "Qh,Jh,Th,2c,3d");
        let best = p.best_hand().unwrap();
        assert_eq!(HandCategory::StraightFlush, best.category);
        assert_eq!(HandCategory::StraightFlush, p.strength().unwrap().category);
        // The hole cards themselves don't change.
        assert_eq!("Ah,Kh", p.hole_cards().to_string());
    }

    #[test]
    fn test_compare_categories() {
        let board = "2c,7d,9h,Js,3c";
        let pair = player("Ac,Ad", board);
        let high = player("Kc,Qd", board);
        assert_eq!(Ordering::Greater, pair.compare(&high));
        assert_eq!(Ordering::Less, high.compare(&pair));
    }

    #[test]
    fn test_compare_kickers() {
        let board = "Ac,7d,9h,Js,3c";
        let king = player("Ad,Kc", board);
        let queen = player("Ah,Qc", board);
        assert_eq!(Ordering::Greater, king.compare(&queen));
    }

    #[test]
    fn test_compare_board_plays() {
        let board = "Ac,Kd,Qh,Js,Tc";
        let a = player("2c,3d", board);
        let b = player("4h,5s", board);
        assert_eq!(Ordering::Equal, a.compare(&b));
    }

    #[test]
    fn test_unevaluated_is_equal() {
        let evaluated = player("Ac,Ad", "2c,7d,9h,Js,3c");
        let fresh = Player::new("NPC 1", 1, "Kc,Kd".parse().unwrap());
        assert!(fresh.best_hand().is_none());
        assert_eq!(Ordering::Equal, evaluated.compare(&fresh));
        assert_eq!(Ordering::Equal, fresh.compare(&evaluated));
    }
}
