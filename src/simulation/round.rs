use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::event;

use crate::core::{CardSet, Deck, DeckError};

use super::player::{npc_name, Player};

/// The parsed, fixed part of every deal: which cards are already known and
/// how many cards everything should end up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealSpec {
    /// Known community cards.
    pub board: CardSet,
    /// Known hole cards, one entry per known player.
    pub hands: Vec<CardSet>,
    /// Total players. Must be at least `hands.len()`.
    pub num_players: usize,
    pub hand_size: usize,
    pub board_size: usize,
    pub num_decks: usize,
}

impl DealSpec {
    /// The identity of every player in seat order: the known hands first,
    /// then `NPC 1`, `NPC 2`, ...
    pub fn player_names(&self) -> Vec<String> {
        let npcs = self.num_players.saturating_sub(self.hands.len());
        self.hands
            .iter()
            .map(|h| h.to_string())
            .chain((1..=npcs).map(npc_name))
            .collect()
    }
}

/// A single simulated deal.
///
/// A round is created fresh for each iteration with its own deck, so no
/// state is shared between rounds.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    board: CardSet,
    players: Vec<Player>,
}

impl Round {
    /// Shuffle a new shoe, take the known cards out of it, then complete the
    /// board, the known players' hands, and finally deal the unknown players.
    ///
    /// Fails with `DeckError::Exhausted` when the shoe runs out.
    pub fn deal<R: Rng + ?Sized>(spec: &DealSpec, rng: &mut R) -> Result<Self, DeckError> {
        let mut deck = Deck::new(spec.num_decks);
        deck.shuffle(rng);

        deck.remove_all(&spec.board)?;
        for hand in &spec.hands {
            deck.remove_all(hand)?;
        }

        let mut board = spec.board.clone();
        while board.len() < spec.board_size {
            board.push(deck.draw()?);
        }

        let mut players = Vec::with_capacity(spec.num_players);
        for (seat, hand) in spec.hands.iter().enumerate() {
            let mut player = Player::new(hand.to_string(), seat, hand.clone());
            while player.hole_cards().len() < spec.hand_size {
                player.deal(deck.draw()?);
            }
            players.push(player);
        }

        for seat in spec.hands.len()..spec.num_players {
            let npc_idx = seat - spec.hands.len() + 1;
            let mut player = Player::new(npc_name(npc_idx), seat, CardSet::new());
            for _ in 0..spec.hand_size {
                player.deal(deck.draw()?);
            }
            players.push(player);
        }

        Ok(Self {
            deck,
            board,
            players,
        })
    }

    pub fn board(&self) -> &CardSet {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The cards left in the shoe after dealing.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Evaluate every player and return the winners, strongest first.
    ///
    /// More than one winner means an exact tie. Players are shuffled before
    /// the sort so that tied players come out in random order.
    pub fn play<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Player> {
        let Round {
            board, mut players, ..
        } = self;

        for player in players.iter_mut() {
            player.evaluate(&board);
        }

        players.shuffle(rng);
        players.sort_by(|a, b| b.compare(a));

        let mut ranked = players.into_iter();
        let mut winners: Vec<Player> = ranked.next().into_iter().collect();
        for player in ranked {
            match winners.last().map(|last| last.compare(&player)) {
                Some(Ordering::Equal) => winners.push(player),
                _ => break,
            }
        }

        event!(
            tracing::Level::TRACE,
            board = %board,
            num_winners = winners.len(),
            winner = winners.first().map(Player::name),
            category = ?winners.first().and_then(Player::best_hand).map(|b| b.category),
            "Round played"
        );

        winners
    }
}
