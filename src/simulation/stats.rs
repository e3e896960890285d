use std::ops::{Index, IndexMut};

use crate::core::HandCategory;

use super::player::Player;

/// Percentage of `count` out of `total`, rounded to four decimal places
/// (half away from zero).
pub fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 10_000.0).round() / 10_000.0
}

/// How often something happened and what share of all iterations that is.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryStat {
    pub count: u64,
    pub percent: f64,
}

/// One `CategoryStat` for each of the nine hand categories. Every category is
/// always present, starting at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats {
    stats: [CategoryStat; 9],
}

impl CategoryStats {
    fn from_counts(counts: &[u64; 9], iterations: u64) -> Self {
        let mut stats = [CategoryStat::default(); 9];
        for (stat, &count) in stats.iter_mut().zip(counts.iter()) {
            *stat = CategoryStat {
                count,
                percent: percent(count, iterations),
            };
        }
        Self { stats }
    }

    /// Iterate over every category, weakest first.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, &CategoryStat)> {
        HandCategory::ALL.into_iter().zip(self.stats.iter())
    }
}

impl Index<HandCategory> for CategoryStats {
    type Output = CategoryStat;

    fn index(&self, category: HandCategory) -> &CategoryStat {
        &self.stats[category.index()]
    }
}

impl IndexMut<HandCategory> for CategoryStats {
    fn index_mut(&mut self, category: HandCategory) -> &mut CategoryStat {
        &mut self.stats[category.index()]
    }
}

/// Serialized as a map from category name to `{count, percent}`.
#[cfg(feature = "serde")]
impl serde::Serialize for CategoryStats {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.stats.len()))?;
        for (category, stat) in self.iter() {
            map.serialize_entry(category.name(), stat)?;
        }
        map.end()
    }
}

/// The final numbers for one player.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    /// Iterations this player won outright.
    pub win_count: u64,
    pub win_percent: f64,
    /// Iterations this player split with at least one other player.
    pub tie_count: u64,
    pub tie_percent: f64,
    /// Outright wins by winning category, when requested.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hand_stats: Option<CategoryStats>,
    /// Ties by category, when requested.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tie_hand_stats: Option<CategoryStats>,
}

/// Raw counts for one seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SeatTally {
    wins: u64,
    ties: u64,
    win_categories: [u64; 9],
    tie_categories: [u64; 9],
}

/// Raw counters accumulated over some number of rounds.
///
/// Tallies over disjoint sets of rounds can be combined with `merge`, giving
/// the same result as a single tally over all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    iterations: u64,
    seats: Vec<SeatTally>,
}

impl Tally {
    /// An empty tally for `num_players` seats.
    pub fn new(num_players: usize) -> Self {
        Self {
            iterations: 0,
            seats: vec![SeatTally::default(); num_players],
        }
    }

    /// Number of rounds recorded.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Outright wins for `seat`.
    pub fn wins(&self, seat: usize) -> u64 {
        self.seats.get(seat).map_or(0, |s| s.wins)
    }

    /// Ties for `seat`.
    pub fn ties(&self, seat: usize) -> u64 {
        self.seats.get(seat).map_or(0, |s| s.ties)
    }

    /// Fold the winners of one round in. A lone winner gets a win; every
    /// member of a larger winner set gets a tie. Seats past the end grow the
    /// tally, the same way `merge` does.
    pub fn record(&mut self, winners: &[Player]) {
        self.iterations += 1;
        let is_tie = winners.len() > 1;
        for winner in winners {
            if winner.seat() >= self.seats.len() {
                self.seats.resize(winner.seat() + 1, SeatTally::default());
            }
            let seat = &mut self.seats[winner.seat()];
            let category = winner.best_hand().map(|b| b.category.index());
            if is_tie {
                seat.ties += 1;
                if let Some(idx) = category {
                    seat.tie_categories[idx] += 1;
                }
            } else {
                seat.wins += 1;
                if let Some(idx) = category {
                    seat.win_categories[idx] += 1;
                }
            }
        }
    }

    /// Add another tally's counts to this one.
    pub fn merge(&mut self, other: &Tally) {
        self.iterations += other.iterations;
        if self.seats.len() < other.seats.len() {
            self.seats.resize(other.seats.len(), SeatTally::default());
        }
        for (mine, theirs) in self.seats.iter_mut().zip(other.seats.iter()) {
            mine.wins += theirs.wins;
            mine.ties += theirs.ties;
            for (a, b) in mine.win_categories.iter_mut().zip(theirs.win_categories) {
                *a += b;
            }
            for (a, b) in mine.tie_categories.iter_mut().zip(theirs.tie_categories) {
                *a += b;
            }
        }
    }

    /// Turn the counts into percentages. `names` gives the identity for each
    /// seat in order.
    pub fn into_result(
        self,
        names: &[String],
        return_hand_stats: bool,
        return_tie_hand_stats: bool,
    ) -> SimulationResult {
        let iterations = self.iterations;
        let players = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let seat = self.seats.get(idx).cloned().unwrap_or_default();
                let stats = Stats {
                    win_count: seat.wins,
                    win_percent: percent(seat.wins, iterations),
                    tie_count: seat.ties,
                    tie_percent: percent(seat.ties, iterations),
                    hand_stats: return_hand_stats
                        .then(|| CategoryStats::from_counts(&seat.win_categories, iterations)),
                    tie_hand_stats: return_tie_hand_stats
                        .then(|| CategoryStats::from_counts(&seat.tie_categories, iterations)),
                };
                (name.clone(), stats)
            })
            .collect();
        SimulationResult {
            iterations,
            players,
        }
    }
}

/// Per player statistics, in seat order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    iterations: u64,
    players: Vec<(String, Stats)>,
}

impl SimulationResult {
    /// How many rounds were simulated.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Stats for the player with the given identity.
    pub fn get(&self, name: &str) -> Option<&Stats> {
        self.players
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, stats)| stats)
    }

    /// Every player and their stats, in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stats)> {
        self.players.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Render as a JSON object keyed by player identity.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SimulationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.players.len()))?;
        for (name, stats) in &self.players {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}
