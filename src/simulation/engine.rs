use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::event;

use super::config::SimulationConfig;
use super::error::Result;
use super::round::{DealSpec, Round};
use super::stats::{SimulationResult, Tally};

/// Runs many independent rounds and turns the winners into equity numbers.
///
/// # Examples
///
/// ```
/// use poker_odds::simulation::{SimulationConfig, SimulationEngine};
///
/// let config = SimulationConfig {
///     iterations: 2_000,
///     seed: Some(42),
///     ..SimulationConfig::with_hands(["Ac,Ad", "7c,2d"])
/// };
/// let engine = SimulationEngine::new(config).unwrap();
/// let result = engine.simulate().unwrap();
///
/// let aces = result.get("Ac,Ad").unwrap();
/// assert!(aces.win_percent > 70.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: SimulationConfig,
    spec: DealSpec,
    names: Vec<String>,
}

impl SimulationEngine {
    /// Validate the configuration and prepare to simulate.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let spec = config.deal_spec()?;
        let names = spec.player_names();

        event!(
            tracing::Level::DEBUG,
            ?config,
            ?names,
            "Created simulation engine"
        );

        Ok(Self {
            config,
            spec,
            names,
        })
    }

    /// Get the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Player identities in seat order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Run the configured number of iterations.
    ///
    /// Uses the configured seed when there is one, otherwise a random seed.
    pub fn simulate(&self) -> Result<SimulationResult> {
        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);
        event!(tracing::Level::DEBUG, seed, "Seeded simulation rng");
        self.simulate_with_rng(&mut rng)
    }

    /// Run the configured number of iterations drawing randomness from
    /// `rng`.
    pub fn simulate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SimulationResult> {
        event!(
            tracing::Level::INFO,
            iterations = self.config.iterations,
            num_players = self.spec.num_players,
            num_decks = self.spec.num_decks,
            "Starting simulation"
        );

        let tally = self.run(self.config.iterations, rng)?;
        let result = tally.into_result(
            &self.names,
            self.config.return_hand_stats,
            self.config.return_tie_hand_stats,
        );

        event!(
            tracing::Level::INFO,
            iterations = result.iterations(),
            "Finished simulation"
        );

        Ok(result)
    }

    /// Play `iterations` rounds and return the raw counts.
    ///
    /// Tallies from separate calls can be merged, so the iterations of one
    /// simulation can be split into batches.
    pub fn run<R: Rng + ?Sized>(&self, iterations: usize, rng: &mut R) -> Result<Tally> {
        let mut tally = Tally::new(self.spec.num_players);
        for _ in 0..iterations {
            let round = Round::deal(&self.spec, rng)?;
            let winners = round.play(rng);
            tally.record(&winners);
        }
        Ok(tally)
    }
}
