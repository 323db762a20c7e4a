use alloc::vec::Vec;

use log::{debug, info, log_enabled, Level};

use crate::{
    bombs::BombHistory,
    circuit::{build_player_circuit, Circuit},
    common::{Cell, PlayerId},
    config::{GameConfig, NUM_PLAYERS},
    damage::{all_destroyed, DamageVector},
    executor::{Backend, ExecutionError, Executor},
    layout::ShipLayout,
    outcome::OutcomeDistribution,
};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    /// Every ship of this player is destroyed.
    Destroyed(PlayerId),
    /// Both fleets went down in the same round.
    MutualDestruction,
}

impl GameStatus {
    fn from_flags(destroyed: [bool; NUM_PLAYERS]) -> Self {
        match destroyed {
            [true, true] => GameStatus::MutualDestruction,
            [true, false] => GameStatus::Destroyed(PlayerId::ONE),
            [false, true] => GameStatus::Destroyed(PlayerId::TWO),
            [false, false] => GameStatus::InProgress,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Everything one round produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    /// One-based round number.
    pub round: u32,
    pub outcomes: Vec<OutcomeDistribution>,
    pub damage: [DamageVector; NUM_PLAYERS],
    pub destroyed: [bool; NUM_PLAYERS],
}

impl RoundReport {
    /// True when either player lost their whole fleet this round.
    pub fn game_over(&self) -> bool {
        self.destroyed.iter().any(|&d| d)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_flags(self.destroyed)
    }
}

/// Round-based core of a match: owns both fleets, the bomb history and the
/// latest damage estimates. It is the only mutator of that state.
pub struct RoundEngine {
    config: GameConfig,
    layouts: [ShipLayout; NUM_PLAYERS],
    bombs: BombHistory,
    damage: [DamageVector; NUM_PLAYERS],
    round: u32,
}

impl RoundEngine {
    /// Start a match with both players' ships already placed.
    pub fn new(config: GameConfig, layouts: [ShipLayout; NUM_PLAYERS]) -> Self {
        Self {
            config,
            layouts,
            bombs: BombHistory::new(),
            damage: [DamageVector::default(); NUM_PLAYERS],
            round: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self, player: PlayerId) -> &ShipLayout {
        &self.layouts[player.index()]
    }

    pub fn bombs(&self) -> &BombHistory {
        &self.bombs
    }

    /// Damage from the most recent round; all zero before the first.
    pub fn damage(&self, player: PlayerId) -> &DamageVector {
        &self.damage[player.index()]
    }

    /// Rounds resolved so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Record a bomb from `attacker` on the opponent's `cell`.
    pub fn bomb(&mut self, attacker: PlayerId, cell: Cell) {
        debug!("{} bombs cell {}", attacker, cell);
        self.bombs.record(attacker, cell);
    }

    /// One circuit per player, rebuilt from the whole bomb history.
    pub fn circuits(&self) -> Vec<Circuit> {
        PlayerId::ALL
            .iter()
            .map(|&p| build_player_circuit(p, self.layout(p), &self.bombs))
            .collect()
    }

    /// Run both grids as a single job and recompute damage from scratch.
    pub fn resolve<E: Executor + ?Sized>(
        &mut self,
        executor: &mut E,
        backend: &Backend,
    ) -> Result<RoundReport, ExecutionError> {
        let circuits = self.circuits();
        if log_enabled!(Level::Debug) {
            for circuit in &circuits {
                debug!("{}:\n{}", circuit.name(), circuit.to_qasm());
            }
        }
        let outcomes = executor.execute(&circuits, backend, self.config.shots)?;
        if outcomes.len() != NUM_PLAYERS {
            return Err(ExecutionError::MissingResults {
                expected: NUM_PLAYERS,
                received: outcomes.len(),
            });
        }

        let shots = self.config.shots;
        let damage: [DamageVector; NUM_PLAYERS] =
            core::array::from_fn(|i| DamageVector::from_outcomes(&outcomes[i], shots));
        let threshold = self.config.destroyed_threshold;
        let destroyed: [bool; NUM_PLAYERS] =
            core::array::from_fn(|i| all_destroyed(&self.layouts[i], &damage[i], threshold));

        self.damage = damage;
        self.round += 1;
        info!(
            "round {} resolved on {}: destroyed={:?}",
            self.round, backend, destroyed
        );
        Ok(RoundReport {
            round: self.round,
            outcomes,
            damage,
            destroyed,
        })
    }

    /// Drop one bomb per player (player one first) and resolve the round.
    pub fn play_round<E: Executor + ?Sized>(
        &mut self,
        targets: [Cell; NUM_PLAYERS],
        executor: &mut E,
        backend: &Backend,
    ) -> Result<RoundReport, ExecutionError> {
        for (player, cell) in PlayerId::ALL.into_iter().zip(targets) {
            self.bomb(player, cell);
        }
        self.resolve(executor, backend)
    }

    /// Status after the latest resolved round.
    pub fn status(&self) -> GameStatus {
        let threshold = self.config.destroyed_threshold;
        GameStatus::from_flags(core::array::from_fn(|i| {
            all_destroyed(&self.layouts[i], &self.damage[i], threshold)
        }))
    }
}
