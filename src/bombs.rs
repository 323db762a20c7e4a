//! Cumulative record of where each player has dropped bombs.

use crate::common::{Cell, PlayerId};
use crate::config::{GRID_SIZE, NUM_PLAYERS};

/// `counts[attacker][cell]` is how many times `attacker` has bombed `cell`
/// on the opponent's grid. Counts only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BombHistory {
    counts: [[u32; GRID_SIZE]; NUM_PLAYERS],
}

impl BombHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one bomb from `attacker` on `cell`.
    pub fn record(&mut self, attacker: PlayerId, cell: Cell) {
        let slot = &mut self.counts[attacker.index()][cell.index()];
        *slot = slot.saturating_add(1);
    }

    /// Bombs `attacker` has dropped on `cell`.
    pub fn count(&self, attacker: PlayerId, cell: Cell) -> u32 {
        self.counts[attacker.index()][cell.index()]
    }

    /// Bombs that have landed on `cell` of `defender`'s grid.
    pub fn hits_against(&self, defender: PlayerId, cell: Cell) -> u32 {
        self.count(defender.opponent(), cell)
    }

    /// Total bombs dropped by `attacker` so far.
    pub fn total(&self, attacker: PlayerId) -> u32 {
        self.counts[attacker.index()].iter().sum()
    }

    /// Per-cell counts for `attacker`.
    pub fn row(&self, attacker: PlayerId) -> &[u32; GRID_SIZE] {
        &self.counts[attacker.index()]
    }
}
