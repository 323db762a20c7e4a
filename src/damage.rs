//! Turning outcome histograms into per-cell damage, and damage into the
//! values shown to players.

use core::fmt;

use crate::common::Cell;
use crate::config::{GameConfig, GRID_SIZE};
use crate::layout::ShipLayout;
use crate::outcome::OutcomeDistribution;

/// Estimated probability that each cell of one grid reads as hit. Always
/// recomputed from the latest outcomes, never accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct DamageVector {
    values: [f64; GRID_SIZE],
}

impl DamageVector {
    pub fn new(values: [f64; GRID_SIZE]) -> Self {
        Self { values }
    }

    /// Sum `count / shots` over every outcome with the cell's bit set.
    pub fn from_outcomes(dist: &OutcomeDistribution, shots: u32) -> Self {
        let shots = u64::from(shots);
        let values = core::array::from_fn(|pos| dist.bit_probability(pos, shots).clamp(0.0, 1.0));
        Self { values }
    }

    pub fn get(&self, cell: Cell) -> f64 {
        self.values[cell.index()]
    }

    pub fn values(&self) -> &[f64; GRID_SIZE] {
        &self.values
    }
}

/// What a player is shown for one cell of their grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellReport {
    /// No ship, or too little damage to tell apart from noise.
    Unknown,
    /// Damage as a whole percentage.
    Damaged(u8),
}

impl fmt::Display for CellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellReport::Unknown => f.pad("?"),
            CellReport::Damaged(pct) => f.pad(&alloc::format!("{pct}%")),
        }
    }
}

/// Classify a single damage reading.
pub fn classify(damage: f64, config: &GameConfig) -> CellReport {
    if damage > config.destroyed_threshold {
        CellReport::Damaged(100)
    } else if damage > config.report_threshold {
        CellReport::Damaged(libm::round(damage * 100.0) as u8)
    } else {
        CellReport::Unknown
    }
}

/// Display values for a player's grid. Only cells holding one of their
/// ships can show damage.
pub fn report_cells(layout: &ShipLayout, damage: &DamageVector, config: &GameConfig) -> [CellReport; GRID_SIZE] {
    let mut report = [CellReport::Unknown; GRID_SIZE];
    for &cell in layout.cells() {
        report[cell.index()] = classify(damage.get(cell), config);
    }
    report
}

/// Whether every ship of `layout` is past `threshold`.
pub fn all_destroyed(layout: &ShipLayout, damage: &DamageVector, threshold: f64) -> bool {
    layout.cells().iter().all(|&cell| damage.get(cell) > threshold)
}
