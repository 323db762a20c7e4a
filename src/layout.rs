//! Ship placement: where each player's three ships sit on the grid.

use rand::Rng;

use crate::common::{Cell, InputError};
use crate::config::{GRID_SIZE, SHIPS_PER_PLAYER};

/// Fixed placement of one player's ships. Ship `i` sits on `cells()[i]`;
/// lower indices are more vulnerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipLayout {
    cells: [Cell; SHIPS_PER_PLAYER],
}

impl ShipLayout {
    /// Build a layout, rejecting any cell used by two ships.
    pub fn new(cells: [Cell; SHIPS_PER_PLAYER]) -> Result<Self, InputError> {
        for (i, a) in cells.iter().enumerate() {
            if cells[i + 1..].contains(a) {
                return Err(InputError::AlreadyOccupied);
            }
        }
        Ok(Self { cells })
    }

    /// Place all ships on distinct cells chosen uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let picks = rand::seq::index::sample(rng, GRID_SIZE, SHIPS_PER_PLAYER);
        // sample() only yields distinct indices below GRID_SIZE
        let cells = core::array::from_fn(|i| Cell(picks.index(i)));
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; SHIPS_PER_PLAYER] {
        &self.cells
    }

    /// Index of the ship occupying `cell`, if any.
    pub fn ship_at(&self, cell: Cell) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }

    /// Fraction of a full flip that one bomb inflicts on ship `ship`.
    pub fn strength(ship: usize) -> f64 {
        1.0 / (ship as f64 + 1.0)
    }
}

/// Incremental placement used by the interactive prompt. Rejected cells
/// leave the builder untouched.
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    placed: [Cell; SHIPS_PER_PLAYER],
    len: usize,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self {
            placed: [Cell(0); SHIPS_PER_PLAYER],
            len: 0,
        }
    }

    /// Number of ships placed so far.
    pub fn placed(&self) -> usize {
        self.len
    }

    pub fn is_complete(&self) -> bool {
        self.len == SHIPS_PER_PLAYER
    }

    /// Put the next ship on `cell`.
    pub fn try_place(&mut self, cell: Cell) -> Result<(), InputError> {
        if self.is_complete() {
            return Err(InputError::FleetComplete);
        }
        if self.placed[..self.len].contains(&cell) {
            return Err(InputError::AlreadyOccupied);
        }
        self.placed[self.len] = cell;
        self.len += 1;
        Ok(())
    }

    /// The finished layout, once every ship has a cell.
    pub fn finish(&self) -> Option<ShipLayout> {
        self.is_complete().then(|| ShipLayout { cells: self.placed })
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}
