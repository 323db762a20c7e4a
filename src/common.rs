//! Common types: player and cell identifiers, and input validation errors.

use core::fmt;

use crate::config::{GRID_SIZE, NUM_PLAYERS};

/// One of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlayerId(usize);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(0);
    pub const TWO: PlayerId = PlayerId(1);

    /// Both players, in turn order.
    pub const ALL: [PlayerId; NUM_PLAYERS] = [PlayerId::ONE, PlayerId::TWO];

    /// Player for a zero-based index. Returns `None` past the last player.
    pub fn new(index: usize) -> Option<Self> {
        (index < NUM_PLAYERS).then_some(PlayerId(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// The other player.
    pub fn opponent(self) -> Self {
        PlayerId((self.0 + 1) % NUM_PLAYERS)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A validated grid position in `0..GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Cell(pub(crate) usize);

impl Cell {
    /// Every cell of the grid in ascending order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).map(Cell)
    }

    pub fn new(index: usize) -> Result<Self, InputError> {
        if index < GRID_SIZE {
            Ok(Cell(index))
        } else {
            Err(InputError::OutOfRange)
        }
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a typed position is rejected. All but `FleetComplete` are
/// recoverable by asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Input is not a non-negative integer.
    NotANumber,
    /// Integer outside the grid.
    OutOfRange,
    /// The same player already has a ship on that cell.
    AlreadyOccupied,
    /// Every ship is already on the grid.
    FleetComplete,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber | InputError::OutOfRange => {
                write!(f, "That's not a valid position. Try again.")
            }
            InputError::AlreadyOccupied => write!(f, "You already have a ship there. Try again."),
            InputError::FleetComplete => write!(f, "All of your ships are already placed."),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Parse a typed position. Only plain decimal digits are accepted, so
/// signs, decimals and empty input are all `NotANumber`.
pub fn parse_cell(input: &str) -> Result<Cell, InputError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    // Digits only, so a parse failure means the value overflowed usize.
    let index: usize = input.parse().map_err(|_| InputError::OutOfRange)?;
    Cell::new(index)
}
