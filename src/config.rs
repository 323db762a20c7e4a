//! Fixed game dimensions and the tunable match configuration.

use alloc::string::String;

/// Number of cells in each player's grid.
pub const GRID_SIZE: usize = 5;
/// Ships owned by each player.
pub const SHIPS_PER_PLAYER: usize = 3;
pub const NUM_PLAYERS: usize = 2;
/// Shots submitted per circuit unless overridden.
pub const DEFAULT_SHOTS: u32 = 1024;
/// Damage above which a ship counts as destroyed.
pub const DESTROYED_THRESHOLD: f64 = 0.9;
/// Damage above which a ship's damage is reported at all. Below this the
/// reading is indistinguishable from device noise.
pub const REPORT_THRESHOLD: f64 = 0.1;
/// Hardware profile used when a player asks for the real device.
pub const DEFAULT_DEVICE: &str = "ibmq_5_tenerife";

/// Run-time parameters of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub shots: u32,
    pub destroyed_threshold: f64,
    pub report_threshold: f64,
    pub device: String,
}

impl GameConfig {
    /// Same configuration with a different shot count.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            destroyed_threshold: DESTROYED_THRESHOLD,
            report_threshold: REPORT_THRESHOLD,
            device: String::from(DEFAULT_DEVICE),
        }
    }
}
