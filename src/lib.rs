#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bombs;
mod circuit;
mod common;
mod config;
mod damage;
mod executor;
mod game;
mod layout;
mod outcome;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
mod simulator;
#[cfg(feature = "std")]
pub mod ui;

pub use bombs::*;
pub use circuit::*;
pub use common::*;
pub use config::*;
pub use damage::*;
pub use executor::*;
pub use game::*;
pub use layout::*;
pub use outcome::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level, LOG_ENV};
#[cfg(feature = "std")]
pub use session::run_match;
#[cfg(feature = "std")]
pub use simulator::StatevectorSimulator;
