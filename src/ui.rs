#![cfg(feature = "std")]
//! Text rendering for the console game. Everything here returns a `String`
//! so the layout can be checked without a terminal.

use crate::{
    common::PlayerId,
    config::GRID_SIZE,
    damage::CellReport,
    executor::Backend,
};

const TITLE: &[&str] = &[
    r"   ___                   _                   ",
    r"  / _ \ _   _  __ _ _ __ | |_ _   _ _ __ ___  ",
    r" | | | | | | |/ _` | '_ \| __| | | | '_ ` _ \ ",
    r" | |_| | |_| | (_| | | | | |_| |_| | | | | | |",
    r"  \__\_\\__,_|\__,_|_| |_|\__|\__,_|_| |_| |_|",
    r"  ___       _   _   _           _     _            ",
    r" | _ ) __ _| |_| |_| |___ ___| |_  (_)_ __ ___ ",
    r" | _ \/ _` |  _|  _| / -_|_-<| ' \ | | '_ (_-< ",
    r" |___/\__,_|\__|\__|_\___/__/|_||_||_| .__/__/ ",
    r"                                     |_|       ",
];

/// Title screen shown before a match.
pub fn banner() -> String {
    let mut out = String::from("\n");
    for line in TITLE {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("\n    A game played on a quantum computer!\n\n");
    out.push_str("════════════════════════════════════════════════════════════\n");
    out.push_str("  Each player hides 3 ships on a grid of 5 positions.\n");
    out.push_str("  Every round both players drop one bomb on the other grid.\n");
    out.push_str("  Ship 1 sinks in one hit, ship 2 needs two, ship 3 three.\n");
    out.push_str("  Damage is estimated from quantum measurements, so small\n");
    out.push_str("  readings are hidden as noise.\n");
    out.push_str("════════════════════════════════════════════════════════════\n");
    out
}

/// The plus/diamond picture of a grid. Position 2 is the centre, 0 and 4
/// are the top corners, 1 and 3 the bottom corners.
pub fn render_grid(report: &[CellReport; GRID_SIZE]) -> String {
    let slot = |i: usize| format!("{:^4}", report[i]);
    let mut out = String::new();
    out.push_str(&format!("{}    {}\n", slot(4), slot(0)));
    out.push_str(" |\\     /|\n");
    out.push_str(" | \\   / |\n");
    out.push_str(" |  \\ /  |\n");
    out.push_str(&format!(" |  {} |\n", slot(2)));
    out.push_str(" |  / \\  |\n");
    out.push_str(" | /   \\ |\n");
    out.push_str(" |/     \\|\n");
    out.push_str(&format!("{}    {}\n", slot(3), slot(1)));
    out
}

/// Damage block for one player's grid.
pub fn render_damage_report(player: PlayerId, report: &[CellReport; GRID_SIZE]) -> String {
    let mut out = format!("\n{}'s grid\n", player);
    out.push_str("Here is the percentage damage for ships that have been bombed.\n\n");
    out.push_str(&render_grid(report));
    out.push_str("\nShips with more than 90% damage have been destroyed.\n");
    out
}

pub fn destroyed_message(player: PlayerId) -> String {
    format!("\n***All {}'s ships have been destroyed!***\n", player)
}

pub fn game_over() -> String {
    let rule = "=".repeat(37);
    format!("\n{rule}GAME OVER{rule}\n")
}

/// Message printed once both circuits have been handed to the backend.
pub fn submission_message(backend: &Backend) -> String {
    if backend.is_simulator() {
        "\nWe've now submitted the job to the simulator to see what happens to the ships of each player.\n"
            .to_string()
    } else {
        format!(
            "\nWe've now submitted the job to {} to see what happens to the ships of each player\n(it might take a while).\n",
            backend
        )
    }
}
