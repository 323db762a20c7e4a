#![cfg(feature = "std")]
//! Interactive match driver tying the console to the round engine.

use std::io::{BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::{
    common::PlayerId,
    config::{GameConfig, NUM_PLAYERS},
    console::{Console, PlacementMode},
    damage::report_cells,
    executor::{Backend, Executor},
    game::{GameStatus, RoundEngine},
    layout::ShipLayout,
    ui,
};

/// Play one full match on `console` and return how it ended. Errors from
/// the executor or a closed input stream end the match.
pub fn run_match<R, W, E, G>(
    console: &mut Console<R, W>,
    executor: &mut E,
    rng: &mut G,
    config: GameConfig,
) -> anyhow::Result<GameStatus>
where
    R: BufRead,
    W: Write,
    E: Executor + ?Sized,
    G: Rng + ?Sized,
{
    console.say(&ui::banner())?;
    console.pause("> Press Enter to play...\n")?;

    let backend = if console.ask_device()? {
        Backend::device(&config.device)?
    } else {
        Backend::Simulator
    };
    backend.validate(&[], config.shots)?;
    info!("playing on {}", backend);

    let layouts = place_fleets(console, rng)?;
    let mut engine = RoundEngine::new(config, layouts);

    loop {
        console.pause("> Press Enter to place some bombs...\n")?;
        for player in PlayerId::ALL {
            let cell = console.ask_bomb(player)?;
            engine.bomb(player, cell);
        }

        let report = engine.resolve(executor, &backend)?;
        console.say(&ui::submission_message(&backend))?;
        for (player, outcome) in PlayerId::ALL.iter().zip(&report.outcomes) {
            debug!("{} outcomes: {}", player, outcome);
        }

        for player in PlayerId::ALL {
            console.pause(&format!(
                "\nPress Enter to see the results for {}'s ships...\n",
                player
            ))?;
            let cells = report_cells(
                engine.layout(player),
                &report.damage[player.index()],
                engine.config(),
            );
            console.say(&ui::render_damage_report(player, &cells))?;
            if report.destroyed[player.index()] {
                console.say(&ui::destroyed_message(player))?;
            }
        }

        if report.game_over() {
            console.say(&ui::game_over())?;
            let status = report.status();
            info!("match over after {} rounds: {:?}", report.round, status);
            return Ok(status);
        }
    }
}

/// Collect both fleets, either typed in or all at random.
fn place_fleets<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> anyhow::Result<[ShipLayout; NUM_PLAYERS]>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mode = console.ask_placement_mode()?;
    let mut layouts = Vec::with_capacity(NUM_PLAYERS);
    for player in PlayerId::ALL {
        let layout = match mode {
            PlacementMode::Random => ShipLayout::random(rng),
            PlacementMode::Manual => console.ask_ships(player)?,
        };
        debug!("{} ships placed", player);
        layouts.push(layout);
    }
    layouts
        .try_into()
        .map_err(|_| anyhow::anyhow!("Expected {} fleets", NUM_PLAYERS))
}
