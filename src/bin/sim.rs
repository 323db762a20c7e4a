//! Headless random-vs-random match on the local simulator, printed as JSON.

use quantum_battleships::{
    Backend, Cell, GameConfig, GameStatus, PlayerId, RoundEngine, ShipLayout,
    StatevectorSimulator, GRID_SIZE,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

const MAX_ROUNDS: u32 = 200;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let mut executor = StatevectorSimulator::seeded(seed1 ^ seed2.rotate_left(32));

    let layouts = [ShipLayout::random(&mut rng1), ShipLayout::random(&mut rng2)];
    let mut engine = RoundEngine::new(GameConfig::default(), layouts);
    let backend = Backend::Simulator;

    let mut status = GameStatus::InProgress;
    while engine.round() < MAX_ROUNDS && !status.is_over() {
        let targets = [random_cell(&mut rng1)?, random_cell(&mut rng2)?];
        let report = engine.play_round(targets, &mut executor, &backend)?;
        status = report.status();
    }

    let destroyed = PlayerId::ALL.map(|p| {
        status == GameStatus::MutualDestruction || status == GameStatus::Destroyed(p)
    });
    let bombs = PlayerId::ALL.map(|p| engine.bombs().row(p).to_vec());
    let result = json!({
        "rounds": engine.round(),
        "status": status,
        "destroyed": destroyed,
        "bombs": bombs,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn random_cell(rng: &mut SmallRng) -> anyhow::Result<Cell> {
    Cell::new(rng.random_range(0..GRID_SIZE)).map_err(|e| anyhow::anyhow!(e))
}
