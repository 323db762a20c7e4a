#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use quantum_battleships::{
    init_logging, run_match, Console, GameConfig, StatevectorSimulator, DEFAULT_DEVICE,
    DEFAULT_SHOTS,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-player battleships on a quantum grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_SHOTS, help = "Shots per circuit each round")]
    shots: u32,
    #[arg(long, default_value = DEFAULT_DEVICE, help = "Device profile used when playing on the real device")]
    device: String,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut executor = if let Some(s) = cli.seed {
        StatevectorSimulator::seeded(s.wrapping_add(1))
    } else {
        StatevectorSimulator::new(SmallRng::from_rng(&mut rand::rng()))
    };

    let config = GameConfig {
        device: cli.device,
        ..GameConfig::default()
    }
    .with_shots(cli.shots);

    let mut console = Console::stdio();
    run_match(&mut console, &mut executor, &mut rng, config)?;
    Ok(())
}
