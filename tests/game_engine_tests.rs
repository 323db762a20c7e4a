use quantum_battleships::{
    Backend, Cell, CellReport, Circuit, ExecutionError, Executor, GameConfig, GameStatus,
    OutcomeDistribution, PlayerId, RoundEngine, ShipLayout, StatevectorSimulator, classify,
};

fn cell(i: usize) -> Cell {
    Cell::new(i).unwrap()
}

fn layout(a: usize, b: usize, c: usize) -> ShipLayout {
    ShipLayout::new([cell(a), cell(b), cell(c)]).unwrap()
}

/// Returns canned histograms and remembers what it was asked to run.
struct FixedExecutor {
    results: Vec<OutcomeDistribution>,
    submitted: Vec<Vec<Circuit>>,
}

impl Executor for FixedExecutor {
    fn execute(
        &mut self,
        circuits: &[Circuit],
        _backend: &Backend,
        _shots: u32,
    ) -> Result<Vec<OutcomeDistribution>, ExecutionError> {
        self.submitted.push(circuits.to_vec());
        Ok(self.results.clone())
    }
}

#[test]
fn hit_on_strongest_ship_reads_full_damage() {
    let mut engine = RoundEngine::new(GameConfig::default(), [layout(0, 1, 2), layout(3, 4, 0)]);
    let mut sim = StatevectorSimulator::exact();
    // Player one hits player two's ship 0 on cell 3; player two misses.
    let report = engine
        .play_round([cell(3), cell(4)], &mut sim, &Backend::Simulator)
        .unwrap();
    assert_eq!(report.round, 1);
    let d = report.damage[PlayerId::TWO.index()].get(cell(3));
    assert!((d - 1.0).abs() < 1e-9);
    assert_eq!(classify(d, engine.config()), CellReport::Damaged(100));
    assert!(report.damage[PlayerId::ONE.index()].values().iter().all(|&v| v == 0.0));
    assert!(!report.game_over());
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn hit_on_weakest_ship_reads_quarter_damage() {
    let mut engine = RoundEngine::new(GameConfig::default(), [layout(0, 1, 2), layout(0, 1, 2)]);
    let mut sim = StatevectorSimulator::exact();
    let report = engine
        .play_round([cell(2), cell(4)], &mut sim, &Backend::Simulator)
        .unwrap();
    let d = report.damage[PlayerId::TWO.index()].get(cell(2));
    assert!((d - 0.25).abs() < 1e-9);
    assert_eq!(classify(d, engine.config()), CellReport::Damaged(25));
}

#[test]
fn over_bombing_a_weak_ship_is_not_saturating() {
    let mut engine = RoundEngine::new(GameConfig::default(), [layout(0, 1, 2), layout(0, 1, 2)]);
    let mut sim = StatevectorSimulator::exact();
    let mut last = None;
    for _ in 0..4 {
        last = Some(
            engine
                .play_round([cell(2), cell(4)], &mut sim, &Backend::Simulator)
                .unwrap(),
        );
    }
    // Four thirds of a flip lands at sin^2(2pi/3) = 0.75.
    let d = last.unwrap().damage[PlayerId::TWO.index()].get(cell(2));
    assert!((d - 0.75).abs() < 1e-9);
}

#[test]
fn sinking_a_fleet_ends_the_match() {
    let mut engine = RoundEngine::new(GameConfig::default(), [layout(0, 1, 2), layout(0, 1, 2)]);
    let mut sim = StatevectorSimulator::exact();
    let plan = [0, 1, 1, 2, 2, 2];
    for (i, &target) in plan.iter().enumerate() {
        let report = engine
            .play_round([cell(target), cell(4)], &mut sim, &Backend::Simulator)
            .unwrap();
        let last = i == plan.len() - 1;
        assert_eq!(report.game_over(), last, "round {}", report.round);
        if last {
            assert_eq!(report.destroyed, [false, true]);
            assert_eq!(report.status(), GameStatus::Destroyed(PlayerId::TWO));
        }
    }
    assert_eq!(engine.round(), 6);
    assert_eq!(engine.status(), GameStatus::Destroyed(PlayerId::TWO));
    assert_eq!(engine.bombs().total(PlayerId::ONE), 6);
    assert_eq!(engine.bombs().count(PlayerId::TWO, cell(4)), 6);
}

#[test]
fn both_fleets_sinking_together_is_mutual() {
    let mut engine = RoundEngine::new(GameConfig::default(), [layout(0, 1, 2), layout(2, 3, 4)]);
    let mut sim = StatevectorSimulator::exact();
    let p1 = [2, 3, 3, 4, 4, 4];
    let p2 = [0, 1, 1, 2, 2, 2];
    let mut report = None;
    for (a, b) in p1.into_iter().zip(p2) {
        report = Some(
            engine
                .play_round([cell(a), cell(b)], &mut sim, &Backend::Simulator)
                .unwrap(),
        );
    }
    let report = report.unwrap();
    assert_eq!(report.destroyed, [true, true]);
    assert!(report.game_over());
    assert_eq!(report.status(), GameStatus::MutualDestruction);
}

#[test]
fn damage_is_recomputed_not_accumulated() {
    let high = OutcomeDistribution::from_counts([("00111", 1024u64)]);
    let low = OutcomeDistribution::from_counts([("00000", 1024u64)]);
    let mut exec = FixedExecutor {
        results: vec![low.clone(), high],
        submitted: Vec::new(),
    };
    let mut engine = RoundEngine::new(GameConfig::default(), [layout(0, 1, 2), layout(0, 1, 2)]);
    let first = engine
        .play_round([cell(0), cell(0)], &mut exec, &Backend::Simulator)
        .unwrap();
    assert_eq!(first.destroyed, [false, true]);

    exec.results = vec![low.clone(), low];
    let second = engine
        .play_round([cell(0), cell(0)], &mut exec, &Backend::Simulator)
        .unwrap();
    assert_eq!(second.destroyed, [false, false]);
    assert!(engine.damage(PlayerId::TWO).values().iter().all(|&v| v == 0.0));

    // Both grids go out in a single job every round, rebuilt from all bombs.
    assert_eq!(exec.submitted.len(), 2);
    assert_eq!(exec.submitted[0].len(), 2);
    assert_eq!(exec.submitted[1][1].gates().len(), 5 + 2);
}

#[test]
fn short_answer_from_executor_is_an_error() {
    let mut exec = FixedExecutor {
        results: vec![OutcomeDistribution::from_counts([("00000", 1024u64)])],
        submitted: Vec::new(),
    };
    let mut engine = RoundEngine::new(GameConfig::default(), [layout(0, 1, 2), layout(0, 1, 2)]);
    let err = engine
        .play_round([cell(0), cell(0)], &mut exec, &Backend::Simulator)
        .unwrap_err();
    assert_eq!(
        err,
        ExecutionError::MissingResults {
            expected: 2,
            received: 1
        }
    );
    // The bombs are still on record.
    assert_eq!(engine.bombs().total(PlayerId::ONE), 1);
    assert_eq!(engine.round(), 0);
}

#[test]
fn executor_errors_propagate() {
    let config = GameConfig::default().with_shots(0);
    let mut engine = RoundEngine::new(config, [layout(0, 1, 2), layout(0, 1, 2)]);
    let mut sim = StatevectorSimulator::exact();
    let err = engine
        .play_round([cell(0), cell(0)], &mut sim, &Backend::Simulator)
        .unwrap_err();
    assert_eq!(err, ExecutionError::NoShots);
}
