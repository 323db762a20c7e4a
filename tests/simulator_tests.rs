use std::f64::consts::PI;

use quantum_battleships::{
    Backend, Circuit, DamageVector, DeviceProfile, ExecutionError, Executor, StatevectorSimulator,
    Cell, MAX_SIMULATED_QUBITS,
};

fn single_rotation(theta: f64) -> Circuit {
    let mut circuit = Circuit::new("t", 5);
    circuit.u3(2, theta, 0.0, 0.0).measure_all();
    circuit
}

#[test]
fn full_rotation_flips_every_shot() {
    let mut sim = StatevectorSimulator::exact();
    let results = sim
        .execute(&[single_rotation(PI)], &Backend::Simulator, 1024)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].count("00100"), 1024);
    let damage = DamageVector::from_outcomes(&results[0], 1024);
    assert!((damage.get(Cell::new(2).unwrap()) - 1.0).abs() < 1e-12);
}

#[test]
fn third_rotation_gives_quarter_damage() {
    let mut sim = StatevectorSimulator::exact();
    let results = sim
        .execute(&[single_rotation(PI / 3.0)], &Backend::Simulator, 1024)
        .unwrap();
    assert_eq!(results[0].count("00100"), 256);
    assert_eq!(results[0].count("00000"), 768);
}

#[test]
fn exact_counts_always_sum_to_shots() {
    let mut sim = StatevectorSimulator::exact();
    let mut circuit = Circuit::new("mix", 3);
    circuit
        .u3(0, 0.7, 0.0, 0.0)
        .u3(1, 1.9, 0.3, 0.1)
        .u3(2, 2.2, 0.0, 0.0)
        .measure_all();
    for shots in [1, 7, 100, 1023, 4096] {
        let results = sim.execute(&[circuit.clone()], &Backend::Simulator, shots).unwrap();
        assert_eq!(results[0].shots(), u64::from(shots));
    }
}

#[test]
fn sampling_is_seeded_and_close_to_expectation() {
    let circuits = [single_rotation(PI / 2.0), single_rotation(PI / 3.0)];
    let a = StatevectorSimulator::seeded(7)
        .execute(&circuits, &Backend::Simulator, 4096)
        .unwrap();
    let b = StatevectorSimulator::seeded(7)
        .execute(&circuits, &Backend::Simulator, 4096)
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a[0].shots(), 4096);
    let c2 = Cell::new(2).unwrap();
    let half = DamageVector::from_outcomes(&a[0], 4096).get(c2);
    let quarter = DamageVector::from_outcomes(&a[1], 4096).get(c2);
    assert!((half - 0.5).abs() < 0.05, "half = {half}");
    assert!((quarter - 0.25).abs() < 0.05, "quarter = {quarter}");
}

#[test]
fn device_readout_error_leaks_into_untouched_bits() {
    let backend = Backend::device("ibmq_5_tenerife").unwrap();
    assert!(!backend.is_simulator());
    let mut circuit = Circuit::new("idle", 5);
    circuit.measure_all();
    let mut sim = StatevectorSimulator::exact();
    let results = sim.execute(&[circuit], &backend, 8192).unwrap();
    let damage = DamageVector::from_outcomes(&results[0], 8192);
    let e = backend.readout_error();
    for v in damage.values() {
        assert!((v - e).abs() < 5e-3);
        // Noise on an untouched cell stays below the reporting threshold.
        assert!(*v < 0.1);
    }
}

#[test]
fn readout_error_matches_channel() {
    let mut circuit = Circuit::new("one", 1);
    circuit.u3(0, PI, 0.0, 0.0).measure(0, 0);
    let probs = StatevectorSimulator::register_probabilities(&circuit, 0.1).unwrap();
    assert!((probs[0] - 0.1).abs() < 1e-12);
    assert!((probs[1] - 0.9).abs() < 1e-12);
}

#[test]
fn invalid_jobs_are_rejected() {
    let mut sim = StatevectorSimulator::exact();
    let circuit = single_rotation(PI);
    assert_eq!(
        sim.execute(&[circuit.clone()], &Backend::Simulator, 0),
        Err(ExecutionError::NoShots)
    );
    let device = Backend::device("ibmq_5_tenerife").unwrap();
    assert_eq!(
        sim.execute(&[circuit.clone()], &device, 10_000),
        Err(ExecutionError::TooManyShots {
            requested: 10_000,
            max: 8192
        })
    );
    let wide = Circuit::new("wide", 6);
    assert_eq!(
        sim.execute(&[wide], &device, 1024),
        Err(ExecutionError::TooManyQubits {
            requested: 6,
            available: 5
        })
    );
    assert_eq!(
        Backend::device("nowhere"),
        Err(ExecutionError::UnknownDevice("nowhere".to_string()))
    );
}

#[test]
fn malformed_circuits_are_rejected() {
    let mut sim = StatevectorSimulator::exact();
    let mut out_of_range = Circuit::new("bad", 2);
    out_of_range.u3(3, PI, 0.0, 0.0);
    assert!(matches!(
        sim.execute(&[out_of_range], &Backend::Simulator, 10),
        Err(ExecutionError::InvalidCircuit(_))
    ));

    let mut after_measure = Circuit::new("late", 1);
    after_measure.measure(0, 0).u3(0, PI, 0.0, 0.0);
    assert!(matches!(
        sim.execute(&[after_measure], &Backend::Simulator, 10),
        Err(ExecutionError::InvalidCircuit(_))
    ));
}

#[test]
fn oversized_registers_are_refused_before_allocating() {
    let wide = Circuit::new("wide", 40);
    assert_eq!(
        StatevectorSimulator::register_probabilities(&wide, 0.0),
        Err(ExecutionError::TooManyQubits {
            requested: 40,
            available: MAX_SIMULATED_QUBITS,
        })
    );

    let mut widest = Circuit::new("widest", MAX_SIMULATED_QUBITS);
    widest.measure(0, 0);
    let probs = StatevectorSimulator::register_probabilities(&widest, 0.0).unwrap();
    assert_eq!(probs.len(), 1 << MAX_SIMULATED_QUBITS);
    assert_eq!(probs[0], 1.0);
}

#[test]
fn known_device_profiles() {
    let profile = DeviceProfile::named("ibmq_5_tenerife").unwrap();
    assert_eq!(profile.num_qubits, 5);
    assert!(profile.readout_error > 0.0 && profile.readout_error < 0.1);
    assert!(DeviceProfile::named("unknown").is_none());
    assert_eq!(Backend::Simulator.to_string(), "qasm_simulator");
}
