use lexicon_core::config::DecayConfig;
use lexicon_core::IDecayModel;
use lexicon_decay::{formula, DecayEngine};

#[test]
fn zero_interval_is_identity() {
    let engine = DecayEngine::new();
    assert_eq!(engine.decay(0, 10, 7.5, 10), 7.5);
}

#[test]
fn older_weight_decays() {
    let engine = DecayEngine::new();
    let decayed = engine.decay(0, 10, 10.0, 5);
    assert!(decayed < 10.0);
    assert!((decayed - 10.0 * (-5.0f64 / 200.0).exp()).abs() < 1e-12);
}

#[test]
fn future_recording_tick_does_not_grow() {
    let engine = DecayEngine::new();
    assert_eq!(engine.decay(0, 3, 4.0, 9), 4.0);
}

#[test]
fn recording_before_interval_start_counts_from_start() {
    let engine = DecayEngine::new();
    assert_eq!(engine.decay(4, 10, 1.0, 1), engine.decay(0, 10, 1.0, 4));
}

#[test]
fn shorter_half_life_decays_faster() {
    let slow = DecayEngine::with_half_life(1000.0);
    let fast = DecayEngine::with_half_life(10.0);
    assert!(fast.decay(0, 20, 1.0, 0) < slow.decay(0, 20, 1.0, 0));
}

#[test]
fn invalid_half_life_falls_back_to_default() {
    assert_eq!(DecayEngine::with_half_life(0.0).half_life_ticks(), 200.0);
    assert_eq!(DecayEngine::with_half_life(f64::NAN).half_life_ticks(), 200.0);
    assert_eq!(DecayEngine::with_half_life(-5.0).half_life_ticks(), 200.0);
}

#[test]
fn engine_reads_config() {
    let config = DecayConfig { half_life_ticks: 50.0 };
    assert_eq!(DecayEngine::from_config(&config).half_life_ticks(), 50.0);
}

#[test]
fn elapsed_ticks_saturates() {
    assert_eq!(formula::elapsed_ticks(0, 5, 8), 0.0);
    assert_eq!(formula::elapsed_ticks(0, 8, 5), 3.0);
}
