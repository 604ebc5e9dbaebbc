use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn starts_at_rest_and_converges_to_one() {
    let cfg = SpringConfig::new(10.0, 100.0);
    assert_eq!(spring(0.0, fps30(), &cfg), 0.0);
    assert_eq!(spring(-12.0, fps30(), &cfg), 0.0);
    assert!((spring(300.0, fps30(), &cfg) - 1.0).abs() < 1e-6);
}

#[test]
fn underdamped_spring_overshoots() {
    let cfg = SpringConfig::new(10.0, 300.0).with_mass(0.3);
    assert!(cfg.damping_ratio() < 1.0);
    let peak = (0..60)
        .map(|f| spring(f as f64, fps30(), &cfg))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05, "peak {peak}");
}

#[test]
fn overshoot_clamping_caps_progress() {
    let cfg = SpringConfig {
        overshoot_clamping: true,
        ..SpringConfig::new(10.0, 300.0).with_mass(0.3)
    };
    assert!((0..60).all(|f| spring(f as f64, fps30(), &cfg) <= 1.0));
}

#[test]
fn heavily_damped_spring_is_monotonic() {
    let cfg = SpringConfig::new(200.0, 100.0);
    assert!(cfg.damping_ratio() >= 1.0);
    let values: Vec<f64> = (0..90).map(|f| spring(f as f64, fps30(), &cfg)).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert!(values.iter().all(|v| *v <= 1.0));
}

#[test]
fn sampling_is_order_independent() {
    let cfg = SpringConfig::new(10.0, 300.0).with_mass(0.3);
    let first = spring(47.0, fps30(), &cfg);
    for f in [10.0, 47.0, 30.0] {
        let _ = spring(f, fps30(), &cfg);
    }
    assert_eq!(spring(47.0, fps30(), &cfg).to_bits(), first.to_bits());
}

#[test]
fn measure_finds_settle_frame() {
    let cfg = SpringConfig::new(200.0, 100.0);
    assert_eq!(cfg.measure(fps30(), SETTLE_THRESHOLD), 23);
}

#[test]
fn stretched_spring_settles_at_requested_duration() {
    let cfg = SpringConfig::new(200.0, 100.0);
    let at_end = spring_stretched(18.0, fps30(), &cfg, 18.0);
    assert_eq!(at_end, spring(23.0, fps30(), &cfg));
    assert!(at_end > 1.0 - SETTLE_THRESHOLD);
    assert_eq!(
        spring_stretched(5.0, fps30(), &cfg, 0.0),
        spring(5.0, fps30(), &cfg)
    );
}

#[test]
fn validate_rejects_non_physical_parameters() {
    assert!(SpringConfig::new(10.0, 100.0).validate().is_ok());
    assert!(SpringConfig::new(10.0, 0.0).validate().is_err());
    assert!(SpringConfig::new(-1.0, 100.0).validate().is_err());
    assert!(SpringConfig::new(0.0, 100.0).validate().is_err());
    assert!(SpringConfig::new(10.0, 100.0).with_mass(0.0).validate().is_err());
}

#[test]
fn stagger_delays_each_character() {
    assert_eq!(stagger_frame(10.0, 0, 3.0), 10.0);
    assert_eq!(stagger_frame(10.0, 2, 3.0), 4.0);
    assert_eq!(stagger_frame(5.0, 2, 3.0), 0.0);
}

#[test]
fn spring_config_deserializes_with_default_mass() {
    let cfg: SpringConfig = serde_json::from_str(r#"{"damping":20,"stiffness":100}"#).unwrap();
    assert_eq!(cfg.mass, 1.0);
    assert!(!cfg.overshoot_clamping);
}
