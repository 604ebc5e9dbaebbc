use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn ramps_linearly_over_duration() {
    // 300ms at 30fps is 9 frames.
    assert_eq!(fade_in_opacity(0.0, fps30(), 300.0), 0.0);
    assert!((fade_in_opacity(4.5, fps30(), 300.0) - 0.5).abs() < 1e-12);
    assert_eq!(fade_in_opacity(9.0, fps30(), 300.0), 1.0);
}

#[test]
fn clamped_outside_ramp() {
    assert_eq!(fade_in_opacity(-3.0, fps30(), 300.0), 0.0);
    assert_eq!(fade_in_opacity(500.0, fps30(), 300.0), 1.0);
}

#[test]
fn zero_duration_is_opaque() {
    assert_eq!(fade_in_opacity(0.0, fps30(), 0.0), 1.0);
    assert_eq!(fade_in_opacity(12.0, fps30(), 0.0), 1.0);
}
