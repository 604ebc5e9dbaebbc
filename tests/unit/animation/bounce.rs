use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

#[test]
fn default_spec_is_valid() {
    BounceSpec::default().validate().unwrap();
}

#[test]
fn first_frame_starts_small_low_and_transparent() {
    let s = BounceSpec::default().sample(0.0, fps30(), 0, WHITE);
    assert_eq!(s.position, Vec2::new(0.0, 20.0));
    assert_eq!(s.scale, 0.5);
    assert_eq!(s.rotation_deg, 0.0);
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.color, WHITE);
}

#[test]
fn settles_at_rest() {
    let s = BounceSpec::default().sample(600.0, fps30(), 2, WHITE);
    assert!(s.position.y.abs() < 1e-3);
    assert!((s.scale - 1.0).abs() < 1e-3);
    assert!(s.rotation_deg.abs() < 1e-3);
    assert_eq!(s.opacity, 1.0);
}

#[test]
fn later_characters_are_delayed_copies() {
    let spec = BounceSpec::default();
    let a = spec.sample(4.0, fps30(), 0, WHITE);
    let b = spec.sample(7.0, fps30(), 1, WHITE);
    assert_eq!(a, b);
    // Character 3 has not started at frame 5.
    let c = spec.sample(5.0, fps30(), 3, WHITE);
    assert_eq!(c.opacity, 0.0);
}

#[test]
fn rejects_unsorted_track() {
    let spec = BounceSpec {
        scale: Keyframes::from_pairs([(0.5, 1.0), (0.2, 2.0)]),
        ..BounceSpec::default()
    };
    assert!(spec.validate().is_err());
}

#[test]
fn deserializes_partial_override() {
    let spec: BounceSpec = serde_json::from_str(r#"{"staggerFrames": 5}"#).unwrap();
    assert_eq!(spec.stagger_frames, 5.0);
    assert_eq!(spec.spring, BounceSpec::default().spring);
}
