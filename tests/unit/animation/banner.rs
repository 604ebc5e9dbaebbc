use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn default_is_valid() {
    NewsFlashAnimation::default().validate().unwrap();
}

#[test]
fn slide_starts_off_screen_and_settles_on_target() {
    let anim = NewsFlashAnimation::default();
    assert_eq!(anim.slide_x(0.0, fps30()), Some(-500.0));
    let settled = anim.slide_x(120.0, fps30()).unwrap();
    assert!((settled - 15.0).abs() < 0.5, "settled at {settled}");
}

#[test]
fn slide_holds_before_start_frame() {
    let anim = NewsFlashAnimation {
        slide_in_start_frame: 10.0,
        slide_in_end_frame: 28.0,
        ..NewsFlashAnimation::default()
    };
    assert_eq!(anim.slide_x(3.0, fps30()), Some(-500.0));
    assert_eq!(anim.slide_x(10.0, fps30()), Some(-500.0));
    assert!(anim.slide_x(14.0, fps30()).unwrap() > -500.0);
}

#[test]
fn slide_is_monotonic_for_overdamped_spring() {
    let anim = NewsFlashAnimation::default();
    let xs: Vec<f64> = (0..40)
        .map(|f| anim.slide_x(f as f64, fps30()).unwrap())
        .collect();
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn slide_follows_natural_spring_by_default() {
    let anim = NewsFlashAnimation::default();
    for f in [3.0, 9.0, 18.0] {
        let p = spring(f, fps30(), &anim.spring);
        let expected = -500.0 + 515.0 * p;
        let x = anim.slide_x(f, fps30()).unwrap();
        assert!((x - expected).abs() < 1e-9, "frame {f}: {x} vs {expected}");
    }
}

#[test]
fn stretched_slide_settles_at_end_frame() {
    let natural = NewsFlashAnimation {
        slide_in_end_frame: 12.0,
        ..NewsFlashAnimation::default()
    };
    let stretched = NewsFlashAnimation {
        stretch_slide_to_end_frame: true,
        ..natural.clone()
    };
    let at_end = stretched.slide_x(12.0, fps30()).unwrap();
    assert!((at_end - 15.0).abs() <= 515.0 * 0.005 + 1e-9, "at end {at_end}");
    assert!(at_end > natural.slide_x(12.0, fps30()).unwrap());
}

#[test]
fn stretch_flag_defaults_off_when_deserializing() {
    let anim: NewsFlashAnimation = serde_json::from_str(
        r#"{
            "enableSlideIn": true,
            "slideInFromX": -500,
            "slideInToX": 15,
            "slideInStartFrame": 0,
            "slideInEndFrame": 18,
            "enableColorPulse": false,
            "pulseColors": [],
            "pulseFramesPerColor": 21,
            "fadeInDuration": 300
        }"#,
    )
    .unwrap();
    assert!(!anim.stretch_slide_to_end_frame);

    let anim: NewsFlashAnimation = serde_json::from_str(
        r#"{
            "enableSlideIn": true,
            "slideInFromX": -500,
            "slideInToX": 15,
            "slideInStartFrame": 0,
            "slideInEndFrame": 18,
            "stretchSlideToEndFrame": true,
            "enableColorPulse": false,
            "pulseColors": [],
            "pulseFramesPerColor": 21,
            "fadeInDuration": 300
        }"#,
    )
    .unwrap();
    assert!(anim.stretch_slide_to_end_frame);
}

#[test]
fn disabled_slide_yields_none() {
    let anim = NewsFlashAnimation {
        enable_slide_in: false,
        ..NewsFlashAnimation::default()
    };
    assert_eq!(anim.slide_x(5.0, fps30()), None);
}

#[test]
fn fade_uses_millis() {
    let anim = NewsFlashAnimation::default();
    assert_eq!(anim.opacity(0.0, fps30()), 0.0);
    assert_eq!(anim.opacity(9.0, fps30()), 1.0);
}

#[test]
fn pulse_follows_palette_and_switch() {
    let anim = NewsFlashAnimation::default();
    assert_eq!(anim.pulse(0), Some(Rgb8::new(255, 0, 0)));
    assert_eq!(anim.pulse(21), Some(Rgb8::new(255, 165, 0)));
    assert_eq!(anim.pulse(63), anim.pulse(0));

    let off = NewsFlashAnimation {
        enable_color_pulse: false,
        ..NewsFlashAnimation::default()
    };
    assert_eq!(off.pulse(5), None);
}

#[test]
fn enabled_pulse_requires_period_and_palette() {
    let zero = NewsFlashAnimation {
        pulse_frames_per_color: 0,
        ..NewsFlashAnimation::default()
    };
    assert!(zero.validate().is_err());
    let empty = NewsFlashAnimation {
        pulse_colors: vec![],
        ..NewsFlashAnimation::default()
    };
    assert!(empty.validate().is_err());
    let disabled = NewsFlashAnimation {
        enable_color_pulse: false,
        pulse_frames_per_color: 0,
        ..NewsFlashAnimation::default()
    };
    disabled.validate().unwrap();
}

#[test]
fn deserializes_original_field_names() {
    let json = r##"{
        "enableSlideIn": true,
        "slideInFromX": -400,
        "slideInToX": 20,
        "slideInStartFrame": 0,
        "slideInEndFrame": 15,
        "enableColorPulse": false,
        "pulseColors": ["#E60012"],
        "pulseFramesPerColor": 30,
        "fadeInDuration": 200
    }"##;
    let anim: NewsFlashAnimation = serde_json::from_str(json).unwrap();
    assert_eq!(anim.fade_in_duration_ms, 200.0);
    assert_eq!(anim.spring, SpringConfig::new(200.0, 100.0));
    assert_eq!(anim.pulse_colors, vec![Rgb8::new(0xe6, 0x00, 0x12)]);
}
