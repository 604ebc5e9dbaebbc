use super::*;
use crate::timeline::entry::EntryId;

fn entry(id: i64, start: f64, end: f64) -> SubtitleEntry {
    SubtitleEntry::new(id, start, end, format!("e{id}"))
}

#[test]
fn active_window_is_half_open() {
    let entries = vec![entry(1, 2.0, 4.0)];
    assert!(resolve_active(&entries, 2.0).is_some());
    assert!(resolve_active(&entries, 3.999).is_some());
    assert!(resolve_active(&entries, 4.0).is_none());
    assert!(resolve_active(&entries, 1.999).is_none());
}

#[test]
fn overlapping_entries_resolve_to_first_declared() {
    let entries = vec![entry(1, 0.0, 10.0), entry(2, 1.0, 2.0)];
    let hit = resolve_active(&entries, 1.5).unwrap();
    assert_eq!(hit.id, EntryId::Number(1));
}

#[test]
fn unsorted_input_is_honored_in_iteration_order() {
    let entries = vec![entry(3, 4.0, 6.0), entry(1, 0.0, 2.0)];
    assert_eq!(resolve_active(&entries, 1.0).unwrap().id, EntryId::Number(1));
    assert_eq!(resolve_active(&entries, 5.0).unwrap().id, EntryId::Number(3));
}

#[test]
fn zero_duration_entry_never_matches() {
    let entries = vec![entry(1, 3.0, 3.0)];
    assert!(resolve_active(&entries, 3.0).is_none());
}

#[test]
fn frame_resolution_uses_fps() {
    let entries = vec![entry(1, 2.0, 4.0)];
    let fps = Fps::new(30, 1).unwrap();
    assert!(resolve_active_at_frame(&entries, FrameIndex(59), fps).is_none());
    assert!(resolve_active_at_frame(&entries, FrameIndex(60), fps).is_some());
    assert!(resolve_active_at_frame(&entries, FrameIndex(120), fps).is_none());
}

#[test]
fn volume_threshold_is_inclusive() {
    let config = PresentationConfig::default();
    assert_eq!(config.loud_volume_percentile, 75.0);
    let loud = entry(1, 0.0, 1.0).with_volume(0.75);
    let quiet = entry(2, 0.0, 1.0).with_volume(0.74);
    assert_eq!(classify_style(&loud, &config), StyleVariant::Loud);
    assert_eq!(classify_style(&quiet, &config), StyleVariant::Normal);
}

#[test]
fn explicit_tag_overrides_volume() {
    let config = PresentationConfig::default();
    let e = entry(1, 0.0, 1.0)
        .with_volume(0.99)
        .with_style(StyleTag::Normal);
    assert_eq!(classify_style(&e, &config), StyleVariant::Normal);
    let e = entry(2, 0.0, 1.0).with_volume(0.1).with_style(StyleTag::Loud);
    assert_eq!(classify_style(&e, &config), StyleVariant::Loud);
}

#[test]
fn newsflash_tag_falls_back_to_volume_then_normal() {
    let config = PresentationConfig::default();
    let e = entry(1, 0.0, 1.0)
        .with_style(StyleTag::NewsFlash)
        .with_volume(0.9);
    assert_eq!(classify_style(&e, &config), StyleVariant::Loud);
    let e = entry(2, 0.0, 1.0).with_style(StyleTag::NewsFlash);
    assert_eq!(classify_style(&e, &config), StyleVariant::Normal);
    assert_eq!(
        classify_style(&entry(3, 0.0, 1.0), &config),
        StyleVariant::Normal
    );
}

#[test]
fn filter_by_time_keeps_overlaps_only() {
    let entries = vec![entry(1, 0.0, 2.0), entry(2, 2.0, 4.0), entry(3, 4.0, 6.0)];
    let hits = filter_by_time(&entries, 2.0, 4.0);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, EntryId::Number(2));
}

#[test]
fn sort_by_start_is_stable() {
    let entries = vec![entry(2, 5.0, 6.0), entry(1, 1.0, 2.0), entry(3, 1.0, 3.0)];
    let sorted = sort_by_start(&entries);
    let ids: Vec<_> = sorted.iter().map(|e| e.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "3", "2"]);
    assert_eq!(entries[0].id, EntryId::Number(2));
}
