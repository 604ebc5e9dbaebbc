use super::*;
use crate::animation::bounce::BounceSpec;
use crate::foundation::core::Rgb8;
use crate::timeline::entry::{EntryId, StyleTag, StyleVariant};

fn keywords() -> Arc<KeywordIndex> {
    Arc::new(
        KeywordIndex::build([
            ("食べ物", vec!["ケーキ"]),
            ("感情", vec!["すごい"]),
        ])
        .unwrap(),
    )
}

fn evaluator(config: PresentationConfig) -> Evaluator {
    let entries = vec![
        SubtitleEntry::new(1, 1.0, 3.0, "このケーキすごい"),
        SubtitleEntry::new(2, 3.0, 5.0, "大声").with_style(StyleTag::Loud),
    ];
    Evaluator::new(entries, config, keywords()).unwrap()
}

#[test]
fn no_caption_outside_entries() {
    let ev = evaluator(PresentationConfig::default());
    let f = ev.eval_frame(FrameIndex(10));
    assert!(f.caption.is_none());
    assert!(f.news_flash.is_some());
}

#[test]
fn caption_segments_carry_colors_and_sizes() {
    let ev = evaluator(PresentationConfig::youtube());
    let f = ev.eval_frame(FrameIndex(45));
    let caption = f.caption.unwrap();
    assert_eq!(caption.entry, EntryId::Number(1));
    assert_eq!(caption.variant, StyleVariant::Normal);
    assert_eq!(caption.frame_in_entry, 15.0);
    assert_eq!(caption.background, None);
    assert_eq!(caption.text(), "このケーキすごい");

    let segs = &caption.lines[0].segments;
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0].color, Rgb8::new(255, 255, 255));
    assert_eq!(segs[1].color, Rgb8::new(255, 255, 0));
    assert_eq!(segs[2].color, Rgb8::new(255, 0, 0));
    assert!(segs.iter().all(|s| s.font_size == 100.0));
}

#[test]
fn highlighted_segments_keep_the_caption_font_size() {
    let ev = evaluator(PresentationConfig::default());
    let caption = ev.eval_frame(FrameIndex(45)).caption.unwrap();
    let segs: Vec<_> = caption.lines.iter().flat_map(|l| l.segments.iter()).collect();
    assert!(segs.iter().any(|s| s.segment.highlighted));
    assert!(segs.iter().any(|s| !s.segment.highlighted));
    assert!(segs.iter().all(|s| s.font_size == caption.font_size));
}

#[test]
fn glyph_indices_span_the_whole_caption() {
    let ev = evaluator(PresentationConfig::default());
    let caption = ev.eval_frame(FrameIndex(30)).caption.unwrap();
    let indices: Vec<usize> = caption
        .lines
        .iter()
        .flat_map(|l| l.segments.iter())
        .flat_map(|s| s.glyphs.iter().map(|g| g.index))
        .collect();
    assert_eq!(indices, (0..8).collect::<Vec<_>>());
}

#[test]
fn loud_entry_uses_loud_style_and_box() {
    let ev = evaluator(PresentationConfig::default());
    let caption = ev.eval_frame(FrameIndex(100)).caption.unwrap();
    assert_eq!(caption.variant, StyleVariant::Loud);
    assert_eq!(caption.font_size, 160.0);
    assert_eq!(caption.background.as_deref(), Some("#ffff0080"));
}

#[test]
fn static_captions_are_at_rest() {
    let ev = evaluator(PresentationConfig::default());
    let caption = ev.eval_frame(FrameIndex(30)).caption.unwrap();
    let glyph = &caption.lines[0].segments[0].glyphs[0];
    assert_eq!(glyph.sample.opacity, 1.0);
    assert_eq!(glyph.sample.scale, 1.0);
}

#[test]
fn bounce_staggers_characters() {
    let config = PresentationConfig {
        bounce: Some(BounceSpec::default()),
        ..PresentationConfig::default()
    };
    let ev = evaluator(config);
    // Two frames into entry 1: the first character has started, the third has not.
    let caption = ev.eval_frame(FrameIndex(32)).caption.unwrap();
    let glyphs: Vec<_> = caption.lines[0]
        .segments
        .iter()
        .flat_map(|s| s.glyphs.iter())
        .collect();
    assert!(glyphs[0].sample.opacity > 0.0);
    assert_eq!(glyphs[2].sample.opacity, 0.0);
}

#[test]
fn banner_slides_and_fades_from_frame_zero() {
    let ev = evaluator(PresentationConfig::default());
    let start = ev.eval_frame(FrameIndex(0)).news_flash.unwrap();
    assert_eq!(start.x, -500.0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.background, "#ff0000bf");
    let later = ev.eval_frame(FrameIndex(200)).news_flash.unwrap();
    assert!((later.x - 15.0).abs() < 0.5);
    assert_eq!(later.opacity, 1.0);
    assert_eq!(later.y, 15.0);
}

#[test]
fn banner_without_slide_sits_at_left_margin() {
    let config = PresentationConfig::default()
        .merged(serde_json::json!({
            "newsFlashStyle": { "animation": { "enableSlideIn": false } }
        }))
        .unwrap();
    let ev = evaluator(config);
    assert_eq!(ev.eval_frame(FrameIndex(3)).news_flash.unwrap().x, 15.0);
}

#[test]
fn hidden_banner_is_absent() {
    let ev = evaluator(PresentationConfig::youtube_clean());
    assert!(ev.eval_frame(FrameIndex(0)).news_flash.is_none());
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = PresentationConfig::default();
    config.highlight.max_chars_per_line = 0;
    let err = Evaluator::new(vec![], config, keywords()).unwrap_err();
    assert!(matches!(err, TelopError::Validation(_)));
}

#[test]
fn parallel_range_matches_sequential() {
    let ev = evaluator(PresentationConfig::default());
    let range = FrameRange::new(FrameIndex(0), FrameIndex(160)).unwrap();
    let seq = ev.eval_range(range);
    let par = ev.eval_range_parallel(range, Some(4)).unwrap();
    assert_eq!(seq, par);
    assert!(ev.eval_range_parallel(range, Some(0)).is_err());
}

#[test]
fn evaluator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Evaluator>();
}
