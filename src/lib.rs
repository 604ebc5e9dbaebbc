//! Telop is a deterministic caption ("telop") timeline and presentation engine.
//!
//! Given a timeline of speech-derived subtitle entries and a frame number, it decides what text
//! is visible, how it is segmented and colored, and which animated transform and color values
//! apply at that instant. Every frame is derived from `(frame, config, data)` alone:
//!
//! - Load entries with [`load`] and prepare them once with [`timeline::split`] and
//!   [`timeline::adjust`]
//! - Build a [`KeywordIndex`] and an [`Evaluator`]
//! - Evaluate single frames or ranges, in any order, into [`FramePresentation`] values
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod config;
pub mod eval;
pub mod load;
pub mod present;
pub mod text;
pub mod timeline;

pub use crate::foundation::core::{Affine, Fps, FrameIndex, FrameRange, Rgb8, Vec2};
pub use crate::foundation::error::{TelopError, TelopResult};

pub use crate::animation::sample::AnimationSample;
pub use crate::animation::spring::SpringConfig;
pub use crate::config::PresentationConfig;
pub use crate::eval::Evaluator;
pub use crate::present::{CaptionPresentation, FramePresentation, NewsFlashPresentation};
pub use crate::text::keywords::KeywordIndex;
pub use crate::text::segment::TextSegment;
pub use crate::timeline::entry::{EntryId, StyleTag, StyleVariant, SubtitleEntry};
