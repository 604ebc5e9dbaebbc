//! Keyword segmentation and line wrapping of caption text.

pub mod keywords;
pub mod segment;
pub mod wrap;
