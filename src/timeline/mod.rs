//! Subtitle entries and the pure transformations applied to them once per load.

pub mod adjust;
pub mod entry;
pub mod resolve;
pub mod split;
