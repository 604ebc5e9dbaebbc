//! Pure, seek-safe animation functions of `(frame, fps, parameters)`.
//!
//! Nothing here keeps state between calls: the same arguments always produce bit-identical
//! results, whatever order frames are requested in.

pub mod banner;
pub mod bounce;
pub mod fade;
pub mod interp;
pub mod pulse;
pub mod sample;
pub mod spring;
