use crate::animation::interp::Lerp;
use crate::foundation::core::Rgb8;

/// Cyclic palette blend at `frame`.
///
/// The cycle is `palette.len() * frames_per_color` frames long and exactly periodic. Within a
/// slot the active color blends linearly toward the next one (wrapping to the first), reaching
/// it at the start of the next slot. `None` for an empty palette or a zero slot length.
pub fn pulse_color(palette: &[Rgb8], frames_per_color: u64, frame: u64) -> Option<Rgb8> {
    if palette.is_empty() || frames_per_color == 0 {
        return None;
    }
    let cycle = palette.len() as u64 * frames_per_color;
    let cycle_frame = frame % cycle;
    let index = (cycle_frame / frames_per_color) as usize;
    let next = (index + 1) % palette.len();
    let t = (cycle_frame % frames_per_color) as f64 / frames_per_color as f64;
    Some(Rgb8::lerp(&palette[index], &palette[next], t))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pulse.rs"]
mod tests;
