use crate::foundation::core::{Affine, Rgb8, Vec2};

/// Animated state of one element at one frame. Computed on demand and never stored.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSample {
    /// Offset from the element's layout position, pixels.
    pub position: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation, degrees clockwise.
    pub rotation_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Fill color.
    pub color: Rgb8,
}

impl AnimationSample {
    /// Untransformed, fully opaque sample.
    pub fn at_rest(color: Rgb8) -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
            opacity: 1.0,
            color,
        }
    }

    /// Compose position, rotation and scale into an affine transform pivoting on `anchor`.
    pub fn to_affine(&self, anchor: Vec2) -> Affine {
        let t_translate = Affine::translate(self.position);
        let t_anchor = Affine::translate(anchor);
        let t_unanchor = Affine::translate(-anchor);
        let t_rotate = Affine::rotate(self.rotation_deg.to_radians());
        let t_scale = Affine::scale(self.scale);

        // T(position) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        t_translate * t_anchor * t_rotate * t_scale * t_unanchor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sample.rs"]
mod tests;
