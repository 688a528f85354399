//! The diagonal line the module summary icons sit on
//!
//! The home page paints a linear gradient at a fixed angle. Each icon gets a
//! top margin that places it on the gradient seam at its own horizontal
//! position, so a row of icons appears to ride the diagonal.

/// Angle of the diagonal gradient in degrees. Matches the stylesheet's
/// gradient and is not configurable at the alignment surface.
pub const GRADIENT_ANGLE_DEGREES: f64 = 25.0;

/// Baseline derived from the reference measurements of a single pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagonalBaseline {
    mid_width: f64,
    mid_height: f64,
    slope: f64,
}

impl DiagonalBaseline {
    /// Build a baseline from explicit midpoints and an angle in degrees.
    pub fn new(mid_width: f64, mid_height: f64, angle_degrees: f64) -> Self {
        Self {
            mid_width,
            mid_height,
            slope: angle_degrees.to_radians().tan(),
        }
    }

    /// Build the baseline from rendered reference measurements: the
    /// container width fixes the horizontal midpoint, the spacer height the
    /// vertical midpoint. The angle is [`GRADIENT_ANGLE_DEGREES`].
    pub fn from_reference(container_width: f64, spacer_height: f64) -> Self {
        Self::new(
            container_width / 2.0,
            spacer_height / 2.0,
            GRADIENT_ANGLE_DEGREES,
        )
    }

    /// Horizontal midpoint of the reference container.
    pub fn mid_width(&self) -> f64 {
        self.mid_width
    }

    /// Vertical midpoint of the reference spacer.
    pub fn mid_height(&self) -> f64 {
        self.mid_height
    }

    /// Top margin that places an icon at `offset_left` on the baseline:
    /// `mid_height - (offset_left - mid_width) * tan(angle)`.
    ///
    /// An icon at the midpoint gets exactly `mid_height`; the margin falls
    /// linearly as `offset_left` grows. Depends only on this icon's offset
    /// and the two reference midpoints.
    pub fn margin_top(&self, offset_left: f64) -> f64 {
        self.mid_height - (offset_left - self.mid_width) * self.slope
    }
}
