//! The seam between alignment math and the document
//!
//! [`LayoutSource`] supplies the measurements a pass reads; [`StyleSink`]
//! receives the margins it writes. The engine is generic over both, so the
//! offset formula is testable without a rendering engine behind it.

use crate::error::AlignError;

/// Read side of an alignment pass: live layout measurements.
///
/// Reference metrics are read once per pass, up front. Icon offsets are read
/// one at a time inside the write loop, so a surface backed by a live
/// document reflects mid-pass changes the way the browser does.
pub trait LayoutSource {
    /// Rendered width of the reference container.
    ///
    /// Fails with [`AlignError::MissingElement`] when the container cannot
    /// be resolved in the current document.
    fn container_width(&self) -> Result<f64, AlignError>;

    /// Rendered height of the reference spacer.
    fn spacer_height(&self) -> Result<f64, AlignError>;

    /// Number of icon elements present right now.
    fn icon_count(&self) -> usize;

    /// Left offset of the icon at `index`, counted in document order.
    fn icon_offset(&self, index: usize) -> Result<f64, AlignError>;
}

/// Write side of an alignment pass: one top margin per icon.
pub trait StyleSink {
    /// Set the top margin of the icon at `index`, in pixels.
    fn set_top_margin(&mut self, index: usize, margin_px: f64) -> Result<(), AlignError>;
}
