//! The alignment pass itself

use smallvec::SmallVec;

use crate::error::AlignError;
use crate::geometry::DiagonalBaseline;
use crate::layout::{LayoutSource, StyleSink};

/// Re-align every icon against the diagonal baseline.
///
/// Reads the two reference measurements once, then walks the icons in
/// document order, reading each icon's left offset and writing its top
/// margin before moving on. Returns the number of icons written.
///
/// Zero icons is a successful no-op. A missing reference element fails the
/// pass before any margin is written. A failure partway through the icon
/// loop aborts the remaining icons; margins already written stay in place.
pub fn align<A>(surface: &mut A) -> Result<usize, AlignError>
where
    A: LayoutSource + StyleSink + ?Sized,
{
    let baseline =
        DiagonalBaseline::from_reference(surface.container_width()?, surface.spacer_height()?);

    let count = surface.icon_count();
    for index in 0..count {
        let offset = surface.icon_offset(index)?;
        surface.set_top_margin(index, baseline.margin_top(offset))?;
    }

    Ok(count)
}

/// Compute the margins a pass would write, without writing them.
///
/// Reference semantics match [`align`]: measurements are read fresh, nothing
/// is cached between calls.
pub fn preview<S>(source: &S) -> Result<Vec<f64>, AlignError>
where
    S: LayoutSource + ?Sized,
{
    let baseline =
        DiagonalBaseline::from_reference(source.container_width()?, source.spacer_height()?);

    let mut margins: SmallVec<[f64; 8]> = SmallVec::new();
    for index in 0..source.icon_count() {
        margins.push(baseline.margin_top(source.icon_offset(index)?));
    }

    Ok(margins.into_vec())
}
