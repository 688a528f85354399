//! Alignment pass over a layout surface

mod engine;
mod surface;

pub use engine::{align, preview};
pub use surface::{LayoutSource, StyleSink};
