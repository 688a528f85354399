//! Gradient baseline geometry

mod baseline;

pub use baseline::{DiagonalBaseline, GRADIENT_ANGLE_DEGREES};
