//! Slant-align: keeps module summary icons on the page's diagonal gradient
//!
//! The home page draws a 25-degree gradient across its module summary block;
//! this crate computes the top margin that places each summary icon on that
//! slope and reapplies it when the window loads or resizes:
//! - Pure baseline geometry, testable off-browser
//! - An alignment engine over narrow read/write traits
//! - web-sys adapters for the live document and window events
//! - wasm-bindgen bindings for page scripts

pub mod dom;
pub mod error;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::{align_module_summaries, GeometrySnapshot, SummaryAligner};

// Re-export primary types
pub use dom::{DomAligner, DomSurface, CONTAINER_SELECTOR, ICON_CLASS, SPACER_SELECTOR};
pub use error::AlignError;
pub use events::{EventBindings, ResizePolicy, DEFAULT_DEBOUNCE_MS};
pub use geometry::{DiagonalBaseline, GRADIENT_ANGLE_DEGREES};
pub use layout::{align, preview, LayoutSource, StyleSink};
