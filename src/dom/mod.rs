//! DOM-backed layout surface
//!
//! Resolves the reference elements and the icon collection from the live
//! document, reads their rendered metrics, and writes the computed top
//! margins back as inline styles.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, HtmlCollection, HtmlElement};

use crate::error::AlignError;
use crate::geometry::DiagonalBaseline;
use crate::layout::{self, LayoutSource, StyleSink};

/// Selector for the middle summary column; its rendered width fixes the
/// horizontal midpoint.
pub const CONTAINER_SELECTOR: &str = ".summary-container#modules > .summary-col-mid";

/// Selector for the home spacer; its rendered height fixes the vertical
/// midpoint.
pub const SPACER_SELECTOR: &str = ".home-spacer#modules";

/// Class naming the icon elements that receive a top margin.
pub const ICON_CLASS: &str = "summary-modules-outer";

/// Format a margin value the way inline styles expect it.
fn px(value: f64) -> String {
    format!("{}px", value)
}

fn dom_error(value: JsValue) -> AlignError {
    AlignError::Dom {
        message: format!("{:?}", value),
    }
}

/// One pass worth of document access.
///
/// The icon collection is resolved once per pass (it is live, so it tracks
/// the document); reference elements are resolved at the moment their metric
/// is read. Nothing is cached across passes.
pub struct DomSurface {
    document: Document,
    icons: HtmlCollection,
}

impl DomSurface {
    /// Query the icon collection and wrap the document for one pass.
    pub fn resolve(document: &Document) -> Self {
        Self {
            document: document.clone(),
            icons: document.get_elements_by_class_name(ICON_CLASS),
        }
    }

    /// Resolve a reference element and hand back its HTML view.
    fn reference(&self, selector: &str) -> Result<HtmlElement, AlignError> {
        let element = self
            .document
            .query_selector(selector)
            .map_err(dom_error)?
            .ok_or_else(|| AlignError::missing(selector))?;

        // A match that is not an HTML element exposes no offset metrics.
        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| AlignError::missing(selector))
    }

    fn icon(&self, index: usize) -> Result<HtmlElement, AlignError> {
        let element = self
            .icons
            .item(index as u32)
            .ok_or_else(|| AlignError::Dom {
                message: format!("icon {} vanished during the pass", index),
            })?;

        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| AlignError::Dom {
                message: format!("icon {} is not an html element", index),
            })
    }
}

impl LayoutSource for DomSurface {
    fn container_width(&self) -> Result<f64, AlignError> {
        Ok(f64::from(self.reference(CONTAINER_SELECTOR)?.offset_width()))
    }

    fn spacer_height(&self) -> Result<f64, AlignError> {
        Ok(f64::from(self.reference(SPACER_SELECTOR)?.offset_height()))
    }

    fn icon_count(&self) -> usize {
        self.icons.length() as usize
    }

    fn icon_offset(&self, index: usize) -> Result<f64, AlignError> {
        Ok(f64::from(self.icon(index)?.offset_left()))
    }
}

impl StyleSink for DomSurface {
    fn set_top_margin(&mut self, index: usize, margin_px: f64) -> Result<(), AlignError> {
        self.icon(index)?
            .style()
            .set_property("margin-top", &px(margin_px))
            .map_err(dom_error)
    }
}

/// Document-bound aligner: a fresh [`DomSurface`] per pass, the engine
/// underneath.
#[derive(Clone)]
pub struct DomAligner {
    document: Document,
}

impl DomAligner {
    /// Bind to the current browser window's document.
    pub fn from_window() -> Result<Self, AlignError> {
        let window = web_sys::window().ok_or(AlignError::WindowUnavailable)?;
        let document = window.document().ok_or(AlignError::WindowUnavailable)?;
        Ok(Self::new(document))
    }

    /// Bind to an explicit document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Run one alignment pass over the current document state.
    ///
    /// Emits a single `console.debug` line per pass.
    pub fn align(&self) -> Result<usize, AlignError> {
        let mut surface = DomSurface::resolve(&self.document);
        let count = layout::align(&mut surface)?;

        console::debug_1(&JsValue::from_str(&format!(
            "slant-align: positioned {} summary icons",
            count
        )));

        Ok(count)
    }

    /// Margins the next pass would write, without writing them.
    pub fn preview(&self) -> Result<Vec<f64>, AlignError> {
        layout::preview(&DomSurface::resolve(&self.document))
    }

    /// Baseline derived from the current reference measurements.
    pub fn baseline(&self) -> Result<DiagonalBaseline, AlignError> {
        let surface = DomSurface::resolve(&self.document);
        Ok(DiagonalBaseline::from_reference(
            surface.container_width()?,
            surface.spacer_height()?,
        ))
    }

    /// Icon elements present right now.
    pub fn icon_count(&self) -> usize {
        DomSurface::resolve(&self.document).icon_count()
    }
}
