//! WASM bindings for the aligner

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::console;

use crate::dom::DomAligner;
use crate::error::AlignError;
use crate::events::{EventBindings, ResizePolicy};
use crate::geometry::GRADIENT_ANGLE_DEGREES;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn bridge_error(error: AlignError) -> JsError {
    JsError::new(&error.to_string())
}

/// WASM-exposed aligner wrapper
#[wasm_bindgen]
pub struct SummaryAligner {
    aligner: DomAligner,
    bindings: Option<EventBindings>,
}

#[wasm_bindgen]
impl SummaryAligner {
    /// Create an aligner bound to the current document
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SummaryAligner, JsError> {
        let aligner = DomAligner::from_window().map_err(bridge_error)?;

        Ok(SummaryAligner {
            aligner,
            bindings: None,
        })
    }

    /// Run one alignment pass now
    pub fn align(&self) -> Result<usize, JsError> {
        self.aligner.align().map_err(bridge_error)
    }

    /// Attach to the window's load and resize events
    ///
    /// Passing a delay debounces resize bursts; omitting it realigns on
    /// every event. Mounting twice replaces the previous registration, and
    /// no pass runs until the next event fires.
    pub fn mount(&mut self, debounce_ms: Option<i32>) -> Result<(), JsError> {
        self.unmount();

        let window = web_sys::window()
            .ok_or(AlignError::WindowUnavailable)
            .map_err(bridge_error)?;
        let policy = match debounce_ms {
            Some(delay_ms) => ResizePolicy::Debounced { delay_ms },
            None => ResizePolicy::Immediate,
        };

        let aligner = self.aligner.clone();
        let bindings = EventBindings::mount(&window, policy, move || {
            if let Err(error) = aligner.align() {
                console::error_1(&JsValue::from_str(&format!("slant-align: {}", error)));
            }
        })
        .map_err(bridge_error)?;

        self.bindings = Some(bindings);
        Ok(())
    }

    /// Detach from the window; a no-op when not mounted
    pub fn unmount(&mut self) {
        if let Some(mut bindings) = self.bindings.take() {
            bindings.detach();
        }
    }

    /// Whether window listeners are currently attached
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.bindings.is_some()
    }

    /// Icon elements the next pass would touch
    #[wasm_bindgen(js_name = iconCount)]
    pub fn icon_count(&self) -> usize {
        self.aligner.icon_count()
    }

    /// Margins the next pass would write, without writing them
    #[wasm_bindgen(js_name = previewMargins)]
    pub fn preview_margins(&self) -> Result<Vec<f64>, JsError> {
        self.aligner.preview().map_err(bridge_error)
    }

    /// Get the current baseline geometry (returns JSON)
    #[wasm_bindgen(js_name = getGeometry)]
    pub fn get_geometry(&self) -> Result<JsValue, JsError> {
        let baseline = self.aligner.baseline().map_err(bridge_error)?;

        let snapshot = GeometrySnapshot {
            mid_width: baseline.mid_width(),
            mid_height: baseline.mid_height(),
            angle_degrees: GRADIENT_ANGLE_DEGREES,
            icon_count: self.aligner.icon_count(),
        };

        Ok(serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL))
    }
}

/// Align the summary icons once without keeping an aligner around
#[wasm_bindgen(js_name = alignModuleSummaries)]
pub fn align_module_summaries() -> Result<usize, JsError> {
    let aligner = DomAligner::from_window().map_err(bridge_error)?;
    aligner.align().map_err(bridge_error)
}

/// Serializable baseline geometry for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometrySnapshot {
    pub mid_width: f64,
    pub mid_height: f64,
    pub angle_degrees: f64,
    pub icon_count: usize,
}
