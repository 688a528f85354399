//! Window event bindings with an explicit lifecycle
//!
//! Listeners are registered on mount and removed on unmount (or drop), so a
//! page can tear the aligner down cleanly. Resize handling can optionally be
//! debounced so a drag-resize burst coalesces into a single pass.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{console, Window};

use crate::error::AlignError;

/// Trailing-edge delay used by [`ResizePolicy::debounced`].
pub const DEFAULT_DEBOUNCE_MS: i32 = 150;

/// How resize bursts are turned into alignment passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// One pass per raw resize event.
    #[default]
    Immediate,
    /// One pass per burst, `delay_ms` after the last event.
    Debounced { delay_ms: i32 },
}

impl ResizePolicy {
    /// Debounced handling with the default delay.
    pub fn debounced() -> Self {
        Self::Debounced {
            delay_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

struct Listener {
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

/// Live load/resize registrations; dropping them detaches from the window.
pub struct EventBindings {
    window: Window,
    listeners: SmallVec<[Listener; 2]>,
    /// Debounce timer waiting to fire, if any.
    pending: Rc<RefCell<Option<i32>>>,
}

impl EventBindings {
    /// Attach `on_trigger` to the window's load and resize events.
    ///
    /// No pass runs at mount time; the first invocation comes from the next
    /// event. Callers wanting an eager first pass run the aligner directly.
    pub fn mount<F>(
        window: &Window,
        policy: ResizePolicy,
        on_trigger: F,
    ) -> Result<Self, AlignError>
    where
        F: FnMut() + 'static,
    {
        let callback: Callback = Rc::new(RefCell::new(Box::new(on_trigger)));
        let pending: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

        let mut bindings = Self {
            window: window.clone(),
            listeners: SmallVec::new(),
            pending: pending.clone(),
        };

        // Load always invokes the callback directly.
        let load = {
            let callback = callback.clone();
            Closure::new(move || {
                (*callback.borrow_mut())();
            })
        };
        bindings.attach("load", load)?;

        let resize = match policy {
            ResizePolicy::Immediate => {
                let callback = callback.clone();
                Closure::new(move || {
                    (*callback.borrow_mut())();
                })
            }
            ResizePolicy::Debounced { delay_ms } => {
                let fire: Closure<dyn FnMut()> = Closure::new({
                    let callback = callback.clone();
                    let pending = pending.clone();
                    move || {
                        pending.borrow_mut().take();
                        (*callback.borrow_mut())();
                    }
                });

                let window = window.clone();
                Closure::new(move || {
                    // A fresh event supersedes whatever is still queued.
                    if let Some(handle) = pending.borrow_mut().take() {
                        window.clear_timeout_with_handle(handle);
                    }

                    let handler: &js_sys::Function = fire.as_ref().unchecked_ref();
                    match window
                        .set_timeout_with_callback_and_timeout_and_arguments_0(handler, delay_ms)
                    {
                        Ok(handle) => {
                            *pending.borrow_mut() = Some(handle);
                        }
                        Err(err) => console::warn_1(&err),
                    }
                })
            }
        };
        bindings.attach("resize", resize)?;

        Ok(bindings)
    }

    fn attach(
        &mut self,
        event: &'static str,
        closure: Closure<dyn FnMut()>,
    ) -> Result<(), AlignError> {
        let handler: &js_sys::Function = closure.as_ref().unchecked_ref();
        self.window
            .add_event_listener_with_callback(event, handler)
            .map_err(|err| AlignError::Dom {
                message: format!("{:?}", err),
            })?;

        self.listeners.push(Listener { event, closure });
        Ok(())
    }

    /// Remove the listeners and cancel any pending debounce timer.
    ///
    /// Idempotent; also runs on drop.
    pub fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(err) = self.window.remove_event_listener_with_callback(
                listener.event,
                listener.closure.as_ref().unchecked_ref(),
            ) {
                console::warn_1(&err);
            }
        }

        if let Some(handle) = self.pending.borrow_mut().take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }

    /// Whether any listeners are currently registered.
    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        self.detach();
    }
}
