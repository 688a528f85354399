//! Error types for the alignment pass

use thiserror::Error;

/// Failures surfaced by an alignment pass.
///
/// A failed pass aborts without rolling back margins already written; the
/// next load or resize event gets an independent attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A required reference element is absent from the document (or is not
    /// an HTML element, so it exposes no layout metrics).
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },

    /// The global window or document object is unavailable. Raised when the
    /// aligner is constructed outside a browser environment.
    #[error("browser window or document is unavailable")]
    WindowUnavailable,

    /// A DOM read or write failed underneath us.
    #[error("dom operation failed: {message}")]
    Dom { message: String },
}

impl AlignError {
    /// Error for a reference element that could not be resolved.
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement {
            selector: selector.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_names_selector() {
        let err = AlignError::missing(".home-spacer#modules");
        assert_eq!(
            err.to_string(),
            "required element not found: .home-spacer#modules"
        );
    }

    #[test]
    fn test_dom_message_passthrough() {
        let err = AlignError::Dom {
            message: "style write rejected".to_string(),
        };
        assert!(err.to_string().contains("style write rejected"));
    }
}
