//! Error type shared by the DOM-free core and the browser widget.

use thiserror::Error;

/// Primary error type for slider construction and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlidezyError {
    /// The container selector matched no element.
    #[error("container \"{selector}\" not found")]
    ContainerNotFound {
        /// Selector supplied by the caller.
        selector: String,
    },
    /// The selector string could not be parsed by the document.
    #[error("selector \"{selector}\" is not valid")]
    InvalidSelector {
        /// Selector supplied by the caller.
        selector: String,
    },
    /// An external prev/next control selector matched no element.
    #[error("control \"{selector}\" not found")]
    ControlNotFound {
        /// Selector supplied through `prevButton` or `nextButton`.
        selector: String,
    },
    /// `items` must be at least one.
    #[error("items must be at least 1")]
    InvalidItems,
    /// Options could not be decoded.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// A DOM call failed while building or rendering the widget.
    #[error("dom operation '{operation}' failed: {detail}")]
    Dom {
        /// Short name of the failing operation.
        operation: &'static str,
        /// Stringified JavaScript error.
        detail: String,
    },
}

impl From<serde_json::Error> for SlidezyError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_selector() {
        let err = SlidezyError::ContainerNotFound {
            selector: "#hero".into(),
        };
        assert_eq!(err.to_string(), "container \"#hero\" not found");
    }

    #[test]
    fn json_errors_become_invalid_options() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            SlidezyError::from(parse),
            SlidezyError::InvalidOptions(_)
        ));
    }
}
