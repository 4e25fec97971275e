//! Crate error type.

use thiserror::Error;

use crate::dom::NodeId;

/// Failures reported by tab view and scene operations.
///
/// None of these are fatal: the operation that returns one leaves the scene
/// exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// A tab index outside `0..len`.
    #[error("tab index {index} out of range for number of tabs: {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// No tab carries the requested label.
    #[error("no tab named {0:?}")]
    NameNotFound(String),

    /// The widget registry has no constructor under this type name.
    #[error("unknown widget type {0:?}")]
    UnknownWidgetType(String),

    /// Tab content must be a live node with no parent that does not enclose
    /// the tab view.
    #[error("node {0:?} cannot become tab content")]
    InvalidContent(NodeId),

    /// The node is missing or is not a TabView.
    #[error("node {0:?} is not a TabView")]
    NotATabView(NodeId),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, TabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message() {
        let err = TabError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "tab index 7 out of range for number of tabs: 3");
    }

    #[test]
    fn name_not_found_message() {
        let err = TabError::NameNotFound("Foo".into());
        assert_eq!(err.to_string(), "no tab named \"Foo\"");
    }

    #[test]
    fn invalid_content_message() {
        let err = TabError::InvalidContent(NodeId::default());
        assert!(err.to_string().ends_with("cannot become tab content"));
    }

    #[test]
    fn unknown_type_message() {
        let err = TabError::UnknownWidgetType("Svg".into());
        assert_eq!(err.to_string(), "unknown widget type \"Svg\"");
    }
}
