//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a scene node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single scene node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Widget type name (e.g. "TabButton", "Frame").
    pub widget_type: String,
    /// Node name. Siblings may share a name; lookups return the first match.
    pub name: String,
    /// Whether this node takes part in layout and rendering.
    pub visible: bool,
    /// Opaque integer tag. Tab buttons store their current index here.
    pub tag: Option<usize>,
}

impl NodeData {
    /// Create a new `NodeData` with the given widget type and name.
    pub fn new(widget_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            name: name.into(),
            visible: true,
            tag: None,
        }
    }

    /// Whether this node is of the given widget type.
    pub fn is_type(&self, widget_type: &str) -> bool {
        self.widget_type == widget_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = NodeData::new("TabButton", "Foo");
        assert_eq!(data.widget_type, "TabButton");
        assert_eq!(data.name, "Foo");
        assert!(data.visible);
        assert!(data.tag.is_none());
    }

    #[test]
    fn is_type() {
        let data = NodeData::new("TabView", "tv");
        assert!(data.is_type("TabView"));
        assert!(!data.is_type("Frame"));
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
