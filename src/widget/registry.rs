//! Widget registry: create widgets by type name.
//!
//! Used where a caller names a widget type instead of handing over an
//! instance, such as a tab view's "+" button creating a new content pane.

use std::collections::HashMap;
use std::fmt;

use super::traits::Widget;
use crate::error::{Result, TabError};
use crate::widgets::{Frame, Label};

type Constructor = Box<dyn Fn() -> Box<dyn Widget>>;

/// Maps widget type names to constructors.
pub struct WidgetRegistry {
    constructors: HashMap<String, Constructor>,
}

impl WidgetRegistry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// A registry with the built-in content widgets: `Frame` and `Label`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("Frame", || Box::new(Frame::vertical()));
        registry.register("Label", || Box::new(Label::new("")));
        registry
    }

    /// Register (or replace) the constructor for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn Widget> + 'static,
    {
        self.constructors.insert(name.into(), Box::new(constructor));
    }

    /// Whether `name` has a constructor.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Construct a widget of type `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Widget>> {
        self.constructors
            .get(name)
            .map(|ctor| ctor())
            .ok_or_else(|| TabError::UnknownWidgetType(name.to_owned()))
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_registered() {
        let registry = WidgetRegistry::new();
        assert_eq!(registry.names(), vec!["Frame", "Label"]);
        assert_eq!(registry.create("Frame").unwrap().widget_type(), "Frame");
        assert_eq!(registry.create("Label").unwrap().widget_type(), "Label");
    }

    #[test]
    fn unknown_type_errors() {
        let registry = WidgetRegistry::empty();
        let err = registry.create("Frame").err();
        assert_eq!(err, Some(TabError::UnknownWidgetType("Frame".into())));
    }

    #[test]
    fn register_custom() {
        let mut registry = WidgetRegistry::empty();
        registry.register("Greeting", || Box::new(Label::new("hello")));
        assert!(registry.contains("Greeting"));
        let widget = registry.create("Greeting").unwrap();
        let label = widget.as_any().downcast_ref::<Label>().unwrap();
        assert_eq!(label.text(), "hello");
    }

    #[test]
    fn debug_lists_names() {
        let dbg = format!("{:?}", WidgetRegistry::new());
        assert!(dbg.contains("Frame"));
    }
}
