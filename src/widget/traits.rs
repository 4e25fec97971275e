//! Widget trait: type name, layout style, paint, downcast.
//!
//! Every node in a [`Scene`](crate::scene::Scene) owns one boxed widget. The
//! scene graph handles structure; the widget only knows how to size and paint
//! itself inside the region layout allocated to it.

use std::any::Any;

use taffy::style::Style;

use crate::config::Theme;
use crate::dom::NodeId;
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::scene::Scene;

// ---------------------------------------------------------------------------
// ChildVisibility
// ---------------------------------------------------------------------------

/// Which children of a widget the layout pass shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildVisibility {
    /// Every child keeps its own visibility.
    All,
    /// Only the child at this index is shown; `None` shows nothing.
    Stacked(Option<usize>),
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Object-safe: the scene stores widgets as `Box<dyn Widget>` and recovers
/// concrete types through [`as_any`](Widget::as_any).
pub trait Widget {
    /// The type name used for ancestor lookup and the widget registry.
    fn widget_type(&self) -> &str;

    /// Flexbox style for this node. Defaults to growing into free space.
    fn layout_style(&self) -> Style {
        Style {
            flex_grow: 1.0,
            ..Default::default()
        }
    }

    /// How the layout pass treats this widget's children.
    fn child_visibility(&self) -> ChildVisibility {
        ChildVisibility::All
    }

    /// Paint this widget into strips within `region`.
    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip>;

    /// Paint on top of this widget's children, after they have rendered.
    ///
    /// Has read access to the scene for child geometry.
    fn render_overlay(&self, _scene: &Scene, _id: NodeId) -> Vec<Strip> {
        Vec::new()
    }

    /// Downcast to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
