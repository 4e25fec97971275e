//! Widget system: trait and type registry.

pub mod registry;
pub mod traits;

pub use registry::WidgetRegistry;
pub use traits::{ChildVisibility, Widget};
