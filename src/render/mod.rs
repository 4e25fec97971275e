//! Rendering pipeline: strips, compositor, and the scene render pass.

pub mod compositor;
pub mod pass;
pub mod strip;

pub use compositor::Compositor;
pub use pass::{render_scene, RenderPass, RenderStats};
pub use strip::{CellStyle, Strip, StyledCell};
