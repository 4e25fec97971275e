//! Layout: taffy integration and the spatial map used for hit testing.

pub mod engine;
pub mod spatial;

pub use engine::LayoutEngine;
pub use spatial::SpatialMap;
