//! Scene-graph arena: slotmap-backed node tree with ordered, named children.

pub mod node;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::Dom;
