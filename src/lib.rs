//! # gilt-tabs
//!
//! A tab view for retained-mode terminal UIs: a strip of clickable tab
//! buttons over a stack of content nodes, exactly one of which is shown.
//!
//! Widgets live in a slotmap scene graph, lay out with taffy flexbox, and
//! paint into a strip compositor. Mutations are batched into render requests
//! that a [`Screen`](screen::Screen) drains once per frame.
//!
//! ## Core Systems
//!
//! - **[`scene`]**: scene graph pairing the node tree with widgets, actions, and regions
//! - **[`widgets`]**: Frame, Label, Action, TabButton, TabView
//! - **[`dom`]**: slotmap node arena with ordered children and parent links
//! - **[`update`]**: update brackets and render requests
//! - **[`event`]**: signals, per-node actions, crossterm input conversion
//! - **[`layout`]**: taffy layout and hit testing
//! - **[`render`]**: strips, compositor, render pass
//! - **[`screen`]**: one viewport: update loop and click routing
//! - **[`testing`]**: headless Pilot and snapshot helpers
//!
//! ## Example
//!
//! ```ignore
//! use gilt_tabs::prelude::*;
//!
//! let mut screen = Screen::new(80, 24);
//! let root = screen.scene.create_root(Frame::vertical(), "root");
//! let view = TabView::create(&mut screen.scene, root, "tabs", TabViewConfig::default());
//! let mut tabs = screen.scene.tab_view(view)?;
//! tabs.add_tab_widget(Label::new("first page"), "One")?;
//! tabs.add_tab_widget(Label::new("second page"), "Two")?;
//! tabs.select_tab_index(1)?;
//! screen.update();
//! ```

// Foundation
pub mod config;
pub mod error;
pub mod geometry;

// Scene graph
pub mod dom;
pub mod scene;
pub mod update;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Layout and rendering
pub mod layout;
pub mod render;
pub mod screen;

// Headless testing
pub mod testing;

pub use error::{Result, TabError};

/// Common imports.
pub mod prelude {
    pub use crate::config::{TabViewConfig, Theme};
    pub use crate::dom::NodeId;
    pub use crate::error::{Result, TabError};
    pub use crate::event::{ConnectionId, TabViewEvent, TabViewSignal};
    pub use crate::scene::Scene;
    pub use crate::screen::Screen;
    pub use crate::widget::{Widget, WidgetRegistry};
    pub use crate::widgets::{Action, Frame, Label, TabButton, TabView, TabViewMut};
}
