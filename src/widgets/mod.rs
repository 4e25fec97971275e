//! Built-in widgets: Frame, Label, Action, TabButton, TabView.

pub mod action;
pub mod frame;
pub mod label;
pub mod tab_button;
pub mod tab_view;

pub use action::Action;
pub use frame::{Frame, FrameLayout};
pub use label::Label;
pub use tab_button::TabButton;
pub use tab_view::{TabView, TabViewMut};
