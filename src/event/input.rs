//! Input event types, decoupled from crossterm.
//!
//! Only the events a tab view reacts to are modelled: mouse presses (for tab,
//! close, and "+" clicks) and terminal resizes. Crossterm events convert via
//! [`try_from_crossterm`] so nothing else in the crate touches crossterm.

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

/// Mouse action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down(MouseBtn),
    Up(MouseBtn),
    Drag(MouseBtn),
    Moved,
    Scroll,
}

/// A mouse event at a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseAction,
    pub x: u16,
    pub y: u16,
}

impl MouseEvent {
    /// A left-button press at (x, y).
    pub fn left_click(x: u16, y: u16) -> Self {
        Self {
            kind: MouseAction::Down(MouseBtn::Left),
            x,
            y,
        }
    }

    /// Whether this is a left-button press.
    pub fn is_left_click(&self) -> bool {
        self.kind == MouseAction::Down(MouseBtn::Left)
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
}

// ---------------------------------------------------------------------------
// crossterm conversion
// ---------------------------------------------------------------------------

fn convert_mouse_button(b: crossterm::event::MouseButton) -> MouseBtn {
    match b {
        crossterm::event::MouseButton::Left => MouseBtn::Left,
        crossterm::event::MouseButton::Right => MouseBtn::Right,
        crossterm::event::MouseButton::Middle => MouseBtn::Middle,
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(me: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::MouseEventKind;
        let kind = match me.kind {
            MouseEventKind::Down(b) => MouseAction::Down(convert_mouse_button(b)),
            MouseEventKind::Up(b) => MouseAction::Up(convert_mouse_button(b)),
            MouseEventKind::Drag(b) => MouseAction::Drag(convert_mouse_button(b)),
            MouseEventKind::Moved => MouseAction::Moved,
            _ => MouseAction::Scroll,
        };
        MouseEvent {
            kind,
            x: me.column,
            y: me.row,
        }
    }
}

/// Convert a crossterm event, or `None` for events a tab view ignores.
pub fn try_from_crossterm(event: crossterm::event::Event) -> Option<InputEvent> {
    match event {
        crossterm::event::Event::Mouse(me) => Some(InputEvent::Mouse(MouseEvent::from(me))),
        crossterm::event::Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}
