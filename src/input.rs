use std::collections::VecDeque;

use winit::event::{ElementState, MouseButton as WinitButton};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

impl From<WinitButton> for MouseButton {
    fn from(b: WinitButton) -> Self {
        match b {
            WinitButton::Left => Self::Primary,
            WinitButton::Right => Self::Secondary,
            WinitButton::Middle => Self::Middle,
            WinitButton::Other(id) => Self::Other(id),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Press,
    Release,
}

impl From<ElementState> for Action {
    fn from(s: ElementState) -> Self {
        match s {
            ElementState::Pressed => Self::Press,
            ElementState::Released => Self::Release,
        }
    }
}

/// A mouse button event together with the cursor position (in pixels) and
/// the window size at the time it happened.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Click {
    pub x: f64,
    pub y: f64,
    pub button: MouseButton,
    pub action: Action,
    pub window_width: u32,
    pub window_height: u32,
}

impl Click {
    pub fn is_primary_press(&self) -> bool {
        self.button == MouseButton::Primary && self.action == Action::Press
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Click(Click),
    ExitRequested,
}

/// Events collected from the window callbacks, drained once per frame
/// before drawing.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
