//! Input events
//!
//! Each frame the window's input queue is drained into a single game event.

use egui::Key;

use crate::sim::Direction;

/// The one user action reported for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Event {
    #[default]
    None,
    /// Window close or Escape
    Quit,
    /// Arrow key press (auto-repeat included)
    Key(Direction),
}

/// Drain this frame's input from the egui context
pub fn poll(ctx: &egui::Context) -> Event {
    ctx.input(|i| from_input(&i.events, i.viewport().close_requested()))
}

/// Reduce raw input events to one game event.
///
/// Quit wins over everything else. Among arrow presses the last one wins;
/// other keys and releases are ignored.
///
/// This is not a plain "last key seen": a non-arrow key pressed after an
/// arrow leaves the arrow event in place instead of resetting it to `None`.
pub fn from_input(events: &[egui::Event], close_requested: bool) -> Event {
    let mut quit = close_requested;
    let mut direction = None;
    for event in events {
        let egui::Event::Key {
            key, pressed: true, ..
        } = event
        else {
            continue;
        };
        match key {
            Key::Escape => quit = true,
            Key::ArrowLeft => direction = Some(Direction::Left),
            Key::ArrowRight => direction = Some(Direction::Right),
            _ => {}
        }
    }

    if quit {
        Event::Quit
    } else {
        direction.map_or(Event::None, Event::Key)
    }
}
