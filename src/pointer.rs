use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// Tracks the mouse: where it last was and whether the left button is held
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Pointer {
    position: Option<Position>,
    held: bool,
}

impl Pointer {
    pub(crate) fn handle_event(&mut self, ev: MouseEvent) {
        let pos = Position::new(ev.column, ev.row);
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.held = true;
                self.position = Some(pos);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.held = false;
                self.position = Some(pos);
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.position = Some(pos);
            }
            _ => (),
        }
    }

    /// The terminal cell to steer towards, if the button is held down
    pub(crate) fn target(&self) -> Option<Position> {
        self.position.filter(|_| self.held)
    }

    /// Forget that the button is held, e.g., because the terminal lost focus
    /// and the release may never arrive
    pub(crate) fn release(&mut self) {
        self.held = false;
    }
}
