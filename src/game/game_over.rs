use super::snake::Collision;
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// A widget for the pop-up shown over the frozen field once the snake has
/// crashed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOver {
    pub(super) score: u32,
    pub(super) cause: Collision,
}

impl GameOver {
    /// The height that should be used for the `Rect` passed to
    /// `GameOver::render()`
    pub(super) const HEIGHT: u16 = 8;

    /// The width that should be used for the `Rect` passed to
    /// `GameOver::render()`
    pub(super) const WIDTH: u16 = 30;
}

impl Widget for GameOver {
    /*
     * ┌───────── GAME OVER ─────────┐
     * │      You hit the wall       │
     * │                             │
     * │       Your Score: 12        │
     * │                             │
     * │     Play Again (space)      │
     * │     Back to Menu (esc)      │
     * └─────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Line::styled(" GAME OVER ", consts::GAME_OVER_STYLE))
            .title_alignment(Alignment::Center)
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::raw(self.cause.to_string()),
            Line::default(),
            Line::raw(format!("Your Score: {}", self.score)),
            Line::default(),
            key_hint("Play Again (", "space"),
            key_hint("Back to Menu (", "esc"),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.centered().render(row, buf);
        }
    }
}

fn key_hint(label: &'static str, key: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::raw(label),
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(")"),
    ])
}
