use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::Widget,
};

/// The game's name in big letters
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    pub(super) const HEIGHT: u16 = 5;
    pub(super) const WIDTH: u16 = 28;

    #[rustfmt::skip]
    const LINES: [&'static str; Self::HEIGHT as usize] = [
         " ____              _        ",
         "/ ___| _ __   __ _| | _____ ",
        r"\___ \| '_ \ / _` | |/ / _ \",
         " ___) | | | | (_| |   <  __/",
        r"|____/|_| |_|\__,_|_|\_\___|",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::from_iter(Self::LINES)
            .style(consts::TITLE_STYLE)
            .render(area, buf);
    }
}

/// How to play
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 6;
    pub(super) const WIDTH: u16 = 24;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Steer the snake with:"),
            keys("       ", ["←", "↓", "↑", "→"]),
            keys("   or: ", ["a", "s", "w", "d"]),
            Line::from("   or: hold mouse button"),
            Line::from("Eat apples, but dodge"),
            Line::from("rocks and your own tail!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}

/// A line listing four direction keys, highlighted, after `lead`
fn keys(lead: &'static str, keys: [&'static str; 4]) -> Line<'static> {
    let mut line = Line::raw(lead);
    for (i, k) in keys.into_iter().enumerate() {
        if i > 0 {
            line.push_span(" ");
        }
        line.push_span(Span::styled(k, consts::KEY_STYLE));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_logo() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 32, 7));
        Logo.render(Rect::new(2, 1, Logo::WIDTH, Logo::HEIGHT), &mut buffer);
        #[rustfmt::skip]
        let mut expected = Buffer::with_lines([
             "",
             "   ____              _          ",
             "  / ___| _ __   __ _| | _____   ",
            r"  \___ \| '_ \ / _` | |/ / _ \  ",
             "   ___) | | | | (_| |   <  __/  ",
            r"  |____/|_| |_|\__,_|_|\_\___|  ",
             "",
        ]);
        expected.set_style(Rect::new(2, 1, 28, 5), consts::TITLE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn logo_width() {
        assert!(Logo::LINES
            .iter()
            .all(|ln| ln.len() == usize::from(Logo::WIDTH)));
    }

    #[test]
    fn render_instructions() {
        let area = Rect::new(0, 0, Instructions::WIDTH, Instructions::HEIGHT);
        let mut buffer = Buffer::empty(area);
        Instructions.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "Steer the snake with:",
            "       ← ↓ ↑ →",
            "   or: a s w d",
            "   or: hold mouse button",
            "Eat apples, but dodge",
            "rocks and your own tail!",
        ]);
        for x in [7, 9, 11, 13] {
            expected.set_style(Rect::new(x, 1, 1, 1), consts::KEY_STYLE);
            expected.set_style(Rect::new(x, 2, 1, 1), consts::KEY_STYLE);
        }
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
