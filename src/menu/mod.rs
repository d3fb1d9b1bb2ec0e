mod widgets;
use self::widgets::{Instructions, Logo};
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

/// The title screen shown at startup and between rounds
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu;

impl MainMenu {
    const TITLE: &'static str = "Realistic Snake Adventure!";
}

impl Widget for MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [logo_area, title_area, instructions_area, play_area, quit_area] =
            Layout::vertical([Logo::HEIGHT, 1, Instructions::HEIGHT, 1, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(area);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        Line::styled(Self::TITLE, consts::TITLE_STYLE)
            .centered()
            .render(title_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        Line::from_iter([
            Span::raw("[Play ("),
            Span::styled("space", consts::KEY_STYLE),
            Span::raw(")]"),
        ])
        .centered()
        .render(play_area, buf);

        Line::from_iter([
            Span::raw("[Quit ("),
            Span::styled("esc", consts::KEY_STYLE),
            Span::raw(")]"),
        ])
        .centered()
        .render(quit_area, buf);
    }
}
