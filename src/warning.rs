use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up describing a problem encountered at startup, shown over the main
/// menu until dismissed
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const MAX_LINES: usize = 16;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;
    const CAUSE_INDENT: &'static str = "  ↳ ";

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::Space | Command::Esc => Some(WarningOutcome::Dismissed),
            Command::Quit => Some(WarningOutcome::Quit),
            _ => None,
        }
    }

    fn from_messages<I, S>(msgs: I) -> Warning
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = Vec::new();
        for (i, msg) in msgs.into_iter().enumerate() {
            let mut opts = textwrap::Options::new(usize::from(Self::TEXT_WIDTH)).break_words(true);
            if i > 0 {
                opts = opts
                    .initial_indent(Self::CAUSE_INDENT)
                    .subsequent_indent("    ");
            }
            lines.extend(
                textwrap::wrap(msg.as_ref(), opts)
                    .into_iter()
                    .map(Cow::into_owned),
            );
        }
        if lines.len() > Self::MAX_LINES {
            lines.truncate(Self::MAX_LINES - 1);
            lines.push(String::from("…"));
        }
        Warning { lines }
    }
}

/// What the player did with a [`Warning`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl From<&anyhow::Error> for Warning {
    fn from(e: &anyhow::Error) -> Warning {
        Warning::from_messages(e.chain().map(ToString::to_string))
    }
}

impl Widget for &Warning {
    // `area` is the whole display area; the pop-up centers itself in it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height,
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn render_one_cause() {
        let err = anyhow!("file not found").context("Failed to load configuration");
        let warning = Warning::from(&err);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Failed to load configuration                     │              ",
            "              │   ↳ file not found                               │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_wrapped_causes() {
        let err = anyhow!("Permission denied (os error 13)")
            .context("failed to open file `/var/log/snake.log`")
            .context("Could not set up logging; continuing without a log file");
        let warning = Warning::from(&err);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Could not set up logging; continuing without a   │              ",
            "              │ log file                                         │              ",
            "              │   ↳ failed to open file `/var/log/snake.log`     │              ",
            "              │   ↳ Permission denied (os error 13)              │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn long_chain_truncated() {
        let warning = Warning::from_messages((0..30).map(|i| format!("problem {i}")));
        assert_eq!(warning.lines.len(), Warning::MAX_LINES);
        assert_eq!(warning.lines[0], "problem 0");
        assert_eq!(warning.lines[1], "  ↳ problem 1");
        assert_eq!(warning.lines.last().map(String::as_str), Some("…"));
    }

    #[test]
    fn dismiss() {
        let warning = Warning::from_messages(["oops"]);
        assert_eq!(
            warning.handle_command(Command::Enter),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Esc),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Quit),
            Some(WarningOutcome::Quit)
        );
        assert_eq!(warning.handle_command(Command::Up), None);
    }
}
