use crate::command::Command;
use crate::consts;
use crate::game::Session;
use crate::pointer::Pointer;
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, layout::Rect, Frame, Terminal};
use std::collections::VecDeque;
use std::io;
use std::ops::ControlFlow;
use std::time::Instant;

/// The top-level loop: input, steering, logic, and drawing, once per frame
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    session: Session<R>,
    pointer: Pointer,

    /// Whether mouse events should steer the snake
    mouse: bool,

    /// Problems to show the player before anything else, oldest first
    warnings: VecDeque<Warning>,

    /// The area of the most recently drawn frame
    area: Rect,
}

impl App<rand::rngs::ThreadRng> {
    pub(crate) fn new(mouse: bool, warnings: Vec<Warning>) -> App {
        App::new_with_session(Session::new(), mouse, warnings)
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn new_with_session(
        session: Session<R>,
        mouse: bool,
        warnings: Vec<Warning>,
    ) -> App<R> {
        App {
            session,
            pointer: Pointer::default(),
            mouse,
            warnings: warnings.into(),
            area: Rect::default(),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let mut deadline = Instant::now();
        loop {
            deadline += consts::FRAME_PERIOD;
            let now = Instant::now();
            if deadline < now {
                // Fell behind (e.g., the process was suspended); don't try to
                // catch up on missed frames.
                deadline = now + consts::FRAME_PERIOD;
            }
            if self.process_input(deadline)?.is_break() {
                return Ok(());
            }
            let now = Instant::now();
            if let Some(target) = self.pointer.target() {
                self.session.steer(target, self.area);
            }
            self.session.update(now);
            let frame = terminal.draw(|frame| self.draw(frame, now))?;
            self.area = frame.area;
        }
    }

    /// Handle input events as they arrive until `deadline`
    fn process_input(&mut self, deadline: Instant) -> io::Result<ControlFlow<()>> {
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !poll(wait)? {
                return Ok(ControlFlow::Continue(()));
            }
            if self.handle_event(read()?, Instant::now()).is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
    }

    fn handle_event(&mut self, event: Event, now: Instant) -> ControlFlow<()> {
        match event {
            Event::Mouse(ev) if self.mouse => self.pointer.handle_event(ev),
            Event::FocusLost => self.pointer.release(),
            Event::Key(_) => {
                if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
                    return self.handle_command(cmd, now);
                }
            }
            _ => (),
        }
        ControlFlow::Continue(())
    }

    fn handle_command(&mut self, cmd: Command, now: Instant) -> ControlFlow<()> {
        if let Some(warning) = self.warnings.front() {
            match warning.handle_command(cmd) {
                Some(WarningOutcome::Dismissed) => {
                    let _ = self.warnings.pop_front();
                }
                Some(WarningOutcome::Quit) => return ControlFlow::Break(()),
                None => (),
            }
            ControlFlow::Continue(())
        } else {
            self.session.handle_command(cmd, now)
        }
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>, now: Instant) {
        self.session.draw(frame, now);
        if let Some(warning) = self.warnings.front() {
            frame.render_widget(warning, get_display_area(frame.area()));
        }
    }
}
