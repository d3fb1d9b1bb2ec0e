mod direction;
mod field;
mod game_over;
mod grid;
mod item;
mod motion;
mod obstacles;
mod palette;
mod snake;
use self::direction::Direction;
use self::field::{FieldView, Raster};
use self::game_over::GameOver;
use self::grid::Grid;
use self::item::Item;
use self::motion::{interpolate, progress, Point};
use self::obstacles::Obstacles;
use self::snake::{Advance, Collision, Snake};
use crate::command::Command;
use crate::consts;
use crate::menu::MainMenu;
use crate::util::{center_rect, get_display_area};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::Color,
    text::Line,
    widgets::{Clear, Widget},
    Frame,
};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// Which screen the player is looking at
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Screen {
    Menu,
    Playing,
    /// The snake crashed into something; the field stays frozen underneath a
    /// pop-up until the player starts over or goes back to the menu.
    GameOver(Collision),
}

/// All of the game's state: the current screen plus everything on the field
#[derive(Clone, Debug)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    screen: Screen,
    snake: Snake,
    item: Item,
    obstacles: Obstacles,

    /// Snake movements per second
    speed: f64,

    background: Color,

    /// When the snake last moved (or the round started)
    last_tick: Instant,
}

impl Session<rand::rngs::ThreadRng> {
    pub(crate) fn new() -> Self {
        Session::new_with_rng(rand::rng())
    }
}

impl<R: Rng> Session<R> {
    pub(crate) fn new_with_rng(mut rng: R) -> Session<R> {
        let grid = Grid::default();
        let snake = Snake::new(grid.center(), Direction::East, grid);
        let item = Item::new(&mut rng, grid);
        Session {
            rng,
            grid,
            screen: Screen::Menu,
            snake,
            item,
            obstacles: Obstacles::default(),
            speed: consts::BASE_SPEED,
            background: consts::DEFAULT_BACKGROUND,
            last_tick: Instant::now(),
        }
    }

    #[cfg(test)]
    pub(crate) fn screen(&self) -> Screen {
        self.screen
    }

    /// React to a keypress made at `now`.  Returns `Break` if the player
    /// asked to quit.
    pub(crate) fn handle_command(&mut self, cmd: Command, now: Instant) -> ControlFlow<()> {
        match (self.screen, cmd) {
            (_, Command::Quit) | (Screen::Menu, Command::Esc | Command::Q) => {
                return ControlFlow::Break(());
            }
            (Screen::Menu | Screen::GameOver(_), Command::Space) => self.start_round(now),
            (Screen::Playing | Screen::GameOver(_), Command::Esc) => self.set_screen(Screen::Menu),
            (Screen::Playing, Command::Up) => self.snake.turn(Direction::North),
            (Screen::Playing, Command::Down) => self.snake.turn(Direction::South),
            (Screen::Playing, Command::Left) => self.snake.turn(Direction::West),
            (Screen::Playing, Command::Right) => self.snake.turn(Direction::East),
            _ => (),
        }
        ControlFlow::Continue(())
    }

    /// Turn the snake towards the terminal cell `pointer`, given that the
    /// whole session is drawn in `area`.  Whichever axis the pointer is
    /// farther from the head along wins; ties go to the vertical axis.
    pub(crate) fn steer(&mut self, pointer: Position, area: Rect) {
        if self.screen != Screen::Playing {
            return;
        }
        let (_, view) = field_layout(area, self.grid);
        let target = view.to_grid(pointer);
        let head = Point::from(self.snake.head());
        self.snake.turn(steering_direction(
            target.x - (head.x + 0.5),
            target.y - (head.y + 0.5),
        ));
    }

    /// Move the snake if a full tick has passed since it last moved
    pub(crate) fn update(&mut self, now: Instant) {
        if self.screen == Screen::Playing
            && now.saturating_duration_since(self.last_tick) > self.tick_period()
        {
            self.tick(now);
        }
    }

    fn tick_period(&self) -> Duration {
        Duration::try_from_secs_f64(self.speed.recip()).unwrap_or(Duration::MAX)
    }

    fn start_round(&mut self, now: Instant) {
        self.snake.reset(&mut self.rng, self.grid);
        self.obstacles.clear();
        self.item.place_random(
            &mut self.rng,
            self.grid,
            Some(self.snake.cells()),
            Some(&self.obstacles),
        );
        self.obstacles = Obstacles::generate(
            &mut self.rng,
            self.grid,
            consts::OBSTACLE_COUNT,
            self.snake.cells(),
            self.item.position,
        );
        self.speed = consts::BASE_SPEED;
        self.background = consts::DEFAULT_BACKGROUND;
        self.last_tick = now;
        tracing::info!(
            head = ?self.snake.head(),
            direction = ?self.snake.direction(),
            item = ?self.item.position,
            obstacles = self.obstacles.len(),
            "starting new round"
        );
        self.set_screen(Screen::Playing);
    }

    fn tick(&mut self, now: Instant) {
        self.last_tick = now;
        match self
            .snake
            .advance(self.grid, Some(self.item.position), &self.obstacles)
        {
            Advance::Moved => (),
            Advance::Grew => self.eat(),
            Advance::Collided(cause) => {
                tracing::info!(
                    score = self.snake.score(),
                    length = self.snake.len(),
                    %cause,
                    "snake crashed"
                );
                self.set_screen(Screen::GameOver(cause));
            }
        }
    }

    /// Everything that changes when the snake eats the item
    fn eat(&mut self) {
        self.speed += consts::SPEED_INCREMENT;
        self.item.place_random(
            &mut self.rng,
            self.grid,
            Some(self.snake.cells()),
            Some(&self.obstacles),
        );
        self.item.recolor(&mut self.rng);
        let body = palette::pick(&mut self.rng);
        let head = palette::pick(&mut self.rng);
        self.snake.set_colors(head, body);
        self.background = palette::pick_other(&mut self.rng, self.background);
        self.obstacles = Obstacles::generate(
            &mut self.rng,
            self.grid,
            consts::OBSTACLE_COUNT,
            self.snake.cells(),
            self.item.position,
        );
        tracing::info!(
            score = self.snake.score(),
            speed = self.speed,
            item = ?self.item.position,
            "snake ate the item"
        );
    }

    fn set_screen(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.screen, to = ?screen, "changing screen");
        self.screen = screen;
    }
}

impl<R> Session<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>, now: Instant) {
        frame.render_widget(SessionView { session: self, now }, frame.area());
    }

    /// Draw the field, with the snake `progress` of the way through its
    /// latest move
    fn render_field(&self, area: Rect, buf: &mut Buffer, progress: f64) {
        let (score_area, view) = field_layout(area, self.grid);
        Line::styled(
            format!(" Score: {}", self.snake.score()),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);
        let mut raster = Raster::new(view, self.background);
        raster.fill_cell(Point::from(self.item.position), self.item.color);
        for &p in &self.obstacles {
            raster.fill_cell(Point::from(p), consts::OBSTACLE_COLOR);
        }
        let points = interpolate(self.snake.previous(), self.snake.cells(), progress);
        for (i, &p) in points.iter().enumerate().rev() {
            let color = if i == 0 {
                self.snake.head_color()
            } else {
                self.snake.body_color()
            };
            raster.fill_cell(p, color);
        }
        if let Some(&head) = points.first() {
            raster.draw_eyes(head, self.snake.direction(), consts::EYE_COLOR);
        }
        raster.render(area, buf);
    }
}

/// Pick the direction towards a point offset `(dx, dy)` from the center of
/// the snake's head
fn steering_direction(dx: f64, dy: f64) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    } else if dy > 0.0 {
        Direction::South
    } else {
        Direction::North
    }
}

/// Split `area` into the score bar and the playing field
fn field_layout(area: Rect, grid: Grid) -> (Rect, FieldView) {
    let [score_area, field_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    (score_area, FieldView::new(field_area, grid))
}

/// A widget for drawing a [`Session`] as of a given moment
#[derive(Debug)]
pub(crate) struct SessionView<'a, R> {
    session: &'a Session<R>,
    now: Instant,
}

impl<R> Widget for SessionView<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.session;
        match session.screen {
            Screen::Menu => MainMenu.render(get_display_area(area), buf),
            Screen::Playing => {
                let since = self.now.saturating_duration_since(session.last_tick);
                session.render_field(area, buf, progress(since, session.speed));
            }
            Screen::GameOver(cause) => {
                session.render_field(area, buf, 1.0);
                let popup_area = center_rect(
                    area,
                    Size {
                        width: GameOver::WIDTH,
                        height: GameOver::HEIGHT,
                    },
                );
                Clear.render(popup_area, buf);
                GameOver {
                    score: session.snake.score(),
                    cause,
                }
                .render(popup_area, buf);
            }
        }
    }
}
