//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width of the logical playing field, in logical units
pub(crate) const SCREEN_WIDTH: u16 = 800;

/// Height of the logical playing field, in logical units
pub(crate) const SCREEN_HEIGHT: u16 = 600;

/// Edge length of one grid cell, in logical units
pub(crate) const CELL_SIZE: u16 = 20;

/// Number of cells in the playing field
pub(crate) const GRID_SIZE: Size = Size {
    width: SCREEN_WIDTH / CELL_SIZE,
    height: SCREEN_HEIGHT / CELL_SIZE,
};

/// Draw menus inside a rectangle of this size in the center of the terminal
/// window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Upper bound on how often the screen is redrawn
pub(crate) const FRAME_PERIOD: Duration = Duration::from_micros(1_000_000 / 60);

/// Snake movements per second at the start of a round
pub(crate) const BASE_SPEED: f64 = 5.0;

/// How much the speed goes up each time the snake eats an item
pub(crate) const SPEED_INCREMENT: f64 = 0.5;

/// Snake length at the start of a round
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Number of obstacles on the field at any one time
pub(crate) const OBSTACLE_COUNT: usize = 5;

/// Random cells tried when placing an item or obstacle before falling back
/// to scanning the grid for a free cell
pub(crate) const PLACEMENT_ATTEMPTS: usize = 64;

pub(crate) const GREEN: Color = Color::Rgb(50, 150, 50);
pub(crate) const DARK_GREEN: Color = Color::Rgb(30, 100, 30);
pub(crate) const RED: Color = Color::Rgb(200, 30, 30);
pub(crate) const BROWN: Color = Color::Rgb(139, 69, 19);
pub(crate) const LIGHT_BROWN: Color = Color::Rgb(160, 82, 45);
pub(crate) const WHITE: Color = Color::Rgb(255, 255, 255);
pub(crate) const BLACK: Color = Color::Rgb(0, 0, 0);

/// Colors that items, the snake, and the background are randomly drawn from
pub(crate) const PALETTE: [Color; 8] = [
    GREEN,
    DARK_GREEN,
    RED,
    BROWN,
    LIGHT_BROWN,
    Color::Rgb(255, 255, 0),
    Color::Rgb(0, 255, 255),
    Color::Rgb(255, 0, 255),
];

/// Background color of the field at the start of a round
pub(crate) const DEFAULT_BACKGROUND: Color = GREEN;

/// Color of the snake's body at the start of a round
pub(crate) const DEFAULT_BODY_COLOR: Color = DARK_GREEN;

/// Color of the snake's head at the start of a round
pub(crate) const DEFAULT_HEAD_COLOR: Color = WHITE;

/// Color of the item when the process starts
pub(crate) const DEFAULT_ITEM_COLOR: Color = RED;

/// Color of the eyes drawn on the snake's head when the field is big enough
pub(crate) const EYE_COLOR: Color = BLACK;

pub(crate) const OBSTACLE_COLOR: Color = Color::Rgb(100, 100, 100);

/// Glyph used to draw two vertically-stacked pixels in one terminal cell
pub(crate) const HALF_BLOCK_SYMBOL: &str = "▀";

/// Style for the title on the main menu
pub(crate) const TITLE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the "GAME OVER" banner
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
