//! Terminal rendering — all terminal I/O lives here.
//!
//! The game draws into an off-screen `TerminalCanvas` through the
//! `Renderer` and `Scoreboard` traits; `present` then writes the finished
//! frame to the terminal in one go.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use bug_crossing::constants::{
    CHARACTER_VERT_OFFSET, COLUMNS, COLUMN_WIDTH, ROWS, ROW_HEIGHT, WATER_ROW,
};
use bug_crossing::entities::Sprite;
use bug_crossing::geometry::{Position, Rect};
use bug_crossing::render::{Outline, Renderer, Scoreboard};

// ── Layout ────────────────────────────────────────────────────────────────────

/// Terminal columns per grid column.
const CELL_W: i32 = 10;
/// Terminal lines per grid row.
const CELL_H: i32 = 3;

const HUD_ROW: u16 = 0;
const BOARD_LEFT: i32 = 1;
const BOARD_TOP: i32 = 2;
const BOARD_W: i32 = COLUMNS as i32 * CELL_W;
const BOARD_H: i32 = ROWS as i32 * CELL_H;

/// Where a tile's walkable face starts below a character's sprite origin.
const LANE_FACE_PX: f32 = 50.0;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_WATER: Color = Color::DarkBlue;
const C_STONE: Color = Color::DarkGrey;
const C_GRASS: Color = Color::DarkGreen;
const C_OUTLINE_ASSET: Color = Color::White;
const C_OUTLINE_HIT: Color = Color::Red;

/// Lane background for a grid row.
fn lane_color(row: usize) -> Color {
    match row {
        WATER_ROW => C_WATER,
        1..=3 => C_STONE,
        _ => C_GRASS,
    }
}

/// Terminal stand-in for each sprite image.
fn sprite_glyph(sprite: Sprite) -> (&'static str, Color) {
    match sprite {
        Sprite::EnemyBug => ("<{oo}=>", Color::Red),
        Sprite::CharBoy => ("\\o/", Color::White),
        Sprite::GemBlue => ("◆", Color::Blue),
        Sprite::GemGreen => ("◆", Color::Green),
        Sprite::GemOrange => ("◆", Color::DarkYellow),
        Sprite::Heart => ("♥", Color::Magenta),
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

pub struct TerminalCanvas {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    score: u32,
    level: u32,
}

impl TerminalCanvas {
    pub fn new() -> Self {
        let width = BOARD_W + 2;
        let height = BOARD_H + 4;
        let blank = Cell {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        };
        TerminalCanvas {
            width,
            height,
            cells: vec![blank; (width * height) as usize],
            score: 0,
            level: 1,
        }
    }

    /// Wipe the previous frame and paint the lanes, border, HUD and hint.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell {
                ch: ' ',
                fg: Color::Reset,
                bg: Color::Reset,
            };
        }

        for line in 0..BOARD_H {
            let bg = lane_color((line / CELL_H) as usize);
            for col in 0..BOARD_W {
                self.set(BOARD_LEFT + col, BOARD_TOP + line, ' ', Color::Reset, Some(bg));
            }
        }

        self.draw_border();
        self.draw_hud();

        let hint = "← ↑ → ↓ / WASD : Move   H : Hitboxes   Q : Quit";
        self.put_str(1, self.height - 1, hint, C_HINT);
    }

    fn draw_border(&mut self) {
        let right = BOARD_LEFT + BOARD_W;
        let bottom = BOARD_TOP + BOARD_H;
        for col in BOARD_LEFT..right {
            self.set(col, BOARD_TOP - 1, '─', C_BORDER, None);
            self.set(col, bottom, '─', C_BORDER, None);
        }
        for line in BOARD_TOP..bottom {
            self.set(0, line, '│', C_BORDER, None);
            self.set(right, line, '│', C_BORDER, None);
        }
        self.set(0, BOARD_TOP - 1, '┌', C_BORDER, None);
        self.set(right, BOARD_TOP - 1, '┐', C_BORDER, None);
        self.set(0, bottom, '└', C_BORDER, None);
        self.set(right, bottom, '┘', C_BORDER, None);
    }

    fn draw_hud(&mut self) {
        let score = format!("Score:{:>5}", self.score);
        self.put_str(1, HUD_ROW as i32, &score, C_HUD_SCORE);

        let level = format!("Level:{:>3}", self.level);
        let lx = self.width - 1 - level.chars().count() as i32;
        self.put_str(lx, HUD_ROW as i32, &level, C_HUD_LEVEL);
    }

    /// Write one character, keeping the lane colour underneath when `bg` is `None`.
    fn set(&mut self, col: i32, row: i32, ch: char, fg: Color, bg: Option<Color>) {
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            return;
        }
        let cell = &mut self.cells[(row * self.width + col) as usize];
        cell.ch = ch;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
    }

    fn put_str(&mut self, col: i32, row: i32, s: &str, fg: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.set(col + i as i32, row, ch, fg, None);
        }
    }

    /// Like `put_str` but clipped to the board interior.
    fn put_on_board(&mut self, col: i32, line: i32, s: &str, fg: Color) {
        if !(0..BOARD_H).contains(&line) {
            return;
        }
        for (i, ch) in s.chars().enumerate() {
            let c = col + i as i32;
            if (0..BOARD_W).contains(&c) {
                self.set(BOARD_LEFT + c, BOARD_TOP + line, ch, fg, None);
            }
        }
    }

    /// Flush the whole frame to the terminal.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        for row in 0..self.height {
            out.queue(cursor::MoveTo(0, row as u16))?;
            let mut fg = Color::Reset;
            let mut bg = Color::Reset;
            out.queue(style::ResetColor)?;
            for col in 0..self.width {
                let cell = self.cells[(row * self.width + col) as usize];
                if cell.fg != fg {
                    out.queue(style::SetForegroundColor(cell.fg))?;
                    fg = cell.fg;
                }
                if cell.bg != bg {
                    out.queue(style::SetBackgroundColor(cell.bg))?;
                    bg = cell.bg;
                }
                out.queue(Print(cell.ch))?;
            }
        }

        // Park cursor in a harmless spot and flush
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.height as u16))?;
        out.flush()?;
        Ok(())
    }
}

// ── Pixel → terminal mapping ──────────────────────────────────────────────────

fn px_to_col(x: f32) -> i32 {
    (x / COLUMN_WIDTH * CELL_W as f32).round() as i32
}

fn px_to_line(y: f32) -> i32 {
    ((y - CHARACTER_VERT_OFFSET - LANE_FACE_PX) / ROW_HEIGHT * CELL_H as f32).round() as i32
}

impl Renderer for TerminalCanvas {
    /// Sprites sit on the middle line of their lane, centred in their column.
    fn draw_sprite(&mut self, sprite: Sprite, pos: Position) {
        let (glyph, color) = sprite_glyph(sprite);
        let row = ((pos.y - CHARACTER_VERT_OFFSET) / ROW_HEIGHT).round() as i32;
        let line = row * CELL_H + CELL_H / 2;
        let len = glyph.chars().count() as i32;
        let col = px_to_col(pos.x) + (CELL_W - len) / 2;
        self.put_on_board(col, line, glyph, color);
    }

    /// Corner marks only; a full outline would bury the sprites at this scale.
    fn stroke_rect(&mut self, rect: Rect, outline: Outline) {
        let (mark, color) = match outline {
            Outline::Asset => ('·', C_OUTLINE_ASSET),
            Outline::HitBox => ('+', C_OUTLINE_HIT),
        };
        let left = px_to_col(rect.left);
        let right = px_to_col(rect.right()) - 1;
        let top = px_to_line(rect.top);
        let bottom = px_to_line(rect.bottom()) - 1;
        for (col, line) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            let mut buf = [0u8; 4];
            self.put_on_board(col, line, mark.encode_utf8(&mut buf), color);
        }
    }
}

impl Scoreboard for TerminalCanvas {
    fn show_score(&mut self, score: u32) {
        self.score = score;
    }

    fn show_level(&mut self, level: u32) {
        self.level = level;
    }
}
