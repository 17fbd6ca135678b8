//! Board geometry, in canvas pixels.

// Canvas
pub const CANVAS_WIDTH: f32 = 505.0;
pub const CANVAS_HEIGHT: f32 = 606.0;

// Every sprite image is one column wide and overlaps the row below it.
pub const ASSET_WIDTH: f32 = 101.0;
pub const ASSET_HEIGHT: f32 = 171.0;

// Grid cells
pub const COLUMN_WIDTH: f32 = ASSET_WIDTH;
pub const ROW_HEIGHT: f32 = 83.0;
pub const COLUMNS: usize = 5;
pub const ROWS: usize = 6;

/// Shift applied to character-style sprites so they sit on top of the tiles.
pub const CHARACTER_VERT_OFFSET: f32 = -32.0;

// Rows by purpose
pub const WATER_ROW: usize = 0;
pub const FIRST_ENEMY_ROW: usize = 1;
pub const ENEMY_ROWS: usize = 3;
pub const PLAYER_START_COLUMN: usize = 2;
pub const PLAYER_START_ROW: usize = 5;

/// Treats go on every row except the water and the player's start row.
pub const FIRST_TREAT_ROW: usize = 1;
pub const TREAT_ROWS: usize = 4;
pub const MAX_TREATS: usize = COLUMNS * TREAT_ROWS;

/// Pixel x of a grid column.
pub fn column_x(column: usize) -> f32 {
    column as f32 * COLUMN_WIDTH
}

/// Pixel y of a character standing on a grid row.
pub fn row_y(row: usize) -> f32 {
    row as f32 * ROW_HEIGHT + CHARACTER_VERT_OFFSET
}
