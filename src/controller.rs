//! Level, score and difficulty bookkeeping, plus ownership of the enemy and
//! treat collections.
//!
//! Randomness always comes through an injected `Rng` so callers control
//! determinism (tests seed a `StdRng`).

use log::{debug, info, trace};
use rand::Rng;

use crate::constants::{
    column_x, row_y, CANVAS_WIDTH, COLUMNS, ENEMY_ROWS, FIRST_ENEMY_ROW, FIRST_TREAT_ROW,
    MAX_TREATS, TREAT_ROWS,
};
use crate::entities::{Enemy, Treat, TreatId, TreatKind};
use crate::render::Scoreboard;

// ── Difficulty steps ──────────────────────────────────────────────────────────

const ENEMY_COUNT_EVERY: u32 = 5;
const SPEED_UP_EVERY: u32 = 2;
const MAX_SPEED_STEP: f32 = 10.0;
const MIN_SPEED_STEP: f32 = 5.0;
const POINTS_PER_CROSSING: u32 = 1;
const POINTS_PER_TREAT: u32 = 1;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Starting difficulty for a fresh game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub enemy_count: usize,
    /// Enemy speed range in px/sec; speeds are drawn from `min_speed..max_speed`.
    pub max_speed: f32,
    pub min_speed: f32,
    pub treat_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            enemy_count: 3,
            max_speed: 200.0,
            min_speed: 100.0,
            treat_count: 1,
        }
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct GameStateController {
    pub level: u32,
    pub score: u32,
    pub enemy_count: usize,
    pub max_speed: f32,
    pub min_speed: f32,
    pub treat_count: usize,
    pub enemies: Vec<Enemy>,
    pub treats: Vec<Treat>,
    next_treat_id: u64,
}

impl GameStateController {
    /// A level-1 controller with empty collections; call `regenerate` to fill the board.
    pub fn new(config: &GameConfig) -> Self {
        let min_speed = config.min_speed.max(0.0);
        GameStateController {
            level: 1,
            score: 0,
            enemy_count: config.enemy_count,
            max_speed: config.max_speed.max(min_speed),
            min_speed,
            treat_count: config.treat_count.min(MAX_TREATS),
            enemies: Vec::new(),
            treats: Vec::new(),
            next_treat_id: 0,
        }
    }

    /// Spawn `enemy_count` bugs, dealt round-robin across the three stone lanes.
    pub fn generate_enemies(&mut self, rng: &mut impl Rng) {
        for i in 0..self.enemy_count {
            let row = FIRST_ENEMY_ROW + i % ENEMY_ROWS;
            let x = rng.gen_range(0.0..CANVAS_WIDTH);
            let speed = self.random_speed(rng);
            self.enemies.push(Enemy::new(x, row_y(row), speed));
        }
    }

    fn random_speed(&self, rng: &mut impl Rng) -> f32 {
        if self.max_speed > self.min_speed {
            rng.gen_range(self.min_speed..self.max_speed)
        } else {
            self.min_speed
        }
    }

    /// Scatter `treat_count` treats over distinct cells between the water and
    /// the player's start row. Ordered top row first so lower treats draw over
    /// the ones behind them.
    pub fn generate_treats(&mut self, rng: &mut impl Rng) {
        let count = self.treat_count.min(MAX_TREATS);

        let mut cells: Vec<(usize, usize)> = Vec::with_capacity(count);
        while cells.len() < count {
            let cell = (
                rng.gen_range(0..COLUMNS),
                rng.gen_range(FIRST_TREAT_ROW..FIRST_TREAT_ROW + TREAT_ROWS),
            );
            if !cells.contains(&cell) {
                cells.push(cell);
            }
        }
        cells.sort_by_key(|&(_, row)| row);

        for (column, row) in cells {
            let kind = TreatKind::ALL[rng.gen_range(0..TreatKind::ALL.len())];
            let id = TreatId(self.next_treat_id);
            self.next_treat_id += 1;
            self.treats
                .push(Treat::new(id, column_x(column), row_y(row), kind));
        }
    }

    /// Throw away the current board and build a new one from the current difficulty.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        self.enemies.clear();
        self.treats.clear();
        self.generate_enemies(rng);
        self.generate_treats(rng);
        trace!(
            "board regenerated: {} enemies, {} treats",
            self.enemies.len(),
            self.treats.len()
        );
    }

    /// Remove the treat with `id` and score it.
    ///
    /// Returns `false` (and scores nothing) when that treat is already gone.
    pub fn collect_treat(&mut self, id: TreatId, display: &mut impl Scoreboard) -> bool {
        let Some(index) = self.treats.iter().position(|t| t.id == id) else {
            return false;
        };
        let treat = self.treats.remove(index);
        debug!("collected {:?} at ({}, {})", treat.kind, treat.x, treat.y);
        self.update_score(POINTS_PER_TREAT, display);
        true
    }

    /// Advance one level: award the crossing, raise the difficulty on its
    /// schedule and rebuild the board.
    pub fn level_up(&mut self, rng: &mut impl Rng, display: &mut impl Scoreboard) {
        self.level += 1;
        info!("level {}", self.level);
        display.show_level(self.level);
        self.update_score(POINTS_PER_CROSSING, display);

        if self.level % ENEMY_COUNT_EVERY == 0 {
            self.enemy_count += 1;
            info!("level {}: enemy count now {}", self.level, self.enemy_count);
        }

        if self.level % SPEED_UP_EVERY == 0 {
            self.max_speed += MAX_SPEED_STEP;
            self.min_speed += MIN_SPEED_STEP;
            if self.treat_count < MAX_TREATS {
                self.treat_count += 1;
            }
            info!(
                "level {}: enemy speed now {}..{}, {} treats",
                self.level, self.min_speed, self.max_speed, self.treat_count
            );
        }

        self.regenerate(rng);
    }

    pub fn update_score(&mut self, points: u32, display: &mut impl Scoreboard) {
        self.score += points;
        display.show_score(self.score);
    }
}
