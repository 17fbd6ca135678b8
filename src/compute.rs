//! Per-frame game logic.
//!
//! `GameState` owns the player and the controller; the frame driver owns the
//! `GameState` and calls `handle_input` for each queued key, then `update`
//! once per frame. Everything runs synchronously on the caller's thread.

use log::debug;
use rand::Rng;

use crate::constants::{
    ASSET_HEIGHT, CANVAS_HEIGHT, CANVAS_WIDTH, CHARACTER_VERT_OFFSET, COLUMN_WIDTH, ROW_HEIGHT,
};
use crate::controller::{GameConfig, GameStateController};
use crate::entities::{Enemy, Player, Treat, TreatId};
use crate::geometry::overlaps;
use crate::input::Direction;
use crate::render::Scoreboard;

// ── Enemy ─────────────────────────────────────────────────────────────────────

impl Enemy {
    /// Move right by `speed * dt`, wrapping to just off the left edge once past
    /// the right one. Returns whether the bug is now touching the player.
    pub fn update(&mut self, dt: f32, player: &Player) -> bool {
        self.x += self.speed * dt;

        if self.is_off_stage() {
            self.x = -COLUMN_WIDTH;
        }

        self.collided_with(player)
    }

    pub fn is_off_stage(&self) -> bool {
        self.x >= CANVAS_WIDTH
    }

    pub fn collided_with(&self, player: &Player) -> bool {
        overlaps(
            &Enemy::HIT_BOX,
            self.position(),
            &Player::HIT_BOX,
            player.position(),
        )
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

impl Player {
    /// Aim one tile away in `direction`. `None` leaves the goal alone.
    pub fn handle_input(&mut self, direction: Option<Direction>) {
        match direction {
            Some(Direction::Left) => self.goal_x = self.x - COLUMN_WIDTH,
            Some(Direction::Up) => self.goal_y = self.y - ROW_HEIGHT,
            Some(Direction::Right) => self.goal_x = self.x + COLUMN_WIDTH,
            Some(Direction::Down) => self.goal_y = self.y + ROW_HEIGHT,
            None => {}
        }
    }

    /// Step onto the goal tile where it lies on the board.
    ///
    /// Returns `true` when the step reached the water. The player has already
    /// been sent back to the start by then; the caller levels up.
    pub fn update(&mut self) -> bool {
        if self.is_valid_goal_x() {
            self.x = self.goal_x;
        }
        if self.is_valid_goal_y() {
            self.y = self.goal_y;
        }

        if self.is_in_the_water() {
            self.reset();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.x = self.start_x;
        self.y = self.start_y;
        self.goal_x = self.x;
        self.goal_y = self.y;
    }

    pub fn is_valid_goal_x(&self) -> bool {
        self.goal_x >= 0.0 && self.goal_x < CANVAS_WIDTH
    }

    pub fn is_valid_goal_y(&self) -> bool {
        self.goal_y >= CHARACTER_VERT_OFFSET && self.goal_y < CANVAS_HEIGHT - ASSET_HEIGHT
    }

    pub fn is_in_the_water(&self) -> bool {
        self.y == CHARACTER_VERT_OFFSET
    }
}

// ── Treat ─────────────────────────────────────────────────────────────────────

impl Treat {
    /// The id to collect if the player is standing on this treat.
    pub fn update(&self, player: &Player) -> Option<TreatId> {
        overlaps(
            &Treat::HIT_BOX,
            self.position(),
            &Player::HIT_BOX,
            player.position(),
        )
        .then_some(self.id)
    }
}

// ── Game state ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub controller: GameStateController,
    /// Draw asset and hit rectangles over every entity.
    pub debug: bool,
}

impl GameState {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_config(&GameConfig::default(), rng)
    }

    /// Level 1 with a freshly generated board.
    pub fn with_config(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut controller = GameStateController::new(config);
        controller.regenerate(rng);
        GameState {
            player: Player::default(),
            controller,
            debug: false,
        }
    }

    /// Push the starting score and level to the displays.
    pub fn announce(&self, display: &mut impl Scoreboard) {
        display.show_score(self.controller.score);
        display.show_level(self.controller.level);
    }

    pub fn handle_input(&mut self, direction: Option<Direction>) {
        self.player.handle_input(direction);
    }

    /// Advance one frame: enemies, then the player, then treats.
    ///
    /// A level-up triggered by the player replaces both collections before
    /// the treats are checked, so the treat pass sees the new board.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng, display: &mut impl Scoreboard) {
        for enemy in self.controller.enemies.iter_mut() {
            if enemy.update(dt, &self.player) {
                debug!("player hit by bug at ({:.0}, {:.0})", enemy.x, enemy.y);
                self.player.reset();
            }
        }

        if self.player.update() {
            self.controller.level_up(rng, display);
        }

        let collected: Vec<TreatId> = self
            .controller
            .treats
            .iter()
            .filter_map(|treat| treat.update(&self.player))
            .collect();
        for id in collected {
            self.controller.collect_treat(id, display);
        }
    }
}
