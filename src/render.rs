//! Seams to the outside world: where sprites get drawn and where the score
//! and level get shown. The game never touches a terminal or a canvas itself.

use crate::compute::GameState;
use crate::constants::{ASSET_HEIGHT, ASSET_WIDTH};
use crate::entities::{Enemy, Player, Sprite, Treat};
use crate::geometry::{HitBox, Position, Rect};

/// Which debug rectangle is being outlined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outline {
    /// The full sprite image.
    Asset,
    HitBox,
}

pub trait Renderer {
    fn draw_sprite(&mut self, sprite: Sprite, pos: Position);

    /// Debug overlay; renderers that can't outline may ignore it.
    fn stroke_rect(&mut self, _rect: Rect, _outline: Outline) {}
}

/// Write-only score and level readouts.
pub trait Scoreboard {
    fn show_score(&mut self, score: u32);
    fn show_level(&mut self, level: u32);
}

fn draw_outlines(renderer: &mut impl Renderer, pos: Position, hit_box: &HitBox) {
    let asset = Rect {
        left: pos.x,
        top: pos.y,
        width: ASSET_WIDTH,
        height: ASSET_HEIGHT,
    };
    renderer.stroke_rect(asset, Outline::Asset);
    renderer.stroke_rect(hit_box.at(pos), Outline::HitBox);
}

impl Enemy {
    pub fn render(&self, renderer: &mut impl Renderer, debug: bool) {
        renderer.draw_sprite(Sprite::EnemyBug, self.position());
        if debug {
            draw_outlines(renderer, self.position(), &Enemy::HIT_BOX);
        }
    }
}

impl Player {
    pub fn render(&self, renderer: &mut impl Renderer, debug: bool) {
        renderer.draw_sprite(Sprite::CharBoy, self.position());
        if debug {
            draw_outlines(renderer, self.position(), &Player::HIT_BOX);
        }
    }
}

impl Treat {
    pub fn render(&self, renderer: &mut impl Renderer, debug: bool) {
        renderer.draw_sprite(self.kind.sprite(), self.position());
        if debug {
            draw_outlines(renderer, self.position(), &Treat::HIT_BOX);
        }
    }
}

/// Draw one frame: treats (top row first), then bugs, then the player on top.
pub fn render(state: &GameState, renderer: &mut impl Renderer) {
    for treat in &state.controller.treats {
        treat.render(renderer, state.debug);
    }
    for enemy in &state.controller.enemies {
        enemy.render(renderer, state.debug);
    }
    state.player.render(renderer, state.debug);
}
