//! Axis-aligned rectangles and the overlap test every entity collides with.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// A rectangle in world pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Inclusive on all four edges: rectangles that only touch still intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left.max(other.left) <= self.right().min(other.right())
            && self.top.max(other.top) <= self.bottom().min(other.bottom())
    }
}

/// Collision rectangle relative to an entity's sprite origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitBox {
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl HitBox {
    pub const fn new(offset_x: f32, offset_y: f32, width: f32, height: f32) -> Self {
        HitBox {
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    /// Translate the box to world coordinates for an entity at `pos`.
    pub fn at(&self, pos: Position) -> Rect {
        Rect {
            left: pos.x + self.offset_x,
            top: pos.y + self.offset_y,
            width: self.width,
            height: self.height,
        }
    }
}

pub fn overlaps(box_a: &HitBox, pos_a: Position, box_b: &HitBox, pos_b: Position) -> bool {
    box_a.at(pos_a).intersects(&box_b.at(pos_b))
}
