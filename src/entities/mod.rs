//! Everything that appears on screen during a run.
//!
//! Each entity owns its own state and sprite and draws itself in `tick`.

pub mod background;
pub mod floor;
pub mod message;
pub mod pipes;
pub mod player;
pub mod score;

pub use background::Background;
pub use floor::Floor;
pub use message::Message;
pub use pipes::{Pipe, PipePair, Pipes};
pub use player::{Obstacle, Player, PlayerMode};
pub use score::Score;

use crate::ui::Surface;

/// Advance one frame and draw.
pub trait Entity {
    fn tick(&mut self, surface: &mut dyn Surface);
}

/// Axis-aligned box in world cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Hitbox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: boxes that only touch along an edge do not collide.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}
