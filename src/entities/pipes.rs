//! Pipe pairs: scrolling obstacles with a fixed gap between upper and lower.

use super::{Entity, Hitbox};
use crate::assets::Sprite;
use crate::core::config::GameConfig;
use crate::core::constants::{PIPE_CLEARANCE, PIPE_SPAWN_OFFSET};
use crate::ui::Surface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Pipe {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    /// Rows at or below this line are hidden behind the floor.
    floor_y: i32,
    image: Rc<Sprite>,
}

impl Pipe {
    fn new(x: f64, y: f64, speed: f64, floor_y: i32, image: Rc<Sprite>) -> Self {
        Self {
            x,
            y,
            width: image.width() as f64,
            height: image.height() as f64,
            speed,
            floor_y,
            image,
        }
    }

    /// Horizontal centre.
    pub fn cx(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }

    pub fn image(&self) -> &Sprite {
        &self.image
    }
}

impl Entity for Pipe {
    fn tick(&mut self, surface: &mut dyn Surface) {
        self.x -= self.speed;
        surface.blit_above(&self.image, self.x, self.y, self.floor_y);
    }
}

/// Upper and lower pipe sharing one gap. `credited` is set once the player
/// has scored a point for passing it.
#[derive(Debug, Clone)]
pub struct PipePair {
    pub upper: Pipe,
    pub lower: Pipe,
    pub credited: bool,
}

#[derive(Debug)]
pub struct Pipes {
    pub pairs: Vec<PipePair>,
    pub speed: f64,
    pub gap: f64,
    screen_width: f64,
    viewport: f64,
    lower_image: Rc<Sprite>,
    upper_image: Rc<Sprite>,
    rng: StdRng,
}

impl Pipes {
    /// Start with two pairs queued off the right edge, half a screen apart.
    pub fn new<R: Rng>(config: &GameConfig, lower: Sprite, upper: Sprite, rng: &mut R) -> Self {
        let mut pipes = Self {
            pairs: Vec::new(),
            speed: config.pipe_speed,
            gap: config.pipe_gap,
            screen_width: config.width as f64,
            viewport: config.viewport_height(),
            lower_image: Rc::new(lower),
            upper_image: Rc::new(upper),
            rng: StdRng::seed_from_u64(rng.gen()),
        };
        let first = pipes.spawn_x();
        let second = first + pipes.screen_width / 2.0;
        for x in [first, second] {
            let gap_y = pipes.random_gap_y();
            pipes.spawn_pair_at(x, gap_y);
        }
        pipes
    }

    fn spawn_x(&self) -> f64 {
        self.screen_width + PIPE_SPAWN_OFFSET
    }

    fn pipe_width(&self) -> f64 {
        self.lower_image.width() as f64
    }

    fn pipe_height(&self) -> f64 {
        self.lower_image.height() as f64
    }

    /// Top of a gap, kept inside the middle 60% of the viewport.
    fn random_gap_y(&mut self) -> f64 {
        let span = ((self.viewport * 0.6 - self.gap) as i64).max(1);
        let base = (self.viewport * 0.2) as i64;
        (self.rng.gen_range(0..span) + base) as f64
    }

    /// Add a pair whose gap starts at `gap_y`.
    pub fn spawn_pair_at(&mut self, x: f64, gap_y: f64) {
        let floor_y = self.viewport.round() as i32;
        let upper = Pipe::new(
            x,
            gap_y - self.pipe_height(),
            self.speed,
            floor_y,
            Rc::clone(&self.upper_image),
        );
        let lower = Pipe::new(
            x,
            gap_y + self.gap,
            self.speed,
            floor_y,
            Rc::clone(&self.lower_image),
        );
        self.pairs.push(PipePair {
            upper,
            lower,
            credited: false,
        });
    }

    /// True once the newest pair is far enough left to make room for another.
    pub fn can_spawn(&self) -> bool {
        match self.pairs.last() {
            None => true,
            Some(last) => {
                let w = self.pipe_width();
                self.screen_width - (last.upper.x + w) > w * PIPE_CLEARANCE
            }
        }
    }

    fn remove_old(&mut self) {
        let w = self.pipe_width();
        self.pairs.retain(|pair| pair.upper.x >= -w);
    }

    /// Freeze every pipe in place.
    pub fn stop(&mut self) {
        self.speed = 0.0;
        for pair in &mut self.pairs {
            pair.upper.speed = 0.0;
            pair.lower.speed = 0.0;
        }
    }

    /// Swap the pipe images, for live pipes and all future spawns.
    pub fn set_images(&mut self, lower: Sprite, upper: Sprite) {
        self.lower_image = Rc::new(lower);
        self.upper_image = Rc::new(upper);
        for pair in &mut self.pairs {
            pair.lower.image = Rc::clone(&self.lower_image);
            pair.upper.image = Rc::clone(&self.upper_image);
        }
    }

    pub fn hitboxes(&self) -> impl Iterator<Item = Hitbox> + '_ {
        self.pairs
            .iter()
            .flat_map(|pair| [pair.upper.hitbox(), pair.lower.hitbox()])
    }
}

impl Entity for Pipes {
    fn tick(&mut self, surface: &mut dyn Surface) {
        if self.speed > 0.0 && self.can_spawn() {
            let x = self.spawn_x();
            let gap_y = self.random_gap_y();
            self.spawn_pair_at(x, gap_y);
        }
        self.remove_old();
        for pair in &mut self.pairs {
            pair.upper.tick(surface);
            pair.lower.tick(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Glyph;
    use crate::ui::Canvas;
    use rand_chacha::ChaCha8Rng;
    use ratatui::style::Color;

    fn pipes(seed: u64) -> Pipes {
        let image = Sprite::filled(4, 19, Glyph::fill(Color::Green));
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Pipes::new(&GameConfig::default(), image.clone(), image, &mut rng)
    }

    #[test]
    fn test_initial_pairs() {
        let pipes = pipes(1);
        assert_eq!(pipes.pairs.len(), 2);
        assert!((pipes.pairs[0].upper.x - 41.5).abs() < f64::EPSILON);
        assert!((pipes.pairs[1].upper.x - 61.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gap_is_constant_and_in_range() {
        for seed in 0..20 {
            let pipes = pipes(seed);
            for pair in &pipes.pairs {
                let gap_top = pair.upper.y + pair.upper.height;
                assert!((pair.lower.y - gap_top - pipes.gap).abs() < 1e-9);
                assert!((3.0..=7.0).contains(&gap_top), "gap_top {}", gap_top);
            }
        }
    }

    #[test]
    fn test_spawns_at_most_one_pair_per_tick() {
        let mut pipes = pipes(2);
        let mut canvas = Canvas::new(40, 24);
        let mut previous = pipes.pairs.len();
        for _ in 0..400 {
            pipes.tick(&mut canvas);
            let now = pipes.pairs.len();
            assert!(now <= previous + 1);
            previous = now;
        }
    }

    #[test]
    fn test_spacing_between_spawns_is_constant() {
        let mut pipes = pipes(3);
        let mut canvas = Canvas::new(40, 24);
        for _ in 0..300 {
            pipes.tick(&mut canvas);
        }
        let xs: Vec<f64> = pipes.pairs.iter().map(|p| p.upper.x).collect();
        let spacing: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        // Skip the hand-placed opening pair; spawned ones are evenly spaced.
        let spawned = &spacing[spacing.len().saturating_sub(2)..];
        for gap in spawned {
            assert!((gap - spawned[0]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_old_pairs_are_removed() {
        let mut pipes = pipes(4);
        let mut canvas = Canvas::new(40, 24);
        for _ in 0..200 {
            pipes.tick(&mut canvas);
            assert!(pipes.pairs.iter().all(|p| p.upper.x >= -4.0 - 0.75));
        }
    }

    #[test]
    fn test_stop_freezes_all_pipes() {
        let mut pipes = pipes(5);
        let mut canvas = Canvas::new(40, 24);
        pipes.stop();
        let before: Vec<f64> = pipes.pairs.iter().map(|p| p.lower.x).collect();
        pipes.tick(&mut canvas);
        let after: Vec<f64> = pipes.pairs.iter().map(|p| p.lower.x).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_images_updates_live_pipes() {
        let mut pipes = pipes(6);
        let red = Sprite::filled(4, 19, Glyph::fill(Color::Red));
        pipes.set_images(red.clone(), red.flipped_vertical());
        assert!(pipes.pairs.iter().all(|p| *p.lower.image() == red));
    }

    #[test]
    fn test_lower_pipe_hidden_behind_floor() {
        let mut pipes = pipes(7);
        pipes.pairs.clear();
        pipes.spawn_pair_at(10.75, 5.0);
        let mut canvas = Canvas::new(40, 24);
        pipes.stop();
        pipes.tick(&mut canvas);
        assert_eq!(canvas.cell(11, 18).map(|c| c.bg), Some(Color::Green));
        assert_eq!(canvas.cell(11, 19).map(|c| c.bg), Some(Color::Reset));
    }
}
