//! The bird: physics for the three movement modes, collision and crossing
//! predicates, and the wing animation.

use super::{Entity, Floor, Hitbox, Pipe, Pipes};
use crate::assets::Sprite;
use crate::core::config::GameConfig;
use crate::core::constants::*;
use crate::ui::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMode {
    /// Hovering up and down on the splash screen.
    Shm,
    Normal,
    /// Falling after a hit.
    Crash,
}

/// What the player ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Floor,
    Pipe,
}

const WING_CYCLE: [usize; 4] = [0, 1, 2, 1];

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub vel_y: f64,
    pub max_vel_y: f64,
    pub min_vel_y: f64,
    pub acc_y: f64,
    pub rot: f64,
    pub vel_rot: f64,
    pub flapped: bool,
    pub mode: PlayerMode,
    pub crashed: Option<Obstacle>,
    /// Upper and lower bounds for `y`.
    pub min_y: f64,
    pub max_y: f64,
    flap_impulse: f64,
    gravity: f64,
    terminal_velocity: f64,
    frame: u64,
    wing_step: usize,
    wings_stopped: bool,
    frames: Vec<Sprite>,
}

impl Player {
    /// Player in splash mode at the left fifth of the screen, vertically centred.
    pub fn new(config: &GameConfig, frames: Vec<Sprite>) -> Self {
        let frames = if frames.is_empty() {
            vec![Sprite::placeholder(3, 1)]
        } else {
            frames
        };
        let h = frames[0].height() as f64;
        let mut player = Self {
            x: (config.width as f64 * PLAYER_X_RATIO).floor(),
            y: ((config.height as f64 - h) / 2.0).floor(),
            vel_y: 0.0,
            max_vel_y: 0.0,
            min_vel_y: 0.0,
            acc_y: 0.0,
            rot: 0.0,
            vel_rot: 0.0,
            flapped: false,
            mode: PlayerMode::Shm,
            crashed: None,
            min_y: -2.0 * h,
            max_y: config.viewport_height() - h * 0.75,
            flap_impulse: config.flap_impulse,
            gravity: config.gravity,
            terminal_velocity: config.terminal_velocity,
            frame: 0,
            wing_step: 0,
            wings_stopped: false,
            frames,
        };
        player.set_mode(PlayerMode::Shm);
        player
    }

    pub fn width(&self) -> f64 {
        self.current_frame().width() as f64
    }

    pub fn height(&self) -> f64 {
        self.current_frame().height() as f64
    }

    /// Horizontal centre.
    pub fn cx(&self) -> f64 {
        self.x + self.width() / 2.0
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width(), self.height())
    }

    fn current_frame(&self) -> &Sprite {
        let idx = WING_CYCLE[self.wing_step] % self.frames.len();
        &self.frames[idx]
    }

    /// Index into the frame list currently shown.
    pub fn frame_index(&self) -> usize {
        WING_CYCLE[self.wing_step] % self.frames.len()
    }

    /// Switch mode and load that mode's physics values.
    pub fn set_mode(&mut self, mode: PlayerMode) {
        self.mode = mode;
        match mode {
            PlayerMode::Normal => {
                self.vel_y = self.flap_impulse;
                self.max_vel_y = self.terminal_velocity;
                self.min_vel_y = self.flap_impulse;
                self.acc_y = self.gravity;
                self.rot = FLAP_ROTATION;
                self.vel_rot = ROTATION_SPEED;
                self.flapped = false;
            }
            PlayerMode::Shm => {
                self.vel_y = HOVER_VELOCITY;
                self.max_vel_y = HOVER_MAX_VELOCITY;
                self.min_vel_y = -HOVER_MAX_VELOCITY;
                self.acc_y = HOVER_ACCELERATION;
                self.frame = 0;
            }
            PlayerMode::Crash => {
                self.wings_stopped = true;
                self.acc_y = CRASH_GRAVITY;
                self.vel_y = CRASH_VELOCITY;
                self.max_vel_y = CRASH_MAX_VELOCITY;
                self.vel_rot = CRASH_ROTATION_SPEED;
            }
        }
    }

    /// Replace the wing frames (tier change). An empty list is ignored.
    pub fn set_frames(&mut self, frames: Vec<Sprite>) {
        if !frames.is_empty() {
            self.frames = frames;
        }
    }

    pub fn frames(&self) -> &[Sprite] {
        &self.frames
    }

    /// Kick upward. Only in normal flight, and not above the top bound.
    pub fn flap(&mut self) {
        if self.mode != PlayerMode::Normal || self.y <= self.min_y {
            return;
        }
        self.vel_y = self.flap_impulse;
        self.flapped = true;
        self.rot = FLAP_ROTATION;
    }

    /// What the player currently hits, floor first. The floor spans the
    /// whole screen whatever its image width, so only height matters there.
    pub fn collision(&self, pipes: &Pipes, floor: &Floor) -> Option<Obstacle> {
        if self.y + self.height() >= floor.y {
            return Some(Obstacle::Floor);
        }
        let hitbox = self.hitbox();
        if pipes.hitboxes().any(|pipe| hitbox.overlaps(&pipe)) {
            return Some(Obstacle::Pipe);
        }
        None
    }

    pub fn collided(&self, pipes: &Pipes, floor: &Floor) -> bool {
        self.collision(pipes, floor).is_some()
    }

    /// Record a hit. The first obstacle sticks.
    pub fn crash(&mut self, obstacle: Obstacle) {
        self.crashed.get_or_insert(obstacle);
    }

    /// True on the single frame where the player's centre passes the pipe's.
    pub fn crossed(&self, pipe: &Pipe) -> bool {
        let cx = self.cx();
        pipe.cx() <= cx && cx < pipe.cx() + pipe.speed
    }

    /// Resting on (or just above) the floor.
    pub fn on_ground(&self, floor: &Floor) -> bool {
        self.y + self.height() >= floor.y - 1.0
    }

    fn update_wings(&mut self) {
        self.frame += 1;
        if !self.wings_stopped && self.frame % WING_FRAME_INTERVAL == 0 {
            self.wing_step = (self.wing_step + 1) % WING_CYCLE.len();
        }
    }

    fn rotate(&mut self) {
        self.rot = (self.rot + self.vel_rot).clamp(ROTATION_MIN, ROTATION_MAX);
    }

    fn tick_shm(&mut self) {
        if self.vel_y >= self.max_vel_y || self.vel_y <= self.min_vel_y {
            self.acc_y = -self.acc_y;
        }
        self.vel_y += self.acc_y;
        self.y += self.vel_y;
    }

    fn tick_normal(&mut self) {
        if self.vel_y < self.max_vel_y && !self.flapped {
            self.vel_y = (self.vel_y + self.acc_y).min(self.max_vel_y);
        }
        self.flapped = false;
        self.y = (self.y + self.vel_y).clamp(self.min_y, self.max_y);
        self.rotate();
    }

    fn tick_crash(&mut self) {
        if (self.min_y..=self.max_y).contains(&self.y) {
            self.y = (self.y + self.vel_y).clamp(self.min_y, self.max_y);
            if self.crashed != Some(Obstacle::Floor) {
                self.rotate();
            }
        }
        if self.vel_y < self.max_vel_y {
            self.vel_y = (self.vel_y + self.acc_y).min(self.max_vel_y);
        }
    }
}

impl Entity for Player {
    fn tick(&mut self, surface: &mut dyn Surface) {
        self.update_wings();
        match self.mode {
            PlayerMode::Shm => self.tick_shm(),
            PlayerMode::Normal => self.tick_normal(),
            PlayerMode::Crash => self.tick_crash(),
        }

        // Nose-down after a pipe hit: draw the bird upside down.
        if self.mode == PlayerMode::Crash && self.rot <= ROTATION_MIN {
            let flipped = self.current_frame().flipped_vertical();
            surface.blit(&flipped, self.x, self.y);
        } else {
            surface.blit(self.current_frame(), self.x, self.y);
        }
    }
}
