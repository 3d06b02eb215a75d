//! Game configuration: screen geometry, frame rate and physics tuning.
//!
//! Every field has a default from `constants`, and a `config.json` in the data
//! directory may override any subset of them.

use crate::core::constants::*;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// Target frame rate. 0 disables pacing (headless runs).
    pub fps: u32,
    pub gravity: f64,
    pub flap_impulse: f64,
    pub terminal_velocity: f64,
    pub pipe_speed: f64,
    pub pipe_gap: f64,
    pub floor_speed: f64,
    /// Directory of `<name>.txt` sprites overriding the built-in art.
    pub asset_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fps: FPS,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            terminal_velocity: TERMINAL_VELOCITY,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            floor_speed: FLOOR_SPEED,
            asset_dir: None,
        }
    }
}

impl GameConfig {
    /// Load from a JSON file, falling back to defaults, then sanitize.
    pub fn load(path: &Path) -> Self {
        load_json_or_default::<GameConfig>(path).sanitized()
    }

    /// Clamp values into ranges the game can actually run with.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.width = self.width.max(MIN_SCREEN_WIDTH);
        self.height = self.height.max(MIN_SCREEN_HEIGHT);
        self.fps = self.fps.min(MAX_FPS);
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            self.gravity = defaults.gravity;
        }
        if !(self.flap_impulse.is_finite() && self.flap_impulse < 0.0) {
            self.flap_impulse = defaults.flap_impulse;
        }
        if !(self.terminal_velocity.is_finite() && self.terminal_velocity > 0.0) {
            self.terminal_velocity = defaults.terminal_velocity;
        }
        if !(self.pipe_speed.is_finite() && self.pipe_speed > 0.0) {
            self.pipe_speed = defaults.pipe_speed;
        }
        if !(self.pipe_gap.is_finite() && self.pipe_gap >= 2.0) {
            self.pipe_gap = defaults.pipe_gap;
        }
        if !(self.floor_speed.is_finite() && self.floor_speed >= 0.0) {
            self.floor_speed = defaults.floor_speed;
        }
        self
    }

    /// Height of the playable area above the floor.
    pub fn viewport_height(&self) -> f64 {
        self.height as f64 * VIEWPORT_RATIO
    }

    /// Same settings with frame pacing disabled.
    pub fn headless(self) -> Self {
        Self { fps: 0, ..self }
    }
}
