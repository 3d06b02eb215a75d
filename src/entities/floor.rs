//! Scrolling ground strip along the bottom of the screen.

use super::Entity;
use crate::assets::Sprite;
use crate::core::config::GameConfig;
use crate::ui::Surface;

#[derive(Debug, Clone)]
pub struct Floor {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    /// Columns the image extends past the screen; the scroll wraps within them.
    extra: f64,
    image: Sprite,
}

impl Floor {
    pub fn new(config: &GameConfig, image: Sprite) -> Self {
        let extra = (image.width() as f64 - config.width as f64).max(0.0);
        Self {
            x: 0.0,
            y: config.viewport_height(),
            speed: config.floor_speed,
            extra,
            image,
        }
    }

    /// Freeze the scroll (game over).
    pub fn stop(&mut self) {
        self.speed = 0.0;
    }
}

impl Entity for Floor {
    fn tick(&mut self, surface: &mut dyn Surface) {
        if self.extra > 0.0 {
            self.x = -((-self.x + self.speed) % self.extra);
        }
        surface.blit(&self.image, self.x, self.y);
    }
}
