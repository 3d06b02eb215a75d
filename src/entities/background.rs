use super::Entity;
use crate::assets::Sprite;
use crate::ui::Surface;

/// Static full-screen backdrop.
#[derive(Debug, Clone)]
pub struct Background {
    image: Sprite,
}

impl Background {
    pub fn new(image: Sprite) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &Sprite {
        &self.image
    }

    pub fn set_image(&mut self, image: Sprite) {
        self.image = image;
    }
}

impl Entity for Background {
    fn tick(&mut self, surface: &mut dyn Surface) {
        surface.blit(&self.image, 0.0, 0.0);
    }
}
