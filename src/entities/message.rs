use super::Entity;
use crate::assets::Sprite;
use crate::core::config::GameConfig;
use crate::ui::Surface;

/// A static banner centred horizontally: "get ready" or "game over".
#[derive(Debug, Clone)]
pub struct Message {
    x: f64,
    y: f64,
    image: Sprite,
}

impl Message {
    fn centred(config: &GameConfig, image: Sprite, y_ratio: f64) -> Self {
        Self {
            x: ((config.width as f64 - image.width() as f64) / 2.0).floor(),
            y: (config.height as f64 * y_ratio).floor(),
            image,
        }
    }

    pub fn welcome(config: &GameConfig, image: Sprite) -> Self {
        Self::centred(config, image, 0.12)
    }

    pub fn game_over(config: &GameConfig, image: Sprite) -> Self {
        Self::centred(config, image, 0.2)
    }
}

impl Entity for Message {
    fn tick(&mut self, surface: &mut dyn Surface) {
        surface.blit(&self.image, self.x, self.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Canvas;

    #[test]
    fn test_centred() {
        let mut message = Message::game_over(
            &GameConfig::default(),
            Sprite::from_art(&["OVER"], None, None),
        );
        let mut canvas = Canvas::new(40, 24);
        message.tick(&mut canvas);
        assert_eq!(canvas.row_text(4).trim(), "OVER");
        assert_eq!(canvas.row_text(4).find('O'), Some(18));
    }
}
