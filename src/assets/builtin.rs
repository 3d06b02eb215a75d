//! Built-in sprite set drawn with terminal characters.
//!
//! Backgrounds, pipes and the floor are generated to fit the configured
//! screen; birds and banners are fixed text art.

use super::{AssetError, AssetSource, Glyph, Sprite};
use crate::core::config::GameConfig;
use crate::core::constants::{FLOOR_EXTRA_WIDTH, PIPE_WIDTH};
use ratatui::style::Color;

const WELCOME_ART: [&str; 5] = [
    "╔═══════════════╗",
    "║   GET READY   ║",
    "╚═══════════════╝",
    "",
    " SPACE  to  flap ",
];

const GAME_OVER_ART: [&str; 3] = [
    "╔═══════════════╗",
    "║   GAME OVER   ║",
    "╚═══════════════╝",
];

struct SkyPalette {
    sky: Color,
    cloud: Color,
    city: Color,
    window: Color,
    bush: Color,
    stars: bool,
}

const DAY: SkyPalette = SkyPalette {
    sky: Color::Rgb(78, 192, 202),
    cloud: Color::Rgb(233, 252, 217),
    city: Color::Rgb(160, 215, 190),
    window: Color::Rgb(120, 180, 160),
    bush: Color::Rgb(94, 226, 112),
    stars: false,
};

const NIGHT: SkyPalette = SkyPalette {
    sky: Color::Rgb(0, 135, 147),
    cloud: Color::Rgb(28, 158, 168),
    city: Color::Rgb(10, 80, 100),
    window: Color::Rgb(250, 220, 90),
    bush: Color::Rgb(16, 120, 70),
    stars: true,
};

/// Skyline profile, repeated every eight three-column blocks.
const BUILDING_HEIGHTS: [u16; 8] = [3, 2, 3, 1, 2, 3, 2, 1];

#[derive(Debug, Clone)]
pub struct BuiltinAssets {
    width: u16,
    height: u16,
    viewport: u16,
}

impl BuiltinAssets {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            viewport: config.viewport_height().round() as u16,
        }
    }

    fn background(&self, palette: &SkyPalette) -> Sprite {
        let mut sprite = Sprite::filled(self.width, self.height, Glyph::fill(palette.sky));
        let v = self.viewport;

        if palette.stars {
            for y in 0..v.saturating_sub(6) {
                for x in 0..self.width {
                    if (x as u32 * 7 + y as u32 * 13) % 31 == 0 {
                        let star = Glyph::new('·', Some(Color::White), Some(palette.sky));
                        sprite.set(x, y, Some(star));
                    }
                }
            }
        }

        // Cloud bank: scalloped top row over a solid row
        let cloud_top = v.saturating_sub(5);
        for x in 0..self.width {
            if (1..=4).contains(&(x % 6)) {
                sprite.set(x, cloud_top, Some(Glyph::fill(palette.cloud)));
            }
            sprite.set(x, cloud_top + 1, Some(Glyph::fill(palette.cloud)));
        }

        // Skyline
        for x in 0..self.width {
            let tall = BUILDING_HEIGHTS[(x as usize / 3) % BUILDING_HEIGHTS.len()];
            for row in 0..tall {
                let y = v.saturating_sub(2 + row);
                let glyph = if x % 3 == 1 && row % 2 == 0 {
                    Glyph::new('▪', Some(palette.window), Some(palette.city))
                } else {
                    Glyph::fill(palette.city)
                };
                sprite.set(x, y, Some(glyph));
            }
        }

        // Bushes along the ground line
        let bush = Glyph::new('▄', Some(palette.bush), Some(palette.city));
        for x in 0..self.width {
            sprite.set(x, v.saturating_sub(1), Some(bush));
        }
        sprite
    }

    fn pipe(&self, body: Color, cap: Color) -> Sprite {
        let mut sprite = Sprite::new(PIPE_WIDTH, self.viewport.max(2));
        for x in 0..PIPE_WIDTH {
            sprite.set(x, 0, Some(Glyph::new('█', Some(cap), None)));
        }
        for y in 1..sprite.height() {
            for x in 0..PIPE_WIDTH {
                let ch = match x {
                    0 => '▐',
                    x if x == PIPE_WIDTH - 1 => '▌',
                    _ => '█',
                };
                sprite.set(x, y, Some(Glyph::new(ch, Some(body), None)));
            }
        }
        sprite
    }

    fn base(&self) -> Sprite {
        let width = self.width + FLOOR_EXTRA_WIDTH;
        let height = self.height.saturating_sub(self.viewport).max(1);
        let sand = Color::Rgb(222, 216, 149);
        let grain = Glyph::new('░', Some(Color::Rgb(200, 190, 120)), Some(sand));
        let mut sprite = Sprite::filled(width, height, grain);
        for x in 0..width {
            let grass = if (x / 2) % 2 == 0 {
                Color::Rgb(115, 191, 46)
            } else {
                Color::Rgb(84, 140, 30)
            };
            sprite.set(x, 0, Some(Glyph::new('▀', Some(grass), Some(sand))));
        }
        sprite
    }
}

/// `<colour>bird-<up|mid|down>flap`
fn bird(name: &str) -> Option<Sprite> {
    let (colour, flap) = name.split_once("bird-")?;
    let fg = match colour {
        "yellow" => Color::Yellow,
        "red" => Color::LightRed,
        "blue" => Color::LightBlue,
        _ => return None,
    };
    let art = match flap {
        "upflap" => "^O>",
        "midflap" => "-O>",
        "downflap" => "vO>",
        _ => return None,
    };
    Some(Sprite::from_art(&[art], Some(fg), None))
}

impl AssetSource for BuiltinAssets {
    fn load(&self, name: &str) -> Result<Sprite, AssetError> {
        let sprite = match name {
            "background-day" => self.background(&DAY),
            "background-night" => self.background(&NIGHT),
            "pipe-green" => self.pipe(Color::Rgb(84, 160, 36), Color::Rgb(150, 220, 80)),
            "pipe-red" => self.pipe(Color::Rgb(190, 50, 40), Color::Rgb(240, 110, 90)),
            "base" => self.base(),
            "message" => Sprite::from_art(&WELCOME_ART, Some(Color::White), None),
            "gameover" => Sprite::from_art(&GAME_OVER_ART, Some(Color::LightRed), None),
            other => bird(other).ok_or_else(|| AssetError::NotFound(other.to_string()))?,
        };
        Ok(sprite)
    }
}
