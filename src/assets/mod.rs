//! Sprite assets and the score tiers that select them.
//!
//! Images are looked up by name through an `AssetSource`. Each tier bundle
//! names a background, the two pipe images and three wing frames for the
//! player.

pub mod builtin;
pub mod sprite;
pub mod sprite_dir;

pub use builtin::BuiltinAssets;
pub use sprite::{Glyph, Sprite};
pub use sprite_dir::SpriteDir;

use std::io;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no sprite named '{0}'")]
    NotFound(String),
    #[error("failed to read sprite '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("sprite '{name}' is malformed: {reason}")]
    Malformed { name: String, reason: String },
}

/// Resolves sprite names to images.
pub trait AssetSource {
    fn load(&self, name: &str) -> Result<Sprite, AssetError>;
}

impl<A: AssetSource + ?Sized> AssetSource for Box<A> {
    fn load(&self, name: &str) -> Result<Sprite, AssetError> {
        (**self).load(name)
    }
}

/// Names of the images making up one cosmetic tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBundle {
    pub background: &'static str,
    pub pipe_lower: &'static str,
    /// When equal to `pipe_lower`, the upper pipe is its vertical flip.
    pub pipe_upper: &'static str,
    pub player: [&'static str; 3],
}

/// Tier 0 is the opening look; tiers 1.. rotate as the score climbs.
pub const TIERS: [TierBundle; 3] = [
    TierBundle {
        background: "background-day",
        pipe_lower: "pipe-green",
        pipe_upper: "pipe-green",
        player: ["yellowbird-upflap", "yellowbird-midflap", "yellowbird-downflap"],
    },
    TierBundle {
        background: "background-night",
        pipe_lower: "pipe-red",
        pipe_upper: "pipe-red",
        player: ["redbird-upflap", "redbird-midflap", "redbird-downflap"],
    },
    TierBundle {
        background: "background-day",
        pipe_lower: "pipe-green",
        pipe_upper: "pipe-green",
        player: ["bluebird-upflap", "bluebird-midflap", "bluebird-downflap"],
    },
];

pub const FLOOR_SPRITE: &str = "base";
pub const WELCOME_SPRITE: &str = "message";
pub const GAME_OVER_SPRITE: &str = "gameover";

/// Bundle for `tier`, clamped to the last one.
pub fn bundle(tier: usize) -> &'static TierBundle {
    &TIERS[tier.min(TIERS.len() - 1)]
}

/// Lower and upper pipe images for a bundle.
pub fn load_pipe_pair(
    assets: &dyn AssetSource,
    bundle: &TierBundle,
) -> Result<(Sprite, Sprite), AssetError> {
    let lower = assets.load(bundle.pipe_lower)?;
    let upper = if bundle.pipe_upper == bundle.pipe_lower {
        lower.flipped_vertical()
    } else {
        assets.load(bundle.pipe_upper)?
    };
    Ok((lower, upper))
}

/// The player's wing frames for a bundle, in animation order.
pub fn load_player_frames(
    assets: &dyn AssetSource,
    bundle: &TierBundle,
) -> Result<Vec<Sprite>, AssetError> {
    bundle.player.iter().map(|name| assets.load(name)).collect()
}

/// Load `name`, or log and substitute a placeholder of the given size.
pub fn load_or_placeholder(
    assets: &dyn AssetSource,
    name: &str,
    width: u16,
    height: u16,
) -> Sprite {
    assets.load(name).unwrap_or_else(|e| {
        warn!(sprite = name, error = %e, "using placeholder sprite");
        Sprite::placeholder(width, height)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Only(&'static str);

    impl AssetSource for Only {
        fn load(&self, name: &str) -> Result<Sprite, AssetError> {
            if name == self.0 {
                Ok(Sprite::from_art(&["▄▄", "██"], None, None))
            } else {
                Err(AssetError::NotFound(name.to_string()))
            }
        }
    }

    #[test]
    fn test_tier_zero_is_the_day_look() {
        assert_eq!(TIERS[0].background, "background-day");
        assert_eq!(TIERS[0].player[0], "yellowbird-upflap");
    }

    #[test]
    fn test_bundle_clamps() {
        assert_eq!(bundle(99), &TIERS[TIERS.len() - 1]);
    }

    #[test]
    fn test_upper_pipe_is_flipped_lower() {
        let (lower, upper) = load_pipe_pair(&Only("pipe-green"), &TIERS[0]).unwrap();
        assert_eq!(upper, lower.flipped_vertical());
    }

    #[test]
    fn test_player_frames_fail_as_a_unit() {
        assert!(load_player_frames(&Only("yellowbird-upflap"), &TIERS[0]).is_err());
    }

    #[test]
    fn test_placeholder_on_missing() {
        let sprite = load_or_placeholder(&Only("x"), "missing", 3, 1);
        assert_eq!(sprite, Sprite::placeholder(3, 1));
    }
}
