//! Every entity of one attempt, built together from the current assets.

use crate::assets::{
    self, load_or_placeholder, AssetSource, Sprite, FLOOR_SPRITE, GAME_OVER_SPRITE,
    WELCOME_SPRITE,
};
use crate::core::config::GameConfig;
use crate::core::constants::{FLOOR_EXTRA_WIDTH, PIPE_WIDTH};
use crate::core::high_score::HighScoreStore;
use crate::core::tier::TierTracker;
use crate::entities::{Background, Floor, Message, Pipes, Player, Score};
use rand::Rng;
use tracing::warn;

pub struct World {
    pub background: Background,
    pub floor: Floor,
    pub player: Player,
    pub pipes: Pipes,
    pub score: Score,
    pub welcome: Message,
    pub game_over: Message,
    pub tiers: TierTracker,
}

impl World {
    /// Fresh entities in the opening tier. Missing sprites become placeholders.
    pub fn new<R: Rng>(
        config: &GameConfig,
        assets: &dyn AssetSource,
        store: &HighScoreStore,
        rng: &mut R,
    ) -> Self {
        let bundle = assets::bundle(0);
        let viewport = config.viewport_height().round() as u16;

        let background =
            load_or_placeholder(assets, bundle.background, config.width, config.height);
        let floor = load_or_placeholder(
            assets,
            FLOOR_SPRITE,
            config.width + FLOOR_EXTRA_WIDTH,
            config.height.saturating_sub(viewport),
        );
        let (lower, upper) = assets::load_pipe_pair(assets, bundle).unwrap_or_else(|e| {
            warn!(error = %e, "using placeholder pipes");
            let pipe = Sprite::placeholder(PIPE_WIDTH, viewport);
            (pipe.clone(), pipe)
        });
        let frames = assets::load_player_frames(assets, bundle).unwrap_or_else(|e| {
            warn!(error = %e, "using placeholder player");
            vec![Sprite::placeholder(3, 1)]
        });

        let welcome = load_or_placeholder(assets, WELCOME_SPRITE, 17, 5);
        let game_over = load_or_placeholder(assets, GAME_OVER_SPRITE, 17, 3);

        Self {
            background: Background::new(background),
            floor: Floor::new(config, floor),
            player: Player::new(config, frames),
            pipes: Pipes::new(config, lower, upper, rng),
            score: Score::new(config, store),
            welcome: Message::welcome(config, welcome),
            game_over: Message::game_over(config, game_over),
            tiers: TierTracker::new(assets::TIERS.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetError, BuiltinAssets};
    use crate::entities::PlayerMode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Nothing;

    impl AssetSource for Nothing {
        fn load(&self, name: &str) -> Result<Sprite, AssetError> {
            Err(AssetError::NotFound(name.to_string()))
        }
    }

    #[test]
    fn test_builds_from_builtin_assets() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let world = World::new(
            &config,
            &BuiltinAssets::new(&config),
            &HighScoreStore::in_dir(dir.path()),
            &mut rng,
        );
        assert_eq!(world.player.mode, PlayerMode::Shm);
        assert_eq!(world.pipes.pairs.len(), 2);
        assert_eq!(world.score.score(), 0);
        assert_eq!(world.tiers.active(), 0);
    }

    #[test]
    fn test_missing_assets_use_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let world = World::new(&config, &Nothing, &HighScoreStore::in_dir(dir.path()), &mut rng);
        assert_eq!(world.background.image(), &Sprite::placeholder(40, 24));
        assert_eq!(world.player.frames().len(), 1);
        assert_eq!(world.pipes.pairs[0].lower.height, 19.0);
    }
}
