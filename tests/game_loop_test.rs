//! Integration test: game loop
//!
//! Drives `Flappy` headlessly with scripted input, a seeded rng and a
//! throwaway high score store.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyward::assets::{AssetError, AssetSource, BuiltinAssets, Sprite, TIERS};
use skyward::core::constants::PIPE_WIDTH;
use skyward::core::World;
use skyward::entities::PlayerMode;
use skyward::{
    Flappy, GameConfig, HeadlessScreen, HighScoreStore, InputEvent, PlayStep, ScriptedEvents,
};
use tempfile::TempDir;

type Game = Flappy<ScriptedEvents, HeadlessScreen, ChaCha8Rng>;

fn config() -> GameConfig {
    GameConfig::default().headless()
}

fn game_with_assets(dir: &TempDir, events: ScriptedEvents, assets: Box<dyn AssetSource>) -> Game {
    Flappy::new(
        config(),
        assets,
        HighScoreStore::in_dir(dir.path()),
        events,
        HeadlessScreen::new(),
        ChaCha8Rng::seed_from_u64(42),
    )
}

fn game(dir: &TempDir, events: ScriptedEvents) -> Game {
    game_with_assets(dir, events, Box::new(BuiltinAssets::new(&config())))
}

/// A world as `play` leaves it, ready for `play_frame`.
fn playing_world(game: &mut Game) -> World {
    let mut world = game.build_world();
    world.score.reset();
    world.player.set_mode(PlayerMode::Normal);
    world
}

/// Put a pair right on the player, gap around it, and play one frame.
fn pass_one_pipe(game: &mut Game, world: &mut World) -> PlayStep {
    world.player.y = 11.0;
    world.player.vel_y = 0.0;
    world.pipes.pairs.clear();
    let x = world.player.cx() - PIPE_WIDTH as f64 / 2.0;
    world.pipes.spawn_pair_at(x, world.player.y - 2.0);
    game.play_frame(world).unwrap()
}

fn score_points(game: &mut Game, world: &mut World, points: u32) {
    for _ in 0..points {
        assert_eq!(pass_one_pipe(game, world), PlayStep::Continue);
    }
}

/// Put a pair's upper pipe across the player and play one frame.
fn hit_pipe(game: &mut Game, world: &mut World) -> PlayStep {
    world.player.y = 11.0;
    world.pipes.pairs.clear();
    let x = world.player.cx() - PIPE_WIDTH as f64 / 2.0;
    world.pipes.spawn_pair_at(x, 15.0);
    game.play_frame(world).unwrap()
}

// =============================================================================
// Whole runs through start()
// =============================================================================

#[test]
fn test_full_attempt_then_quit() {
    let dir = tempfile::tempdir().unwrap();
    // Tap past the splash, fall to the floor without flapping, wait on the
    // game over screen, tap to replay, then the script runs out (quit).
    let events = ScriptedEvents::new([vec![InputEvent::Tap]])
        .idle(100)
        .then(vec![InputEvent::Tap]);
    let mut game = game(&dir, events);

    game.start().unwrap();

    assert_eq!(game.attempts(), 1);
    // Every idle script entry is one presented frame; the taps end phases.
    assert_eq!(game.frames(), 100);
    assert_eq!(game.store().try_load().unwrap(), Some(0));
}

#[test]
fn test_quit_during_game_over_ends_start() {
    let dir = tempfile::tempdir().unwrap();
    // Fall to the floor, wait on the game over screen, then quit there.
    let events = ScriptedEvents::new([vec![InputEvent::Tap]])
        .idle(100)
        .then(vec![InputEvent::Quit]);
    let mut game = game(&dir, events);

    game.start().unwrap();

    assert_eq!(game.attempts(), 1);
    assert_eq!(game.frames(), 100);
    // Never got back to the splash screen.
    assert_eq!(game.screen().status, "Game over! Score 0");
    let last = game.screen().last.as_ref().unwrap();
    assert!((0..last.height()).any(|y| last.row_text(y).contains("GAME OVER")));
    assert_eq!(game.store().try_load().unwrap(), Some(0));
}

#[test]
fn test_quit_during_splash_persists_held_high_score() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game(&dir, ScriptedEvents::default());
    assert_eq!(game.store().try_load().unwrap(), None);

    game.start().unwrap();

    assert_eq!(game.attempts(), 0);
    assert_eq!(game.store().try_load().unwrap(), Some(0));
}

#[test]
fn test_quit_during_splash_keeps_stored_best() {
    let dir = tempfile::tempdir().unwrap();
    HighScoreStore::in_dir(dir.path()).save(17);
    let mut game = game(&dir, ScriptedEvents::new([vec![InputEvent::Cancel]]));

    game.start().unwrap();

    assert_eq!(game.store().load(), 17);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_crossing_is_credited_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game(&dir, ScriptedEvents::default().idle(100));
    let mut world = playing_world(&mut game);

    assert_eq!(pass_one_pipe(&mut game, &mut world), PlayStep::Continue);
    assert_eq!(world.score.score(), 1);
    assert!(world.pipes.pairs[0].credited);

    for _ in 0..5 {
        assert_eq!(game.play_frame(&mut world).unwrap(), PlayStep::Continue);
    }
    assert_eq!(world.score.score(), 1);
    // A new best is written as soon as it is scored.
    assert_eq!(game.store().load(), 1);
}

#[test]
fn test_collision_beats_crossing_on_the_same_frame() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game(&dir, ScriptedEvents::default().idle(100));
    let mut world = playing_world(&mut game);

    assert_eq!(hit_pipe(&mut game, &mut world), PlayStep::Crashed);
    assert!(world.player.crossed(&world.pipes.pairs[0].upper));
    assert_eq!(world.score.score(), 0);
    assert!(!world.pipes.pairs[0].credited);
    assert!(world.player.crashed.is_some());
}

#[test]
fn test_quit_while_playing_saves_high_score() {
    let dir = tempfile::tempdir().unwrap();
    let events = ScriptedEvents::default().idle(3).then(vec![InputEvent::Quit]);
    let mut game = game(&dir, events);
    let mut world = playing_world(&mut game);

    score_points(&mut game, &mut world, 3);
    world.player.y = 11.0;
    assert_eq!(game.play_frame(&mut world).unwrap(), PlayStep::Quit);
    assert_eq!(game.store().load(), 3);
}

#[test]
fn test_high_score_survives_a_worse_attempt() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game(&dir, ScriptedEvents::default().idle(1000));

    let mut first = playing_world(&mut game);
    score_points(&mut game, &mut first, 25);
    assert_eq!(hit_pipe(&mut game, &mut first), PlayStep::Crashed);
    assert_eq!(first.score.high_score(), 25);
    assert_eq!(game.store().load(), 25);

    let mut second = playing_world(&mut game);
    assert_eq!(second.score.high_score(), 25);
    score_points(&mut game, &mut second, 10);
    assert_eq!(hit_pipe(&mut game, &mut second), PlayStep::Crashed);
    assert_eq!(second.score.high_score(), 25);
    assert_eq!(game.store().load(), 25);
}

#[test]
fn test_high_score_held_when_store_cannot_be_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game(&dir, ScriptedEvents::default().idle(100));
    // A directory squatting on the record path fails every save.
    std::fs::create_dir(game.store().path()).unwrap();

    let mut first = playing_world(&mut game);
    score_points(&mut game, &mut first, 5);
    assert_eq!(hit_pipe(&mut game, &mut first), PlayStep::Crashed);
    assert_eq!(first.score.high_score(), 5);
    assert_eq!(game.store().load(), 0);

    let second = playing_world(&mut game);
    assert_eq!(second.score.high_score(), 5);
}

// =============================================================================
// Tiers
// =============================================================================

#[test]
fn test_tier_change_restyles_the_world() {
    let dir = tempfile::tempdir().unwrap();
    let builtin = BuiltinAssets::new(&config());
    let mut game = game(&dir, ScriptedEvents::default().idle(100));
    let mut world = playing_world(&mut game);

    score_points(&mut game, &mut world, 19);
    assert_eq!(world.tiers.active(), 0);
    assert_eq!(world.background.image(), &builtin.load(TIERS[0].background).unwrap());

    score_points(&mut game, &mut world, 1);
    assert_eq!(world.tiers.active(), 1);
    assert_eq!(world.background.image(), &builtin.load(TIERS[1].background).unwrap());
    assert_eq!(world.player.frames()[0], builtin.load(TIERS[1].player[0]).unwrap());
    let red = builtin.load(TIERS[1].pipe_lower).unwrap();
    assert!(world.pipes.pairs.iter().all(|p| *p.lower.image() == red));
    assert_eq!(*world.pipes.pairs[0].upper.image(), red.flipped_vertical());
}

/// Built-in art, except the night tier's images are missing.
struct NoNightArt(BuiltinAssets);

impl AssetSource for NoNightArt {
    fn load(&self, name: &str) -> Result<Sprite, AssetError> {
        if name.contains("night") || name.starts_with("red") || name == "pipe-red" {
            return Err(AssetError::NotFound(name.to_string()));
        }
        self.0.load(name)
    }
}

#[test]
fn test_failed_tier_reload_keeps_previous_images() {
    let dir = tempfile::tempdir().unwrap();
    let builtin = BuiltinAssets::new(&config());
    let mut game = game_with_assets(
        &dir,
        ScriptedEvents::default().idle(100),
        Box::new(NoNightArt(builtin.clone())),
    );
    let mut world = playing_world(&mut game);

    score_points(&mut game, &mut world, 20);

    assert_eq!(world.tiers.active(), 1);
    assert_eq!(world.score.score(), 20);
    assert_eq!(world.background.image(), &builtin.load(TIERS[0].background).unwrap());
    assert_eq!(world.player.frames()[0], builtin.load(TIERS[0].player[0]).unwrap());
    // The game carries on.
    world.player.y = 11.0;
    assert_eq!(game.play_frame(&mut world).unwrap(), PlayStep::Continue);
}
