//! The game's state machine: splash, play, game over, repeat.
//!
//! `Flappy` owns everything that outlives a single attempt (config, assets,
//! the high score store, input, output and the rng) and rebuilds a fresh
//! `World` for every attempt. A quit in any phase saves the held high score
//! and returns from `start`.

use crate::assets::{self, load_pipe_pair, load_player_frames, AssetSource};
use crate::core::config::GameConfig;
use crate::core::frame_clock::FrameClock;
use crate::core::high_score::HighScoreStore;
use crate::core::tier::TierTracker;
use crate::core::world::World;
use crate::entities::{Entity, PlayerMode};
use crate::input::{EventSource, InputEvent};
use crate::ui::{Canvas, Screen};
use rand::Rng;
use std::io;
use tracing::{debug, info, warn};

/// Outcome of a single frame of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayStep {
    Continue,
    Crashed,
    Quit,
}

/// Whether a phase handed over to the next one or the player quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Next,
    Quit,
}

pub struct Flappy<E: EventSource, S: Screen, R: Rng> {
    config: GameConfig,
    assets: Box<dyn AssetSource>,
    store: HighScoreStore,
    events: E,
    screen: S,
    rng: R,
    clock: FrameClock,
    canvas: Canvas,
    attempts: u32,
    frames: u64,
    /// Best score seen this run, kept even when the store cannot be written.
    best: u32,
}

impl<E: EventSource, S: Screen, R: Rng> Flappy<E, S, R> {
    pub fn new(
        config: GameConfig,
        assets: Box<dyn AssetSource>,
        store: HighScoreStore,
        events: E,
        screen: S,
        rng: R,
    ) -> Self {
        Self {
            clock: FrameClock::new(config.fps),
            canvas: Canvas::new(config.width, config.height),
            config,
            assets,
            store,
            events,
            screen,
            rng,
            attempts: 0,
            frames: 0,
            best: 0,
        }
    }

    /// Attempts that ended in a crash.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Frames presented so far, across all phases.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn store(&self) -> &HighScoreStore {
        &self.store
    }

    /// Run attempts until the player quits.
    pub fn start(&mut self) -> io::Result<()> {
        info!(
            width = self.config.width,
            height = self.config.height,
            fps = self.config.fps,
            "game started"
        );
        loop {
            let mut world = self.build_world();
            if self.splash(&mut world)? == Flow::Quit {
                break;
            }
            if self.play(&mut world)? == Flow::Quit {
                break;
            }
            self.attempts += 1;
            info!(
                attempt = self.attempts,
                score = world.score.score(),
                high_score = world.score.high_score(),
                "attempt over"
            );
            if self.game_over(&mut world)? == Flow::Quit {
                break;
            }
        }
        info!(attempts = self.attempts, frames = self.frames, "game closed");
        Ok(())
    }

    /// Fresh entities for a new attempt. The high score is the stored one or
    /// the best seen this run, whichever is higher.
    pub fn build_world(&mut self) -> World {
        let mut world = World::new(&self.config, &*self.assets, &self.store, &mut self.rng);
        if self.best > world.score.high_score() {
            world.score.set_high_score(self.best);
        }
        world
    }

    fn splash(&mut self, world: &mut World) -> io::Result<Flow> {
        world.player.set_mode(PlayerMode::Shm);
        self.screen.set_status("Press Space to start!");

        loop {
            for event in self.events.drain()? {
                match event {
                    InputEvent::Quit | InputEvent::Cancel => {
                        self.persist_on_quit(world);
                        return Ok(Flow::Quit);
                    }
                    InputEvent::Tap => return Ok(Flow::Next),
                }
            }

            world.background.tick(&mut self.canvas);
            world.floor.tick(&mut self.canvas);
            world.player.tick(&mut self.canvas);
            world.welcome.tick(&mut self.canvas);
            self.finish_frame()?;
        }
    }

    fn play(&mut self, world: &mut World) -> io::Result<Flow> {
        world.score.reset();
        world.player.set_mode(PlayerMode::Normal);
        world.tiers = TierTracker::new(assets::TIERS.len());
        self.screen.set_status("");

        loop {
            match self.play_frame(world)? {
                PlayStep::Continue => {}
                PlayStep::Crashed => return Ok(Flow::Next),
                PlayStep::Quit => return Ok(Flow::Quit),
            }
        }
    }

    /// One frame of play. Collision is checked before crossings, so a pipe
    /// passed on the frame of a crash earns nothing.
    pub fn play_frame(&mut self, world: &mut World) -> io::Result<PlayStep> {
        // ── 1. Tier for the current score ───────────────────────────
        self.publish_score(world);

        // ── 2. Collision ────────────────────────────────────────────
        if let Some(obstacle) = world.player.collision(&world.pipes, &world.floor) {
            world.player.crash(obstacle);
            self.raise_high_score(world);
            debug!(?obstacle, score = world.score.score(), "crashed");
            return Ok(PlayStep::Crashed);
        }

        // ── 3. Credit crossed pipes ─────────────────────────────────
        for i in 0..world.pipes.pairs.len() {
            let pair = &world.pipes.pairs[i];
            if pair.credited || !world.player.crossed(&pair.upper) {
                continue;
            }
            world.pipes.pairs[i].credited = true;
            world.score.add();
            self.publish_score(world);
            self.raise_high_score(world);
        }

        // ── 4. Input ────────────────────────────────────────────────
        for event in self.events.drain()? {
            match event {
                InputEvent::Quit | InputEvent::Cancel => {
                    self.persist_on_quit(world);
                    return Ok(PlayStep::Quit);
                }
                InputEvent::Tap => world.player.flap(),
            }
        }

        // ── 5. Advance and draw, back to front ──────────────────────
        world.background.tick(&mut self.canvas);
        world.floor.tick(&mut self.canvas);
        world.pipes.tick(&mut self.canvas);
        world.score.tick(&mut self.canvas);
        world.player.tick(&mut self.canvas);

        // ── 6. Present ──────────────────────────────────────────────
        self.finish_frame()?;
        Ok(PlayStep::Continue)
    }

    fn game_over(&mut self, world: &mut World) -> io::Result<Flow> {
        world.player.set_mode(PlayerMode::Crash);
        world.pipes.stop();
        world.floor.stop();
        self.screen
            .set_status(&format!("Game over! Score {}", world.score.score()));

        loop {
            for event in self.events.drain()? {
                match event {
                    InputEvent::Quit | InputEvent::Cancel => {
                        self.persist_on_quit(world);
                        return Ok(Flow::Quit);
                    }
                    InputEvent::Tap if world.player.on_ground(&world.floor) => {
                        return Ok(Flow::Next)
                    }
                    InputEvent::Tap => {}
                }
            }

            world.background.tick(&mut self.canvas);
            world.floor.tick(&mut self.canvas);
            world.pipes.tick(&mut self.canvas);
            world.score.tick(&mut self.canvas);
            world.player.tick(&mut self.canvas);
            world.game_over.tick(&mut self.canvas);
            self.finish_frame()?;
        }
    }

    /// Hand the score to the tier tracker and restyle the world on a change.
    fn publish_score(&self, world: &mut World) {
        if let Some(tier) = world.tiers.observe(world.score.score()) {
            self.apply_tier(world, tier);
        }
    }

    /// Swap background, pipe and player images to `tier`'s bundle. Anything
    /// that fails to load keeps its current image.
    pub fn apply_tier(&self, world: &mut World, tier: usize) {
        let bundle = assets::bundle(tier);
        let assets = &*self.assets;
        info!(tier, score = world.score.score(), "tier changed");

        match assets.load(bundle.background) {
            Ok(image) => world.background.set_image(image),
            Err(e) => warn!(tier, error = %e, "keeping previous background"),
        }
        match load_pipe_pair(assets, bundle) {
            Ok((lower, upper)) => world.pipes.set_images(lower, upper),
            Err(e) => warn!(tier, error = %e, "keeping previous pipes"),
        }
        match load_player_frames(assets, bundle) {
            Ok(frames) => world.player.set_frames(frames),
            Err(e) => warn!(tier, error = %e, "keeping previous player"),
        }
    }

    /// Raise the high score if the current score beats it, and save it.
    fn raise_high_score(&mut self, world: &mut World) {
        if world.score.record_high() {
            self.best = self.best.max(world.score.high_score());
            self.store.save(world.score.high_score());
        }
    }

    fn persist_on_quit(&self, world: &World) {
        info!(high_score = world.score.high_score(), "quit requested");
        self.store.save(world.score.high_score());
    }

    fn finish_frame(&mut self) -> io::Result<()> {
        self.screen.present(&self.canvas)?;
        self.canvas.clear();
        self.clock.tick();
        self.frames += 1;
        Ok(())
    }
}
