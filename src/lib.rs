//! Skyward - a terminal side-scroller: flap through the gaps between pipes.
//!
//! This library exposes the game for the binary and for integration tests.

pub mod assets;
pub mod build_info;
pub mod core;
pub mod entities;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::assets::{AssetSource, BuiltinAssets, SpriteDir};
pub use crate::core::{Flappy, GameConfig, HighScoreStore, PlayStep, World};
pub use crate::input::{CrosstermEvents, EventSource, InputEvent, ScriptedEvents};
pub use crate::ui::{HeadlessScreen, Screen, TerminalScreen};
