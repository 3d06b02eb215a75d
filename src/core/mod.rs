//! Game rules and the loop that drives them.

pub mod config;
pub mod constants;
pub mod frame_clock;
pub mod game_loop;
pub mod high_score;
pub mod tier;
pub mod world;

pub use config::GameConfig;
pub use game_loop::{Flappy, PlayStep};
pub use high_score::HighScoreStore;
pub use world::World;
