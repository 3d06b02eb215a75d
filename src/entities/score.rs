use super::Entity;
use crate::core::config::GameConfig;
use crate::core::high_score::HighScoreStore;
use crate::ui::Surface;
use ratatui::style::{Color, Modifier, Style};

/// Points for the current attempt plus the best ever seen.
#[derive(Debug, Clone)]
pub struct Score {
    score: u32,
    high_score: u32,
    screen_width: u16,
    score_y: i32,
}

impl Score {
    /// Fresh score; the high score comes from the store.
    pub fn new(config: &GameConfig, store: &HighScoreStore) -> Self {
        Self {
            score: 0,
            high_score: store.load(),
            screen_width: config.width,
            score_y: (config.height as f64 * 0.1) as i32,
        }
    }

    pub fn add(&mut self) {
        self.score += 1;
    }

    /// Back to zero for a new attempt. The high score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score;
    }

    /// Raise the high score to the current score if it is beaten.
    pub fn record_high(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

impl Entity for Score {
    fn tick(&mut self, surface: &mut dyn Surface) {
        let bold = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = self.score.to_string();
        let x = (self.screen_width as i32 - text.len() as i32) / 2;
        surface.print(&text, x, self.score_y, bold);

        let high = format!("Highscore: {}", self.high_score);
        let x = self.screen_width as i32 - high.len() as i32 - 1;
        surface.print(&high, x, 0, Style::default().fg(Color::White));
    }
}
