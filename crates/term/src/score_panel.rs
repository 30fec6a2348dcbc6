//! Score display sink: keeps the latest score lines for the view to draw.

use crate::core::ScoreDisplay;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePanel {
    score: String,
    best: String,
}

impl Default for ScorePanel {
    fn default() -> Self {
        Self {
            score: "Score: 0".to_string(),
            best: "Best: 0".to_string(),
        }
    }
}

impl ScorePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_text(&self) -> &str {
        &self.score
    }

    pub fn best_text(&self) -> &str {
        &self.best
    }
}

impl ScoreDisplay for ScorePanel {
    fn show_score(&mut self, score: &str, best: &str) {
        self.score.clear();
        self.score.push_str(score);
        self.best.clear();
        self.best.push_str(best);
    }
}
