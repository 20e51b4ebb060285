//! High score storage
//!
//! The game tracks a single best score. Storage is behind a trait so the
//! frame driver can run against a file, or against memory in tests.

/// Where the best score lives between sessions
pub trait HighScoreStore {
    /// Stored best score; 0 when nothing usable is stored
    fn load_high_score(&mut self) -> u64;

    /// Persist a new best score
    fn save_high_score(&mut self, score: u64);
}

/// Volatile store, also counts saves
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    pub score: u64,
    pub saves: usize,
}

impl MemoryHighScores {
    pub fn new(score: u64) -> Self {
        Self { score, saves: 0 }
    }
}

impl HighScoreStore for MemoryHighScores {
    fn load_high_score(&mut self) -> u64 {
        self.score
    }

    fn save_high_score(&mut self, score: u64) {
        self.score = score;
        self.saves += 1;
        log::info!("High score {} kept in memory", score);
    }
}
