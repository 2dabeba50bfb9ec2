//! High score leaderboard
//!
//! Top 10 `{name, score}` entries, sorted descending, persisted as JSON
//! through a caller-supplied path. I/O failures are logged and swallowed
//! at this boundary; the game never aborts over a leaderboard.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player-entered name
    pub name: String,
    /// Final score
    pub score: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// The rank a score would achieve (1-indexed), None if it doesn't qualify
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Insert a score, keeping the list sorted descending and truncated
    ///
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, name: &str, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            name: name.to_owned(),
            score,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the leaderboard from a JSON file, empty on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("high score file unreadable ({err}), starting fresh");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no high score file, starting fresh");
                Self::new()
            }
        }
    }

    /// Save the leaderboard, logging (not propagating) failures
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to save high scores: {err}");
                } else {
                    log::info!("high scores saved ({} entries)", self.entries.len());
                }
            }
            Err(err) => log::warn!("failed to encode high scores: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn entries_stay_sorted_descending() {
        let mut scores = HighScores::new();
        scores.add_score("AAA", 100);
        scores.add_score("BBB", 300);
        scores.add_score("CCC", 200);

        let values: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![300, 200, 100]);
        assert_eq!(scores.top_score(), Some(300));
    }

    #[test]
    fn list_truncates_to_ten() {
        let mut scores = HighScores::new();
        for i in 1..=12u64 {
            scores.add_score("P", i * 10);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // The two lowest fell off
        assert_eq!(scores.entries.last().unwrap().score, 30);
        assert!(!scores.qualifies(25));
        assert!(scores.qualifies(35));
    }

    #[test]
    fn rank_reporting_matches_insertion() {
        let mut scores = HighScores::new();
        scores.add_score("AAA", 500);
        scores.add_score("BBB", 100);
        assert_eq!(scores.potential_rank(300), Some(2));
        assert_eq!(scores.add_score("CCC", 300), Some(2));
        assert_eq!(scores.entries[1].name, "CCC");
    }

    #[test]
    fn load_save_round_trip() {
        let path = std::env::temp_dir().join("void_strike_test_scores.json");
        let _ = std::fs::remove_file(&path);

        // Missing file loads as empty
        let scores = HighScores::load(&path);
        assert!(scores.is_empty());

        let mut scores = HighScores::new();
        scores.add_score("ACE", 4200);
        scores.save(&path);

        let loaded = HighScores::load(&path);
        assert_eq!(loaded.entries, scores.entries);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let path = std::env::temp_dir().join("void_strike_corrupt_scores.json");
        std::fs::write(&path, "not json {").unwrap();
        let scores = HighScores::load(&path);
        assert!(scores.is_empty());
        let _ = std::fs::remove_file(&path);
    }
}
