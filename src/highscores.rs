//! Session leaderboard for fruit-catch
//!
//! Lives only as long as the process; nothing is written to disk.

/// Maximum number of runs kept
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub score: u32,
    /// Level reached when the run ended
    pub level: u32,
}

/// Best runs so far, highest score first
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run. Returns its 1-based rank, or `None` if it
    /// scored nothing or fell off the bottom of a full board.
    pub fn record(&mut self, score: u32, level: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        // Equal scores rank behind earlier runs
        let index = self.entries.partition_point(|e| e.score >= score);
        if index >= MAX_HIGH_SCORES {
            return None;
        }
        self.entries.insert(index, HighScoreEntry { score, level });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    /// Best run this session
    pub fn best(&self) -> Option<HighScoreEntry> {
        self.entries.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(board: &HighScores) -> Vec<u32> {
        board.entries.iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_zero_is_not_recorded() {
        let mut board = HighScores::new();
        assert_eq!(board.record(0, 0), None);
        assert_eq!(board.best(), None);
    }

    #[test]
    fn test_ranks_and_ties() {
        let mut board = HighScores::new();
        assert_eq!(board.record(5, 0), Some(1));
        assert_eq!(board.record(12, 1), Some(1));
        assert_eq!(board.record(8, 0), Some(2));
        // Tie goes behind the earlier 8
        assert_eq!(board.record(8, 0), Some(3));

        assert_eq!(scores(&board), vec![12, 8, 8, 5]);
        assert_eq!(board.best(), Some(HighScoreEntry { score: 12, level: 1 }));
    }

    #[test]
    fn test_full_board_drops_lowest() {
        let mut board = HighScores::new();
        for score in 1..=MAX_HIGH_SCORES as u32 {
            board.record(score, 0);
        }
        // Tying the lowest entry on a full board doesn't get in
        assert_eq!(board.record(1, 0), None);
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);

        assert_eq!(board.record(100, 10), Some(1));
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(board.entries.last().map(|e| e.score), Some(2));
    }
}
