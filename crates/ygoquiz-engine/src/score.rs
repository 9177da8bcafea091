use crate::Outcome;

/// Streak scoring.
///
/// - **Correct** answer: score + 1
/// - **Incorrect** answer: score back to 0
/// - **Tie** in Which Card Is Older: score + 1 without an outcome
///
/// There is no partial credit and no cap. The best streak and answer counters
/// are kept for display and never influence the score.
///
/// # Example
///
/// ```
/// use ygoquiz_engine::{Outcome, ScoreBoard};
///
/// let mut board = ScoreBoard::new();
/// board.record(&Outcome::Correct { answer: "Kuriboh".into() });
/// board.record(&Outcome::Correct { answer: "Jinzo".into() });
/// assert_eq!(board.score(), 2);
///
/// board.record(&Outcome::Incorrect { answer: "Exodia".into() });
/// assert_eq!(board.score(), 0);
/// assert_eq!(board.best(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    best: u32,
    correct: u32,
    incorrect: u32,
    ties: u32,
}

impl ScoreBoard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            best: 0,
            correct: 0,
            incorrect: 0,
            ties: 0,
        }
    }

    /// Current streak.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Longest streak reached since the program started.
    #[must_use]
    pub const fn best(&self) -> u32 {
        self.best
    }

    #[must_use]
    pub const fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub const fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub const fn ties(&self) -> u32 {
        self.ties
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Correct { .. } => {
                self.correct += 1;
                self.increment();
            }
            Outcome::Incorrect { .. } => {
                self.incorrect += 1;
                self.score = 0;
            }
        }
    }

    /// Awards the free point of a tied release date comparison.
    pub fn record_tie(&mut self) {
        self.ties += 1;
        self.increment();
    }

    /// Resets the current streak (returning to the mode menu).
    pub fn reset(&mut self) {
        self.score = 0;
    }

    fn increment(&mut self) {
        self.score = self.score.saturating_add(1);
        self.best = self.best.max(self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correct() -> Outcome {
        Outcome::Correct {
            answer: "Kuriboh".into(),
        }
    }

    fn incorrect() -> Outcome {
        Outcome::Incorrect {
            answer: "Kuriboh".into(),
        }
    }

    #[test]
    fn test_correct_increments_by_one() {
        let mut board = ScoreBoard::new();
        for expected in 1..=5 {
            board.record(&correct());
            assert_eq!(board.score(), expected);
        }
    }

    #[test]
    fn test_incorrect_resets_to_zero() {
        let mut board = ScoreBoard::new();
        board.record(&incorrect());
        assert_eq!(board.score(), 0);
        board.record(&correct());
        board.record(&correct());
        board.record(&incorrect());
        assert_eq!(board.score(), 0);
        assert_eq!(board.best(), 2);
        assert_eq!((board.correct(), board.incorrect()), (2, 2));
    }

    #[test]
    fn test_tie_counts_as_point() {
        let mut board = ScoreBoard::new();
        board.record(&correct());
        board.record_tie();
        assert_eq!(board.score(), 2);
        assert_eq!(board.ties(), 1);
    }

    #[test]
    fn test_reset_keeps_best() {
        let mut board = ScoreBoard::new();
        board.record(&correct());
        board.reset();
        assert_eq!(board.score(), 0);
        assert_eq!(board.best(), 1);
    }
}
