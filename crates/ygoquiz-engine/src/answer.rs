use rand::{Rng, seq::SliceRandom as _};
use serde::Serialize;

/// Normalizes a free-text answer: surrounding whitespace removed, lowercased.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Expected free-text answer, stored in normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct AnswerKey(String);

impl AnswerKey {
    #[must_use]
    pub fn new(answer: &str) -> Self {
        Self(normalize(answer))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact comparison after normalizing `input`. No fuzzy matching.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        normalize(input) == self.0
    }
}

/// Options of a multiple-choice round.
///
/// Holds exactly one correct option, and no two options are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    options: Vec<String>,
    correct: usize,
}

impl OptionSet {
    /// Builds a shuffled option set.
    ///
    /// Distractors equal to the correct answer or to an earlier distractor are
    /// dropped, so the set may hold fewer options than were offered.
    pub fn shuffled<I, R>(correct: impl Into<String>, distractors: I, rng: &mut R) -> Self
    where
        I: IntoIterator<Item = String>,
        R: Rng + ?Sized,
    {
        let correct = correct.into();
        let mut options = vec![correct.clone()];
        for distractor in distractors {
            if !options.contains(&distractor) {
                options.push(distractor);
            }
        }
        options.shuffle(rng);
        let correct = options
            .iter()
            .position(|option| *option == correct)
            .expect("correct answer is always among the options");
        Self { options, correct }
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.options[self.correct]
    }
}
