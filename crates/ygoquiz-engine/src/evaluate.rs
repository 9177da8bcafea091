use std::cmp::Ordering;

use crate::{AnswerKey, Card, MissingAttribute};

/// Result of checking an answer.
///
/// Both variants carry the correct answer's display name, so a correct guess
/// is confirmed back to the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    Correct { answer: String },
    Incorrect { answer: String },
}

impl Outcome {
    #[must_use]
    pub fn answer(&self) -> &str {
        match self {
            Self::Correct { answer } | Self::Incorrect { answer } => answer,
        }
    }

    fn from_match(matched: bool, answer: &str) -> Self {
        let answer = answer.to_owned();
        if matched {
            Self::Correct { answer }
        } else {
            Self::Incorrect { answer }
        }
    }
}

/// Compares free text against the expected answer after normalization.
#[must_use]
pub fn evaluate_free_text(input: &str, expected: &AnswerKey, answer_name: &str) -> Outcome {
    Outcome::from_match(expected.matches(input), answer_name)
}

/// Exact comparison of the selected option with the correct one.
#[must_use]
pub fn evaluate_option(selected: &str, correct: &str) -> Outcome {
    Outcome::from_match(selected == correct, correct)
}

/// Which of the two displayed cards the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Side {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

impl Side {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Result of picking the older of two cards.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Judgement {
    Decided(Outcome),
    /// Both cards were released on the same date; neither pick is wrong.
    Tie,
}

/// Judges `selected` as the older card against `other`, by the release date of
/// each card's first listed set.
pub fn judge_older(selected: &Card, other: &Card) -> Result<Judgement, MissingAttribute> {
    let release_date = |card: &Card| {
        let set = card.first_set().ok_or(MissingAttribute::Sets)?;
        set.release_date.ok_or(MissingAttribute::ReleaseDate)
    };
    let judgement = match release_date(selected)?.cmp(&release_date(other)?) {
        Ordering::Less => Judgement::Decided(Outcome::Correct {
            answer: selected.name.clone(),
        }),
        Ordering::Greater => Judgement::Decided(Outcome::Incorrect {
            answer: other.name.clone(),
        }),
        Ordering::Equal => Judgement::Tie,
    };
    Ok(judgement)
}
