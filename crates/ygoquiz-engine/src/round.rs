use std::str::FromStr;

use serde::Serialize;

use crate::{AnswerKey, Card, OptionSet};

/// The six mini-games.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum GameMode {
    #[display("Guess the Card")]
    GuessTheCard,
    #[display("Guess the Art")]
    GuessTheArt,
    #[display("Guess the Name")]
    GuessTheName,
    #[display("Product Guessing")]
    ProductGuessing,
    #[display("Small World Challenge")]
    SmallWorld,
    #[display("Which Card Is Older?")]
    WhichIsOlder,
}

impl GameMode {
    pub const ALL: [Self; 6] = [
        Self::GuessTheCard,
        Self::GuessTheArt,
        Self::GuessTheName,
        Self::ProductGuessing,
        Self::SmallWorld,
        Self::WhichIsOlder,
    ];

    /// Name used on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::GuessTheCard => "guess-the-card",
            Self::GuessTheArt => "guess-the-art",
            Self::GuessTheName => "guess-the-name",
            Self::ProductGuessing => "product-guessing",
            Self::SmallWorld => "small-world",
            Self::WhichIsOlder => "which-is-older",
        }
    }

    /// One-line summary shown in the mode menu.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::GuessTheCard => "Name the card from its picture",
            Self::GuessTheArt => "Pick the card an artwork belongs to",
            Self::GuessTheName => "Name the card from its stats and text",
            Self::ProductGuessing => "Pick the set a card debuted in",
            Self::SmallWorld => "Find cards that share a property",
            Self::WhichIsOlder => "Pick the card released first",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown game mode `{name}`")]
pub struct UnknownModeError {
    name: String,
}

impl FromStr for GameMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.slug() == s)
            .ok_or_else(|| UnknownModeError { name: s.to_owned() })
    }
}

/// A labelled line of card information shown with the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

impl Detail {
    pub(crate) fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub text: String,
    pub details: Vec<Detail>,
}

/// Image URLs to show for a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Media {
    None,
    CardImage(String),
    Artwork(String),
    Pair { left: String, right: String },
}

impl Media {
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            Self::None => (None, None),
            Self::CardImage(url) | Self::Artwork(url) => (Some(url.as_str()), None),
            Self::Pair { left, right } => (Some(left.as_str()), Some(right.as_str())),
        };
        first.into_iter().chain(second)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum InputKind {
    #[display("free-text")]
    FreeText,
    #[display("multiple-choice")]
    MultipleChoice,
    #[display("pick-a-card")]
    PickCard,
}

/// What the player must produce, and what it is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Challenge {
    FreeText { answer: AnswerKey },
    MultipleChoice { options: OptionSet },
    PickOlder,
}

impl Challenge {
    #[must_use]
    pub const fn input_kind(&self) -> InputKind {
        match self {
            Self::FreeText { .. } => InputKind::FreeText,
            Self::MultipleChoice { .. } => InputKind::MultipleChoice,
            Self::PickOlder => InputKind::PickCard,
        }
    }
}

/// One play cycle of a mode, from prompt to answer check.
///
/// The prompt, media and expected answer are all derived from the held cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) mode: GameMode,
    pub(crate) prompt: Prompt,
    pub(crate) media: Media,
    pub(crate) challenge: Challenge,
    pub(crate) answer_name: String,
    pub(crate) cards: Vec<Card>,
}

impl Round {
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    #[must_use]
    pub fn media(&self) -> &Media {
        &self.media
    }

    #[must_use]
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    #[must_use]
    pub fn input_kind(&self) -> InputKind {
        self.challenge.input_kind()
    }

    /// Human-readable correct answer shown in feedback.
    #[must_use]
    pub fn answer_name(&self) -> &str {
        &self.answer_name
    }

    /// Cards the round was built from (one, or two for the comparison modes).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_slug_roundtrips_through_from_str() {
        for mode in GameMode::ALL {
            assert_eq!(mode.slug().parse::<GameMode>().unwrap(), mode);
        }
        assert!("poker".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_media_urls() {
        assert_eq!(Media::None.urls().count(), 0);
        let pair = Media::Pair {
            left: "l".into(),
            right: "r".into(),
        };
        assert_eq!(pair.urls().collect::<Vec<_>>(), ["l", "r"]);
    }
}
