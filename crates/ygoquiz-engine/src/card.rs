use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Substrings (lowercase) that mark a set as belonging to a product line the quiz skips.
pub const EXCLUDED_PRODUCT_LINES: [&str; 2] = ["rush", "speed"];

/// Card passcode, unique within the card database.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct CardId(u64);

impl CardId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Star rating of a monster card.
///
/// Main deck monsters have a level, Xyz monsters a rank and Link monsters a
/// link rating. A card carries at most one of them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Rating {
    #[display("Level {_0}")]
    Level(u32),
    #[display("Rank {_0}")]
    Rank(u32),
    #[display("Link {_0}")]
    Link(u32),
}

impl Rating {
    /// Returns the bare number, regardless of whether it is a level, rank or link rating.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Level(n) | Self::Rank(n) | Self::Link(n) => n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    pub image_url: String,
    pub image_url_cropped: String,
}

/// A product (booster pack, structure deck, ...) the card was printed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub name: String,
    pub code: Option<String>,
    pub rarity: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl CardSet {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
            rarity: None,
            release_date: None,
        }
    }

    #[must_use]
    pub fn released(self, date: NaiveDate) -> Self {
        Self {
            release_date: Some(date),
            ..self
        }
    }

    /// Returns `true` if the set name belongs to one of [`EXCLUDED_PRODUCT_LINES`].
    #[must_use]
    pub fn is_excluded_product_line(&self) -> bool {
        let name = self.name.to_lowercase();
        EXCLUDED_PRODUCT_LINES
            .iter()
            .any(|line| name.contains(line))
    }
}

/// A card record as fetched from the card database. Never mutated after fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub card_type: String,
    pub attribute: Option<String>,
    pub rating: Option<Rating>,
    pub atk: Option<i32>,
    pub def: Option<i32>,
    pub description: String,
    pub images: Vec<CardImage>,
    pub sets: Vec<CardSet>,
}

impl Card {
    /// Creates a card with the given identity and no other data.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            card_type: String::new(),
            attribute: None,
            rating: None,
            atk: None,
            def: None,
            description: String::new(),
            images: Vec::new(),
            sets: Vec::new(),
        }
    }

    /// The first listed set, which the quiz treats as the card's debut product.
    #[must_use]
    pub fn first_set(&self) -> Option<&CardSet> {
        self.sets.first()
    }

    /// Release date of the first listed set.
    ///
    /// The card database rarely fills in per-set dates, so this is usually the
    /// card's TCG debut date copied onto every set when the card was decoded.
    #[must_use]
    pub fn release_date(&self) -> Option<NaiveDate> {
        self.first_set().and_then(|set| set.release_date)
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.image_url.as_str())
    }

    #[must_use]
    pub fn cropped_image_url(&self) -> Option<&str> {
        self.images
            .first()
            .map(|image| image.image_url_cropped.as_str())
    }

    /// Returns `true` if the card's first listed set is from an excluded product line.
    ///
    /// Cards without any set are never excluded.
    #[must_use]
    pub fn is_excluded_product_line(&self) -> bool {
        self.first_set()
            .is_some_and(CardSet::is_excluded_product_line)
    }
}
