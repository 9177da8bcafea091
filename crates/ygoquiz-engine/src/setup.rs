//! Round setup for each game mode.
//!
//! Every function here is pure: the cards (and distractor cards) are fetched
//! beforehand by the [dealer](crate::dealer), and the RNG only shuffles options.

use rand::Rng;
use serde::Serialize;

use crate::{
    AnswerKey, Card, Challenge, Detail, GameMode, Media, OptionSet, Prompt, Rating, Round,
};

const NOT_AVAILABLE: &str = "N/A";

/// Card data a mode needs but the card does not have.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum MissingAttribute {
    #[display("card has no image")]
    Image,
    #[display("card is not listed in any set")]
    Sets,
    #[display("card set has no release date")]
    ReleaseDate,
}

/// A property two cards can have in common in the Small World Challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum SharedProperty {
    #[display("Type")]
    Type,
    #[display("Attribute")]
    Attribute,
    #[display("Level/Rank/Link")]
    LevelRankLink,
}

/// Lists the properties `a` and `b` have in common.
///
/// A property missing on both cards (spells have no attribute) is not shared.
/// Levels, ranks and link ratings compare by number only.
#[must_use]
pub fn shared_properties(a: &Card, b: &Card) -> Vec<SharedProperty> {
    let mut shared = vec![];
    if a.card_type == b.card_type {
        shared.push(SharedProperty::Type);
    }
    if a.attribute.is_some() && a.attribute == b.attribute {
        shared.push(SharedProperty::Attribute);
    }
    if let (Some(x), Some(y)) = (a.rating, b.rating)
        && x.value() == y.value()
    {
        shared.push(SharedProperty::LevelRankLink);
    }
    shared
}

fn free_text(card: &Card) -> Challenge {
    Challenge::FreeText {
        answer: AnswerKey::new(&card.name),
    }
}

fn prompt(text: impl Into<String>, details: Vec<Detail>) -> Prompt {
    Prompt {
        text: text.into(),
        details,
    }
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| v.to_string())
}

fn identity_details(card: &Card) -> Vec<Detail> {
    vec![
        Detail::new("Type", card.card_type.clone()),
        Detail::new("Attribute", or_na(card.attribute.as_ref())),
    ]
}

pub fn guess_the_card(card: Card) -> Result<Round, MissingAttribute> {
    let url = card.image_url().ok_or(MissingAttribute::Image)?.to_owned();
    Ok(Round {
        mode: GameMode::GuessTheCard,
        prompt: prompt("What is the name of this card?", vec![]),
        media: Media::CardImage(url),
        challenge: free_text(&card),
        answer_name: card.name.clone(),
        cards: vec![card],
    })
}

/// Offers the card's name among the names of `distractors`.
///
/// Distractors sharing the target's id are ignored.
pub fn guess_the_art<R>(
    card: Card,
    distractors: &[Card],
    rng: &mut R,
) -> Result<Round, MissingAttribute>
where
    R: Rng + ?Sized,
{
    let url = card
        .cropped_image_url()
        .ok_or(MissingAttribute::Image)?
        .to_owned();
    let names = distractors
        .iter()
        .filter(|other| other.id != card.id)
        .map(|other| other.name.clone());
    let options = OptionSet::shuffled(card.name.clone(), names, rng);
    Ok(Round {
        mode: GameMode::GuessTheArt,
        prompt: prompt("Which card does this artwork belong to?", vec![]),
        media: Media::Artwork(url),
        challenge: Challenge::MultipleChoice { options },
        answer_name: card.name.clone(),
        cards: vec![card],
    })
}

#[must_use]
pub fn guess_the_name(card: Card) -> Round {
    let mut details = identity_details(&card);
    details.extend([
        Detail::new(
            "Level",
            or_na(card.rating.filter(|r| !r.is_link()).map(Rating::value)),
        ),
        Detail::new(
            "ATK/DEF",
            format!("{} / {}", or_na(card.atk), or_na(card.def)),
        ),
        Detail::new("Description", card.description.clone()),
    ]);
    Round {
        mode: GameMode::GuessTheName,
        prompt: prompt("What card has these details?", details),
        media: Media::None,
        challenge: free_text(&card),
        answer_name: card.name.clone(),
        cards: vec![card],
    }
}

/// Offers the card's first set among the first sets of `distractors`.
///
/// Distractors without sets are ignored.
pub fn product_guessing<R>(
    card: Card,
    distractors: &[Card],
    rng: &mut R,
) -> Result<Round, MissingAttribute>
where
    R: Rng + ?Sized,
{
    let correct = card.first_set().ok_or(MissingAttribute::Sets)?.name.clone();
    let url = card.image_url().ok_or(MissingAttribute::Image)?.to_owned();
    let set_names = distractors
        .iter()
        .filter(|other| other.id != card.id)
        .filter_map(|other| other.first_set().map(|set| set.name.clone()));
    let options = OptionSet::shuffled(correct.clone(), set_names, rng);
    Ok(Round {
        mode: GameMode::ProductGuessing,
        prompt: prompt("Which booster pack or set is this card from?", vec![]),
        media: Media::CardImage(url),
        challenge: Challenge::MultipleChoice { options },
        answer_name: correct,
        cards: vec![card],
    })
}

/// Reports what `card` shares with a random `other` card.
///
/// The player is asked for a card that shares a property with `card`, but the
/// answer check only compares against `card`'s own name.
pub fn small_world(card: Card, other: Card) -> Result<Round, MissingAttribute> {
    let url = card.image_url().ok_or(MissingAttribute::Image)?.to_owned();
    let shared = shared_properties(&card, &other);
    let shared_text = if shared.is_empty() {
        "nothing".to_owned()
    } else {
        shared
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut details = vec![Detail::new("Current Card", card.name.clone())];
    details.extend(identity_details(&card));
    details.extend([
        Detail::new("Level/Rank", or_na(card.rating.map(|r| r.value()))),
        Detail::new("Random Card", other.name.clone()),
        Detail::new("Shares", shared_text),
    ]);

    let text = format!(
        "Find a card that shares a property (Type, Attribute, Level/Rank/Link) with this card: \
         \"{}\". The new card must then share a property with another random card, but not its \
         name. (You can type its name to check)",
        card.name
    );
    Ok(Round {
        mode: GameMode::SmallWorld,
        prompt: prompt(text, details),
        media: Media::CardImage(url),
        challenge: free_text(&card),
        answer_name: card.name.clone(),
        cards: vec![card, other],
    })
}

/// Pairs two cards for the release date comparison.
///
/// Both cards need a first set with a release date.
pub fn which_is_older(left: Card, right: Card) -> Result<Round, MissingAttribute> {
    for card in [&left, &right] {
        let set = card.first_set().ok_or(MissingAttribute::Sets)?;
        if set.release_date.is_none() {
            return Err(MissingAttribute::ReleaseDate);
        }
    }
    let left_url = left.image_url().ok_or(MissingAttribute::Image)?.to_owned();
    let right_url = right.image_url().ok_or(MissingAttribute::Image)?.to_owned();
    let details = vec![
        Detail::new("Left", left.name.clone()),
        Detail::new("Right", right.name.clone()),
    ];

    let answer_name = match left.release_date().cmp(&right.release_date()) {
        std::cmp::Ordering::Greater => right.name.clone(),
        _ => left.name.clone(),
    };
    Ok(Round {
        mode: GameMode::WhichIsOlder,
        prompt: prompt("Click on the card that was released earlier.", details),
        media: Media::Pair {
            left: left_url,
            right: right_url,
        },
        challenge: Challenge::PickOlder,
        answer_name,
        cards: vec![left, right],
    })
}
