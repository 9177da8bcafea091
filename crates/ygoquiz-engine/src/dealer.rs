//! Mode dispatch and card fetching.
//!
//! [`deal`] fetches the cards a mode needs from a [`CardSource`] and hands them
//! to the matching [setup](crate::setup) function. Fetches are sequential.

use std::future::Future;

use rand::Rng;

use crate::{Card, CardId, GameMode, MissingAttribute, Round, setup};

/// Number of distractors in multiple-choice rounds.
pub const DISTRACTOR_COUNT: usize = 3;

/// Card database the game draws from.
pub trait CardSource {
    /// Number of cards reachable by offset. Offsets are drawn from `0..catalog_size()`.
    fn catalog_size(&self) -> u32;

    /// Fetches the card at `offset`.
    fn fetch_card_at(&self, offset: u32) -> impl Future<Output = Result<Card, FetchError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FetchError {
    #[display("request failed: {message}")]
    Request { message: String },
    #[display("malformed response: {message}")]
    Decode { message: String },
    #[display("no card at offset {offset}")]
    NotFound { offset: u32 },
    #[display("no suitable card after {attempts} attempts")]
    Exhausted { attempts: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DealError {
    #[display("failed to load card: {_0}")]
    Fetch(FetchError),
    #[display("{mode} unavailable: {missing}")]
    Unavailable {
        mode: GameMode,
        missing: MissingAttribute,
    },
}

impl From<FetchError> for DealError {
    fn from(error: FetchError) -> Self {
        Self::Fetch(error)
    }
}

impl DealError {
    fn unavailable(mode: GameMode) -> impl FnOnce(MissingAttribute) -> Self {
        move |missing| Self::Unavailable { mode, missing }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerConfig {
    /// Upper bound on fetches spent looking for one acceptable card.
    pub max_attempts: usize,
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self { max_attempts: 50 }
    }
}

/// Fetches a random card whose first listed set is not from an excluded product line.
///
/// Offsets past the end of the catalog are retried like excluded cards; any
/// other fetch error is returned as is.
pub async fn fetch_random_card<S, R>(
    source: &S,
    rng: &mut R,
    config: &DealerConfig,
) -> Result<Card, FetchError>
where
    S: CardSource + ?Sized,
    R: Rng,
{
    let catalog_size = source.catalog_size().max(1);
    for attempt in 1..=config.max_attempts {
        let offset = rng.random_range(0..catalog_size);
        match source.fetch_card_at(offset).await {
            Ok(card) if card.is_excluded_product_line() => {
                log::debug!(
                    "attempt {attempt}: skipping {} ({}) from an excluded product line",
                    card.name,
                    card.id
                );
            }
            Ok(card) => return Ok(card),
            Err(FetchError::NotFound { offset }) => {
                log::debug!("attempt {attempt}: no card at offset {offset}");
            }
            Err(e) => return Err(e),
        }
    }
    Err(FetchError::Exhausted {
        attempts: config.max_attempts,
    })
}

/// Fetches `count` random cards with pairwise distinct ids, none of them in `exclude`.
pub async fn fetch_distinct_cards<S, R>(
    source: &S,
    count: usize,
    exclude: &[CardId],
    rng: &mut R,
    config: &DealerConfig,
) -> Result<Vec<Card>, FetchError>
where
    S: CardSource + ?Sized,
    R: Rng,
{
    fetch_cards_where(source, count, rng, config, |cards, card| {
        !exclude.contains(&card.id) && cards.iter().all(|c| c.id != card.id)
    })
    .await
}

/// Fetches `count` cards to serve as set distractors for `correct_set`.
///
/// Every returned card has a first set, and those set names differ from
/// `correct_set` and from each other.
async fn fetch_set_distractors<S, R>(
    source: &S,
    target: &Card,
    correct_set: &str,
    count: usize,
    rng: &mut R,
    config: &DealerConfig,
) -> Result<Vec<Card>, FetchError>
where
    S: CardSource + ?Sized,
    R: Rng,
{
    fetch_cards_where(source, count, rng, config, |cards, card| {
        let Some(set) = card.first_set() else {
            return false;
        };
        card.id != target.id
            && set.name != correct_set
            && cards.iter().all(|c| {
                c.id != card.id && c.first_set().is_none_or(|s| s.name != set.name)
            })
    })
    .await
}

async fn fetch_cards_where<S, R, F>(
    source: &S,
    count: usize,
    rng: &mut R,
    config: &DealerConfig,
    mut accept: F,
) -> Result<Vec<Card>, FetchError>
where
    S: CardSource + ?Sized,
    R: Rng,
    F: FnMut(&[Card], &Card) -> bool,
{
    let mut cards = Vec::with_capacity(count);
    let mut rejected = 0;
    while cards.len() < count {
        let card = fetch_random_card(source, rng, config).await?;
        if accept(&cards, &card) {
            cards.push(card);
            continue;
        }
        rejected += 1;
        log::debug!("rejected {} ({}) ({rejected} so far)", card.name, card.id);
        if rejected >= config.max_attempts {
            return Err(FetchError::Exhausted { attempts: rejected });
        }
    }
    Ok(cards)
}

/// Fetches two cards with different ids and, when both have sets, different first sets.
pub async fn fetch_card_pair<S, R>(
    source: &S,
    rng: &mut R,
    config: &DealerConfig,
) -> Result<(Card, Card), FetchError>
where
    S: CardSource + ?Sized,
    R: Rng,
{
    let first = fetch_random_card(source, rng, config).await?;
    let mut others = fetch_cards_where(source, 1, rng, config, |_, card| {
        let same_set = match (first.first_set(), card.first_set()) {
            (Some(a), Some(b)) => a.name == b.name,
            _ => false,
        };
        card.id != first.id && !same_set
    })
    .await?;
    let second = others.remove(0);
    Ok((first, second))
}

/// Fetches the cards for one round of `mode` and sets the round up.
pub async fn deal<S, R>(
    mode: GameMode,
    source: &S,
    rng: &mut R,
    config: &DealerConfig,
) -> Result<Round, DealError>
where
    S: CardSource + ?Sized,
    R: Rng,
{
    log::debug!("dealing a round of {mode}");
    let unavailable = DealError::unavailable(mode);
    let round = match mode {
        GameMode::GuessTheCard => setup::guess_the_card(fetch_target(source, rng, config).await?),
        GameMode::GuessTheName => Ok(setup::guess_the_name(
            fetch_target(source, rng, config).await?,
        )),
        GameMode::GuessTheArt => {
            let card = fetch_target(source, rng, config).await?;
            if card.cropped_image_url().is_none() {
                return Err(unavailable(MissingAttribute::Image));
            }
            let distractors =
                fetch_distinct_cards(source, DISTRACTOR_COUNT, &[card.id], rng, config).await?;
            setup::guess_the_art(card, &distractors, rng)
        }
        GameMode::ProductGuessing => {
            let card = fetch_target(source, rng, config).await?;
            let Some(correct_set) = card.first_set().map(|set| set.name.clone()) else {
                return Err(unavailable(MissingAttribute::Sets));
            };
            let distractors = fetch_set_distractors(
                source,
                &card,
                &correct_set,
                DISTRACTOR_COUNT,
                rng,
                config,
            )
            .await?;
            setup::product_guessing(card, &distractors, rng)
        }
        GameMode::SmallWorld => {
            let card = fetch_target(source, rng, config).await?;
            let mut others = fetch_distinct_cards(source, 1, &[card.id], rng, config).await?;
            setup::small_world(card, others.remove(0))
        }
        GameMode::WhichIsOlder => {
            let (left, right) = fetch_card_pair(source, rng, config).await?;
            setup::which_is_older(left, right)
        }
    };
    round.map_err(unavailable)
}

async fn fetch_target<S, R>(source: &S, rng: &mut R, config: &DealerConfig) -> Result<Card, FetchError>
where
    S: CardSource + ?Sized,
    R: Rng,
{
    let card = fetch_random_card(source, rng, config).await?;
    log::debug!("target card: {} ({})", card.name, card.id);
    Ok(card)
}
