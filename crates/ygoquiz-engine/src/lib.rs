//! Game logic of the card quiz.
//!
//! The engine knows nothing about terminals or HTTP. It provides:
//!
//! - [`Card`] - Card record as delivered by a [`CardSource`]
//! - [`Session`] - Score, selected mode and the round in progress
//! - [`Round`] - Prompt, media and expected answer of one play cycle
//! - [`setup`] - Pure per-mode round construction
//! - [`deal`] - Mode dispatcher that fetches cards and builds a [`Round`]
//! - [`ScoreBoard`] - Streak scoring
//!
//! # Round Flow
//!
//! 1. [`Session::select_mode`] returns a [`RoundToken`]
//! 2. The caller runs [`deal`] for that mode against its [`CardSource`]
//! 3. [`Session::deliver`] installs the round, unless a newer token was issued meanwhile
//! 4. The player answers with [`Session::submit_text`], [`Session::choose_option`]
//!    or [`Session::pick_card`], and the score is updated
//! 5. [`Session::next_round`] starts over at step 2; [`Session::return_to_menu`] resets
//!
//! # Example
//!
//! ```
//! use ygoquiz_engine::{Card, CardId, CardImage, Session, setup};
//!
//! let card = Card {
//!     images: vec![CardImage {
//!         image_url: "https://example.com/46986414.jpg".into(),
//!         image_url_cropped: "https://example.com/cropped/46986414.jpg".into(),
//!     }],
//!     ..Card::new(CardId::new(46_986_414), "Dark Magician")
//! };
//!
//! let mut session = Session::new();
//! let token = session.select_mode(ygoquiz_engine::GameMode::GuessTheCard);
//! session.deliver(token, Ok(setup::guess_the_card(card).unwrap()));
//!
//! let feedback = session.submit_text(" dark magician").unwrap();
//! assert!(feedback.tone.is_positive());
//! assert_eq!(session.score().score(), 1);
//! ```

pub use self::{answer::*, card::*, dealer::*, evaluate::*, round::*, score::*, session::*};
pub use self::setup::{MissingAttribute, SharedProperty, shared_properties};

mod answer;
mod card;
mod dealer;
mod evaluate;
mod round;
mod score;
mod session;
pub mod setup;

#[cfg(test)]
mod test_util {
    use chrono::NaiveDate;

    use crate::{Card, CardId, CardImage};

    /// A card with an image and nothing else.
    pub(crate) fn card(id: u64, name: &str) -> Card {
        Card {
            images: vec![CardImage {
                image_url: format!("full/{id}.jpg"),
                image_url_cropped: format!("cropped/{id}.jpg"),
            }],
            ..Card::new(CardId::new(id), name)
        }
    }

    pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
