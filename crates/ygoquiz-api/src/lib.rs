//! YGOPRODeck card database client.
//!
//! [`ApiClient`] implements [`ygoquiz_engine::CardSource`] on top of the public
//! `cardinfo.php` endpoint, fetching one card per request by catalog offset.

pub use self::{client::*, config::*};

mod client;
mod config;
mod wire;
