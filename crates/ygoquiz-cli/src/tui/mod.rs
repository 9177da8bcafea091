//! Minimal terminal runtime: a fixed tick for background polling, redraws on change.

pub(crate) use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
