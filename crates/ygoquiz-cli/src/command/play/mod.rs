use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use ygoquiz_api::ApiClient;
use ygoquiz_engine::GameMode;

use self::{app::QuizApp, dealing::DealManager};
use super::ApiArg;
use crate::{logging, tui::Runtime};

mod action;
mod app;
mod dealing;

/// Finished deals are picked up at this interval.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Start directly in this mode instead of the menu: guess-the-card, guess-the-art,
    /// guess-the-name, product-guessing, small-world or which-is-older
    #[clap(long, value_name = "MODE")]
    pub(crate) mode: Option<GameMode>,
    /// Seed for card offsets and option order
    #[clap(long)]
    pub(crate) seed: Option<u64>,
    /// Write logs to this file (logging is off otherwise, the game owns the terminal)
    #[clap(long)]
    pub(crate) log_file: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg, api: &ApiArg) -> anyhow::Result<()> {
    let PlayArg {
        mode,
        seed,
        log_file,
    } = arg;

    logging::init_file(log_file.as_deref())?;

    let client = ApiClient::new(api.api_config())?;
    let deals = DealManager::new(client, api.dealer_config(), *seed)
        .context("failed to start async runtime")?;
    let mut app = QuizApp::new(deals, *mode);

    Runtime::new(TICK_INTERVAL).run(&mut app)?;
    log::info!("session finished");
    Ok(())
}
