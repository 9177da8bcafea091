use std::io::{self, Write as _};

use anyhow::Context as _;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use ygoquiz_api::ApiClient;
use ygoquiz_engine::fetch_distinct_cards;

use super::ApiArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DrawArg {
    /// Number of distinct cards to fetch
    #[clap(short = 'n', long, default_value_t = 1)]
    pub(crate) count: usize,
}

pub(crate) fn run(arg: &DrawArg, api: &ApiArg) -> anyhow::Result<()> {
    crate::logging::init_stderr();

    let client = ApiClient::new(api.api_config())?;
    let config = api.dealer_config();
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let mut rng = Pcg32::from_rng(&mut rand::rng());

    let cards = runtime
        .block_on(fetch_distinct_cards(&client, arg.count, &[], &mut rng, &config))
        .with_context(|| format!("failed to draw {} card(s)", arg.count))?;
    log::info!("drew {} card(s)", cards.len());

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &cards)?;
    writeln!(stdout)?;
    Ok(())
}
