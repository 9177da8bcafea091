use std::time::Duration;

use clap::{Parser, Subcommand};
use ygoquiz_api::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_CATALOG_SIZE};
use ygoquiz_engine::DealerConfig;

use self::{draw::DrawArg, play::PlayArg};

mod draw;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    api: ApiArg,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the quiz in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Fetch random cards and print them as JSON
    Draw(#[clap(flatten)] DrawArg),
}

/// Card database options shared by all commands.
#[derive(Debug, Clone, clap::Args)]
struct ApiArg {
    /// URL of the card info endpoint
    #[clap(long, env = "YGOQUIZ_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    api_url: String,
    /// Request timeout in seconds
    #[clap(long, env = "YGOQUIZ_TIMEOUT_SECS", default_value_t = 10, global = true)]
    timeout_secs: u64,
    /// Random offsets are drawn below this number
    #[clap(long, env = "YGOQUIZ_CATALOG_SIZE", default_value_t = DEFAULT_CATALOG_SIZE, global = true)]
    catalog_size: u32,
    /// Fetches spent looking for one acceptable card before giving up
    #[clap(long, env = "YGOQUIZ_MAX_ATTEMPTS", default_value_t = DealerConfig::default().max_attempts, global = true)]
    max_attempts: usize,
}

impl ApiArg {
    fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            catalog_size: self.catalog_size,
            ..ApiConfig::default()
        }
    }

    fn dealer_config(&self) -> DealerConfig {
        DealerConfig {
            max_attempts: self.max_attempts.max(1),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let CommandArgs { api, mode } = CommandArgs::parse();
    match mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg, &api)?,
        Mode::Draw(arg) => draw::run(&arg, &api)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use ygoquiz_engine::GameMode;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_api_options_after_subcommand() {
        let args = CommandArgs::try_parse_from([
            "ygoquiz",
            "draw",
            "-n",
            "3",
            "--catalog-size",
            "500",
            "--timeout-secs",
            "2",
        ])
        .unwrap();
        let config = args.api.api_config();
        assert_eq!(config.catalog_size, 500);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert!(matches!(args.mode, Some(Mode::Draw(DrawArg { count: 3 }))));
    }

    #[test]
    fn test_play_mode_by_slug() {
        let args =
            CommandArgs::try_parse_from(["ygoquiz", "play", "--mode", "which-is-older", "--seed", "7"])
                .unwrap();
        let Some(Mode::Play(arg)) = args.mode else {
            panic!("expected play");
        };
        assert_eq!(arg.mode, Some(GameMode::WhichIsOlder));
        assert_eq!(arg.seed, Some(7));

        assert!(CommandArgs::try_parse_from(["ygoquiz", "play", "--mode", "poker"]).is_err());
    }

    #[test]
    fn test_max_attempts_is_at_least_one() {
        let args = CommandArgs::try_parse_from(["ygoquiz", "--max-attempts", "0"]).unwrap();
        assert_eq!(args.api.dealer_config().max_attempts, 1);
        assert!(args.mode.is_none());
    }
}
