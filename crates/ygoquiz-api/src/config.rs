use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://db.ygoprodeck.com/api/v7/cardinfo.php";

/// Offsets are drawn below this bound; the database holds somewhat more cards.
pub const DEFAULT_CATALOG_SIZE: u32 = 10_000;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Full URL of the card info endpoint.
    pub base_url: String,
    /// Per-request timeout, covering connect and body.
    pub timeout: Duration,
    pub catalog_size: u32,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            catalog_size: DEFAULT_CATALOG_SIZE,
            user_agent: concat!("ygoquiz/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
