use ygoquiz_engine::{Card, CardSource, FetchError};

use crate::{ApiConfig, wire::ApiResponse};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
#[display("failed to build HTTP client")]
pub struct ClientBuildError(reqwest::Error);

/// HTTP client for the card info endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientBuildError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the card at `offset` of the full catalog.
    ///
    /// An `error` body (the endpoint answers HTTP 400 for offsets past the end)
    /// and an empty `data` array both map to [`FetchError::NotFound`].
    pub async fn card_at(&self, offset: u32) -> Result<Card, FetchError> {
        log::debug!("GET {} offset={offset}", self.config.base_url);
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[("num", 1), ("offset", offset)])
            .query(&[("misc", "yes")])
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body: ApiResponse = response.json().await.map_err(|e| {
            if status.is_success() {
                classify(e)
            } else {
                FetchError::Request {
                    message: format!("HTTP {status}"),
                }
            }
        })?;

        if let Some(error) = body.error {
            log::debug!("offset {offset}: {error}");
            return Err(FetchError::NotFound { offset });
        }
        if !status.is_success() {
            return Err(FetchError::Request {
                message: format!("HTTP {status}"),
            });
        }
        body.data
            .and_then(|data| data.into_iter().next())
            .map(Card::from)
            .ok_or(FetchError::NotFound { offset })
    }
}

fn classify(error: reqwest::Error) -> FetchError {
    log::debug!("card request failed: {error}");
    let message = error.to_string();
    if error.is_decode() {
        FetchError::Decode { message }
    } else {
        FetchError::Request { message }
    }
}

impl CardSource for ApiClient {
    fn catalog_size(&self) -> u32 {
        self.config.catalog_size
    }

    async fn fetch_card_at(&self, offset: u32) -> Result<Card, FetchError> {
        self.card_at(offset).await
    }
}
