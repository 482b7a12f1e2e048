//! `DocchiClient` - Docchi API client implementation.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::api::LocalDocchiApi;
use super::endpoint::Endpoint;
use super::params::QueryParams;
use super::types::find_related_slug;
use crate::error::{DocchiError, Result};

/// Default base URL for the Docchi API v1.
pub const DEFAULT_BASE_URL: &str = "https://api.docchi.pl/v1";

/// Default base URL for the Docchi website API (search only).
pub const DEFAULT_SITE_URL: &str = "https://docchi.pl/api";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Docchi API client.
///
/// Stateless apart from its configuration: every call is an independent
/// round trip. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct DocchiClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Base URL for website requests (search).
    site_url: Url,
    /// Per-request timeout.
    timeout: Duration,
}

/// Builder for `DocchiClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct DocchiClientBuilder {
    base_url: Option<Url>,
    site_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl DocchiClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            site_url: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the API base URL (for wiremock in tests).
    #[cfg(any(test, feature = "test-util"))]
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the website base URL used by search (for wiremock in tests).
    #[cfg(any(test, feature = "test-util"))]
    #[must_use]
    pub fn site_url(mut self, url: Url) -> Self {
        self.site_url = Some(url);
        self
    }

    /// Sets the User-Agent (default: `docchi-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Overrides the request timeout (for timeout tests).
    #[cfg(any(test, feature = "test-util"))]
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - A base URL cannot take path segments.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<DocchiClient> {
        let base_url = resolve_url(self.base_url, DEFAULT_BASE_URL)?;
        let site_url = resolve_url(self.site_url, DEFAULT_SITE_URL)?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(DocchiError::Client)?;

        Ok(DocchiClient {
            http_client,
            base_url,
            site_url,
            timeout,
        })
    }
}

/// Uses the override if given, otherwise parses the default.
fn resolve_url(url: Option<Url>, default: &str) -> Result<Url> {
    let url = match url {
        Some(url) => url,
        None => Url::parse(default)?,
    };
    if url.cannot_be_a_base() {
        return Err(DocchiError::CannotBeABase(url.into()));
    }
    Ok(url)
}

/// Turns a non-success status into `HttpStatus`, passing the body through otherwise.
fn check_status(url: &Url, status: StatusCode, body: String) -> Result<String> {
    if status.is_success() {
        return Ok(body);
    }
    tracing::debug!(
        %url,
        status = status.as_u16(),
        body_len = body.len(),
        "Docchi API returned an error status"
    );
    Err(DocchiError::http_status(status, body))
}

/// Parses a MAL id argument.
fn parse_mal_id(mal_id: &str) -> Result<u64> {
    mal_id
        .trim()
        .parse::<u64>()
        .map_err(|_| DocchiError::InvalidArgument("mal id"))
}

impl DocchiClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> DocchiClientBuilder {
        DocchiClientBuilder::new()
    }

    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Website base URL.
    #[must_use]
    pub const fn site_url(&self) -> &Url {
        &self.site_url
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the URL for an endpoint. Fails before any I/O on bad arguments.
    fn url(&self, endpoint: Endpoint<'_>) -> Result<Url> {
        endpoint.url(&self.base_url, &self.site_url)
    }

    /// Sends a single GET request and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "Docchi API request");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(DocchiError::Connectivity)?;

        let status = response.status();
        let body = response.text().await.map_err(DocchiError::Connectivity)?;
        let body = check_status(&url, status, body)?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Builds the endpoint URL and fetches it.
    async fn fetch(&self, endpoint: Endpoint<'_>) -> Result<Value> {
        let url = self.url(endpoint)?;
        self.get_json(url).await
    }
}

impl LocalDocchiApi for DocchiClient {
    #[instrument(skip_all, fields(slug = %slug))]
    async fn series_details(&self, slug: &str) -> Result<Value> {
        self.fetch(Endpoint::SeriesDetails { slug }).await
    }

    #[instrument(skip_all, fields(slug = %slug, episode = episode))]
    async fn episode_players(&self, slug: &str, episode: u32) -> Result<Value> {
        self.fetch(Endpoint::EpisodePlayers { slug, episode }).await
    }

    #[instrument(skip_all, fields(mal_id = %mal_id))]
    async fn slug_from_mal_id(&self, mal_id: &str) -> Result<Option<String>> {
        let mal_id = parse_mal_id(mal_id)?;
        let url = self.url(Endpoint::RelatedSeries { mal_id })?;
        let related: Vec<Value> = self.get_json(url).await?;

        let slug = find_related_slug(&related, mal_id).map(String::from);
        if slug.is_none() {
            tracing::debug!(mal_id, entries = related.len(), "No related series for MAL id");
        }
        Ok(slug)
    }

    #[instrument(skip_all, fields(slug = %slug))]
    async fn episode_count(&self, slug: &str) -> Result<Value> {
        self.fetch(Endpoint::EpisodeCount { slug }).await
    }

    #[instrument(skip_all)]
    async fn search(&self, query: &str) -> Result<Value> {
        self.fetch(Endpoint::Search { query }).await
    }

    #[instrument(skip_all, fields(genre = %genre))]
    async fn series_by_genre(&self, genre: &str) -> Result<Value> {
        self.fetch(Endpoint::SeriesByGenre { genre }).await
    }

    #[instrument(skip_all)]
    async fn series_list(&self, params: &QueryParams) -> Result<Value> {
        self.fetch(Endpoint::SeriesList { params }).await
    }

    #[instrument(skip_all)]
    async fn latest_episodes(&self, params: &QueryParams) -> Result<Value> {
        self.fetch(Endpoint::LatestEpisodes { params }).await
    }

    #[instrument(skip_all)]
    async fn trending(&self, params: &QueryParams) -> Result<Value> {
        self.fetch(Endpoint::Trending { params }).await
    }

    #[instrument(skip_all, fields(season = %season, year = %year))]
    async fn seasonal(&self, season: &str, year: &str, params: &QueryParams) -> Result<Value> {
        self.fetch(Endpoint::Seasonal {
            season,
            year,
            params,
        })
        .await
    }
}
