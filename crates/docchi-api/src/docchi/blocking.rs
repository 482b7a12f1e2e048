//! `BlockingDocchiClient` - synchronous facade over `DocchiClient`.
//!
//! Each method blocks the calling thread for exactly one round trip.
//! Do not call these methods from inside an async runtime.

use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use super::api::LocalDocchiApi;
use super::client::{DocchiClient, DocchiClientBuilder};
use super::params::QueryParams;
use crate::error::{DocchiError, Result};

/// Blocking Docchi API client.
///
/// Owns a current-thread runtime that drives the async client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct BlockingDocchiClient {
    inner: DocchiClient,
    runtime: Runtime,
}

impl DocchiClientBuilder {
    /// Builds a blocking client.
    ///
    /// # Errors
    ///
    /// - The runtime cannot be started.
    /// - Any error of [`DocchiClientBuilder::build`].
    pub fn build_blocking(self) -> Result<BlockingDocchiClient> {
        let runtime = new_runtime()?;
        let inner = {
            let _guard = runtime.enter();
            self.build()?
        };
        Ok(BlockingDocchiClient { inner, runtime })
    }
}

fn new_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(DocchiError::Runtime)
}

impl BlockingDocchiClient {
    /// Creates a blocking client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        DocchiClient::builder().build_blocking()
    }

    /// Wraps an existing async client.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be started.
    pub fn from_client(inner: DocchiClient) -> Result<Self> {
        Ok(Self {
            inner,
            runtime: new_runtime()?,
        })
    }

    /// The wrapped async client.
    #[must_use]
    pub const fn inner(&self) -> &DocchiClient {
        &self.inner
    }

    /// See [`LocalDocchiApi::series_details`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn series_details(&self, slug: &str) -> Result<Value> {
        self.runtime.block_on(self.inner.series_details(slug))
    }

    /// See [`LocalDocchiApi::episode_players`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn episode_players(&self, slug: &str, episode: u32) -> Result<Value> {
        self.runtime
            .block_on(self.inner.episode_players(slug, episode))
    }

    /// See [`LocalDocchiApi::slug_from_mal_id`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn slug_from_mal_id(&self, mal_id: &str) -> Result<Option<String>> {
        self.runtime.block_on(self.inner.slug_from_mal_id(mal_id))
    }

    /// See [`LocalDocchiApi::episode_count`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn episode_count(&self, slug: &str) -> Result<Value> {
        self.runtime.block_on(self.inner.episode_count(slug))
    }

    /// See [`LocalDocchiApi::search`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn search(&self, query: &str) -> Result<Value> {
        self.runtime.block_on(self.inner.search(query))
    }

    /// See [`LocalDocchiApi::series_by_genre`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn series_by_genre(&self, genre: &str) -> Result<Value> {
        self.runtime.block_on(self.inner.series_by_genre(genre))
    }

    /// See [`LocalDocchiApi::series_list`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn series_list(&self, params: &QueryParams) -> Result<Value> {
        self.runtime.block_on(self.inner.series_list(params))
    }

    /// See [`LocalDocchiApi::latest_episodes`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn latest_episodes(&self, params: &QueryParams) -> Result<Value> {
        self.runtime.block_on(self.inner.latest_episodes(params))
    }

    /// See [`LocalDocchiApi::trending`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn trending(&self, params: &QueryParams) -> Result<Value> {
        self.runtime.block_on(self.inner.trending(params))
    }

    /// See [`LocalDocchiApi::seasonal`].
    ///
    /// # Errors
    ///
    /// Same as the async operation.
    pub fn seasonal(&self, season: &str, year: &str, params: &QueryParams) -> Result<Value> {
        self.runtime
            .block_on(self.inner.seasonal(season, year, params))
    }
}
