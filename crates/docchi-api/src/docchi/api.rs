//! `DocchiApi` trait definition.
#![allow(clippy::future_not_send)]

use serde_json::Value;

use super::params::QueryParams;
use crate::error::Result;

/// Docchi API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(DocchiApi: Send)]
pub trait LocalDocchiApi {
    /// Fetches series details by slug (`/series/find/{slug}`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty slug, otherwise any
    /// HTTP, connectivity or decode error.
    async fn series_details(&self, slug: &str) -> Result<Value>;

    /// Fetches the player sources of one episode.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty slug, otherwise any
    /// HTTP, connectivity or decode error.
    async fn episode_players(&self, slug: &str, episode: u32) -> Result<Value>;

    /// Resolves a MAL id to a Docchi slug.
    ///
    /// Returns `Ok(None)` when the related listing has no entry for the ID.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `mal_id` is empty or not an unsigned
    /// integer, otherwise any HTTP, connectivity or decode error.
    async fn slug_from_mal_id(&self, mal_id: &str) -> Result<Option<String>>;

    /// Fetches the number of available episodes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty slug, otherwise any
    /// HTTP, connectivity or decode error.
    async fn episode_count(&self, slug: &str) -> Result<Value>;

    /// Free-text search.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty query, otherwise any
    /// HTTP, connectivity or decode error.
    async fn search(&self, query: &str) -> Result<Value>;

    /// Lists series of a genre, newest first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty genre, otherwise any
    /// HTTP, connectivity or decode error.
    async fn series_by_genre(&self, genre: &str) -> Result<Value>;

    /// Lists series, forwarding `params` as the query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn series_list(&self, params: &QueryParams) -> Result<Value>;

    /// Lists the latest episodes, forwarding `params` as the query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn latest_episodes(&self, params: &QueryParams) -> Result<Value>;

    /// Lists trending series, forwarding `params` as the query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn trending(&self, params: &QueryParams) -> Result<Value>;

    /// Lists series airing in `season` of `year`.
    ///
    /// `params` are appended after the mandatory `season` and `season_year`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty season or year, otherwise any
    /// HTTP, connectivity or decode error.
    async fn seasonal(&self, season: &str, year: &str, params: &QueryParams) -> Result<Value>;
}
