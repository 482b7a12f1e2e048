//! URL construction for each Docchi endpoint.

use url::{Url, form_urlencoded};

use super::params::{QueryParams, to_query_string};
use crate::error::{DocchiError, Result};

/// Sort order sent with genre browsing. Not configurable.
const GENRE_SORT: &str = "DESC";

/// A Docchi endpoint together with its arguments.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Endpoint<'a> {
    SeriesDetails { slug: &'a str },
    EpisodePlayers { slug: &'a str, episode: u32 },
    RelatedSeries { mal_id: u64 },
    EpisodeCount { slug: &'a str },
    Search { query: &'a str },
    SeriesByGenre { genre: &'a str },
    SeriesList { params: &'a QueryParams },
    LatestEpisodes { params: &'a QueryParams },
    Trending { params: &'a QueryParams },
    Seasonal {
        season: &'a str,
        year: &'a str,
        params: &'a QueryParams,
    },
}

impl Endpoint<'_> {
    /// Builds the request URL.
    ///
    /// Search goes to `site_url`; everything else goes to `base_url`.
    ///
    /// # Errors
    ///
    /// - A required argument is empty (`InvalidArgument`).
    /// - The base URL cannot take path segments.
    pub(crate) fn url(&self, base_url: &Url, site_url: &Url) -> Result<Url> {
        match *self {
            Self::SeriesDetails { slug } => {
                let slug = require(slug, "anime slug")?;
                with_path(base_url, &["series", "find", slug])
            }
            Self::EpisodePlayers { slug, episode } => {
                let slug = require(slug, "anime slug")?;
                let episode = episode.to_string();
                with_path(base_url, &["episodes", "find", slug, &episode])
            }
            Self::RelatedSeries { mal_id } => {
                let mal_id = mal_id.to_string();
                with_path(base_url, &["series", "related", &mal_id])
            }
            Self::EpisodeCount { slug } => {
                let slug = require(slug, "anime slug")?;
                with_path(base_url, &["episodes", "count", slug])
            }
            Self::Search { query } => {
                let query = require(query, "search string")?;
                let mut url = with_path(site_url, &["search", "search"])?;
                url.query_pairs_mut().append_pair("string", query);
                Ok(url)
            }
            Self::SeriesByGenre { genre } => {
                let genre = require(genre, "genre")?;
                let mut url = with_path(base_url, &["series", "category"])?;
                url.query_pairs_mut()
                    .append_pair("name", genre)
                    .append_pair("sort", GENRE_SORT);
                Ok(url)
            }
            Self::SeriesList { params } => with_params(base_url, &["series", "list"], params),
            Self::LatestEpisodes { params } => {
                with_params(base_url, &["episodes", "latest"], params)
            }
            Self::Trending { params } => with_params(base_url, &["homepage", "trending"], params),
            Self::Seasonal {
                season,
                year,
                params,
            } => {
                let season = require(season, "season")?;
                let year = require(year, "season year")?;
                let mut url = with_path(base_url, &["homepage", "season"])?;
                let mut query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("season", season)
                    .append_pair("season_year", year)
                    .finish();
                if let Some(extra) = to_query_string(params) {
                    query.push('&');
                    query.push_str(&extra);
                }
                url.set_query(Some(&query));
                Ok(url)
            }
        }
    }
}

/// Rejects empty or whitespace-only arguments.
fn require<'a>(value: &'a str, what: &'static str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(DocchiError::InvalidArgument(what));
    }
    Ok(value)
}

/// Appends percent-encoded path segments to `root`.
fn with_path(root: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = root.clone();
    url.path_segments_mut()
        .map_err(|()| DocchiError::CannotBeABase(root.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Appends path segments and, if any, the passthrough parameters.
fn with_params(root: &Url, segments: &[&str], params: &QueryParams) -> Result<Url> {
    let mut url = with_path(root, segments)?;
    url.set_query(to_query_string(params).as_deref());
    Ok(url)
}
