//! Docchi API client module.
//!
//! Builds endpoint URLs against `api.docchi.pl/v1` (and `docchi.pl/api`
//! for search), sends one GET per call and relays the JSON body.

mod api;
mod blocking;
mod client;
mod endpoint;
mod params;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{DocchiApi, LocalDocchiApi};
#[allow(clippy::module_name_repetitions)]
pub use blocking::BlockingDocchiClient;
#[allow(clippy::module_name_repetitions)]
pub use client::{
    DEFAULT_BASE_URL, DEFAULT_SITE_URL, DEFAULT_TIMEOUT, DocchiClient, DocchiClientBuilder,
};
pub use params::{ParamValue, QueryParams, to_query_string};
pub use types::find_related_slug;
