//! Thin reqwest wrapper around the PokéAPI endpoints.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::api::{NameIndexResponse, PokemonResponse, SpeciesResponse};
use crate::source::SourceError;

/// Public endpoint of the creature database.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// HTTP client for the creature database.
///
/// The base URL is overridable so tests and mirrors can point the client
/// elsewhere without touching call sites.
pub struct PokeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PokeApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the base creature resource by id-string or name.
    pub async fn get_pokemon(&self, key: &str) -> Result<PokemonResponse, SourceError> {
        let url = format!("{}/pokemon/{}", self.base_url, key);
        self.get_json(&url).await
    }

    /// Fetches the species resource linked from a creature payload.
    ///
    /// The API hands back absolute URLs for linked resources, so this takes
    /// the URL verbatim instead of rebuilding it.
    pub async fn get_species(&self, url: &str) -> Result<SpeciesResponse, SourceError> {
        self.get_json(url).await
    }

    /// Fetches the first `limit` entries of the bulk name index.
    pub async fn list_names(&self, limit: u32) -> Result<Vec<String>, SourceError> {
        let url = format!("{}/pokemon?limit={}", self.base_url, limit);
        let index: NameIndexResponse = self.get_json(&url).await?;
        Ok(index.results.into_iter().map(|entry| entry.name).collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        tracing::debug!(%url, "fetching from creature database");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SourceError::Transport(format!(
                "{url} returned status {status}: {body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Transport(format!("failed to read body of {url}: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| SourceError::Malformed(format!("failed to parse response of {url}: {e}")))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}
