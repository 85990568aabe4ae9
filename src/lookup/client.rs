//! Search service HTTP client

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::LookupError;
use crate::character::record::enrich_all;
use crate::character::{CharacterRecord, EnrichedCharacter, ServiceMessage};
use crate::config::ServerConfig;

const SEARCH_ROUTE: &str = "search_characters";
const LIST_ROUTE: &str = "list_all_characters";
const FETCH_TOP_ROUTE: &str = "fetch_top_characters";
const CLEAR_ROUTE: &str = "clear_database";

/// Longest error body kept in `LookupError::Status`
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Client for the character search service
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: Url,
}

impl SearchClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, LookupError> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, LookupError> {
        Self::new(&config.url, config.timeout_secs.map(Duration::from_secs))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the search URL with `character` as an encoded query parameter
    pub fn search_url(&self, character: &str) -> Result<Url, LookupError> {
        let mut url = self.route(SEARCH_ROUTE)?;
        url.query_pairs_mut().append_pair("character", character);
        Ok(url)
    }

    /// Look up all records matching `character`
    pub async fn search(&self, character: &str) -> Result<Vec<CharacterRecord>, LookupError> {
        let url = self.search_url(character)?;
        self.get_json(url).await
    }

    /// Look up records and attach their romanized readings
    pub async fn search_enriched(
        &self,
        character: &str,
    ) -> Result<Vec<EnrichedCharacter>, LookupError> {
        let records = self.search(character).await?;
        Ok(enrich_all(records))
    }

    /// Every record the service holds
    pub async fn list_all(&self) -> Result<Vec<CharacterRecord>, LookupError> {
        let url = self.route(LIST_ROUTE)?;
        self.get_json(url).await
    }

    /// Ask the service to import the top characters from its upstream source
    pub async fn fetch_top(&self) -> Result<ServiceMessage, LookupError> {
        let url = self.route(FETCH_TOP_ROUTE)?;
        self.get_json(url).await
    }

    /// Drop and recreate the service's character table
    pub async fn clear_database(&self) -> Result<ServiceMessage, LookupError> {
        let url = self.route(CLEAR_ROUTE)?;
        self.get_json(url).await
    }

    fn route(&self, route: &str) -> Result<Url, LookupError> {
        self.base_url
            .join(route)
            .map_err(|e| LookupError::InvalidUrl(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, LookupError> {
        log::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Status {
                code: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        // Decode failures map to `LookupError::Payload`
        Ok(response.json().await?)
    }
}

/// Keep error bodies short enough for a notification line
fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}…", &body[..end]),
        None => body.to_string(),
    }
}

/// Parse the service base URL so that routes join beneath it
fn parse_base_url(base_url: &str) -> Result<Url, LookupError> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash).map_err(|e| LookupError::InvalidUrl(format!("{}: {}", trimmed, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(LookupError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            trimmed,
            url.scheme()
        )));
    }
    Ok(url)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
