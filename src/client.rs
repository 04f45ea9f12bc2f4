use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::api::{is_truthy, SearchRequest, SearchResponse};

pub const DEFAULT_ENDPOINT: &str = "https://mediathekviewweb.de/api/query";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API responded with status {0}")]
    Status(StatusCode),

    #[error("failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),
}

/// Result of one search term. A failed term contributes no URLs.
#[derive(Debug)]
pub struct QueryOutcome {
    pub term: String,
    pub urls: Result<Vec<String>, QueryError>,
}

impl QueryOutcome {
    pub fn is_failure(&self) -> bool {
        self.urls.is_err()
    }
}

pub struct MediathekClient {
    http: Client,
    endpoint: String,
}

impl MediathekClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs a single search and returns every non-empty media URL in the
    /// result items.
    pub fn search(&self, term: &str, page_size: usize) -> Result<Vec<String>, QueryError> {
        let payload = SearchRequest::for_term(term, page_size);
        debug!(action = "request", component = "search", query = term, payload = ?payload, "Sending search request");

        let response = self.http.post(&self.endpoint).json(&payload).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Status(status));
        }

        let body = response.text()?;
        let value: Value = serde_json::from_str(&body)?;
        if !is_truthy(&value) {
            return Ok(Vec::new());
        }
        let parsed = SearchResponse::deserialize(value)?;

        match parsed.result {
            Some(result) if !result.results.is_empty() => {
                if let Some(query_info) = &result.query_info {
                    info!(
                        action = "response",
                        component = "search",
                        query = term,
                        result_count = query_info.result_count,
                        total_results = query_info.total_results,
                        "Search returned results"
                    );
                }

                let urls: Vec<String> = result
                    .results
                    .iter()
                    .inspect(|item| {
                        debug!(
                            component = "search",
                            channel = item.channel.as_deref().unwrap_or_default(),
                            topic = item.topic.as_deref().unwrap_or_default(),
                            title = item.title.as_deref().unwrap_or_default(),
                            "Result item"
                        )
                    })
                    .flat_map(|item| item.urls())
                    .map(String::from)
                    .collect();
                Ok(urls)
            }
            _ => match parsed.error_message() {
                Some(message) => Err(QueryError::Api(message)),
                None => Ok(Vec::new()),
            },
        }
    }
}

/// Searches each term in order. Failures are logged and recorded; they never
/// stop the remaining terms from running.
pub fn collect_urls<S: AsRef<str>>(
    client: &MediathekClient,
    terms: &[S],
    page_size: usize,
) -> Vec<QueryOutcome> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "url_collection",
        term_count = terms.len(),
        page_size,
        endpoint = client.endpoint(),
        "Starting URL collection"
    );

    let mut outcomes = Vec::with_capacity(terms.len());
    for term in terms {
        let term = term.as_ref();
        let urls = client.search(term, page_size);

        match &urls {
            Ok(found) => info!(
                action = "query",
                component = "url_collection",
                query = term,
                url_count = found.len(),
                "Collected URLs"
            ),
            Err(e) => error!(
                action = "query",
                component = "url_collection",
                query = term,
                error = %e,
                "Query failed"
            ),
        }

        outcomes.push(QueryOutcome {
            term: term.to_string(),
            urls,
        });
    }

    info!(
        action = "complete",
        component = "url_collection",
        failed = outcomes.iter().filter(|o| o.is_failure()).count(),
        duration_ms = start_time.elapsed().as_millis(),
        "URL collection completed"
    );

    outcomes
}
