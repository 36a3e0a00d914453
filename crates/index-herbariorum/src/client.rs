//! Index Herbariorum API HTTP client

use std::path::Path;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{IndexHerbariorumError, Result};
use crate::params::SearchParams;
use crate::types::{Envelope, Resource, DEFAULT_CSV_FILENAME};

/// Client for the Index Herbariorum API web services
///
/// Every operation issues at most one GET request. Responses other than
/// `200 OK` are reported as [`IndexHerbariorumError::Status`].
/// See <https://github.com/nybgvh/IH-API/wiki> for the API itself.
#[derive(Debug, Clone)]
pub struct IndexHerbariorumClient {
    http: reqwest::Client,
    base_url: Url,
}

impl IndexHerbariorumClient {
    /// Create a client against the public NYBG endpoint
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client against a custom endpoint, e.g. a mirror or a mock server
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            IndexHerbariorumError::InvalidBaseUrl(format!("{}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(IndexHerbariorumError::InvalidBaseUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get all available countries
    pub async fn countries(&self) -> Result<Value> {
        let url = self.endpoint(&["countries"], None)?;
        self.get_json(url).await
    }

    /// Search staff records
    ///
    /// With empty `params` this lists every staff record (`/staff`),
    /// otherwise it queries `/staff/search`. The `download` key is rejected;
    /// use [`export_csv`](Self::export_csv) for CSV output.
    pub async fn staff(&self, params: &SearchParams) -> Result<Value> {
        self.search(Resource::Staff, params).await
    }

    /// Get a single institution by its herbarium code (e.g. `"NY"`)
    pub async fn institution(&self, code: &str) -> Result<Value> {
        let url = self.endpoint(&["institutions", code], None)?;
        self.get_json(url).await
    }

    /// Search institution records
    ///
    /// Same contract as [`staff`](Self::staff), over `/institutions`.
    pub async fn institutions(&self, params: &SearchParams) -> Result<Value> {
        self.search(Resource::Institutions, params).await
    }

    /// Total number of countries
    pub async fn count_countries(&self) -> Result<u64> {
        hits(self.countries().await?)
    }

    /// Number of staff records matching `params`
    pub async fn count_staff(&self, params: &SearchParams) -> Result<u64> {
        hits(self.staff(params).await?)
    }

    /// Number of institution records matching `params`
    pub async fn count_institutions(&self, params: &SearchParams) -> Result<u64> {
        hits(self.institutions(params).await?)
    }

    /// Download search results as CSV into `index_herbariorum.csv`
    ///
    /// See [`export_csv_to`](Self::export_csv_to).
    pub async fn export_csv(
        &self,
        resource: impl AsRef<str>,
        params: &SearchParams,
    ) -> Result<u64> {
        self.export_csv_to(resource, params, DEFAULT_CSV_FILENAME)
            .await
    }

    /// Download search results as CSV into `destination`
    ///
    /// `resource` must be `"staff"` or `"institutions"`. The file is created
    /// or overwritten only after a `200 OK`; returns the number of bytes written.
    ///
    /// # Arguments
    /// * `resource` - Resource to search, as a [`Resource`] or its name
    /// * `params` - Search parameters; must not contain `download`
    /// * `destination` - Path of the CSV file to write
    pub async fn export_csv_to(
        &self,
        resource: impl AsRef<str>,
        params: &SearchParams,
        destination: impl AsRef<Path>,
    ) -> Result<u64> {
        let resource: Resource = resource.as_ref().parse()?;
        params.ensure_no_reserved_keys()?;

        let url = self.endpoint(&[resource.as_str(), "search"], Some(&params.for_download()))?;
        debug!(url = %url, "GET csv");

        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "text/csv")
            .send()
            .await?;
        let response = check_status(response)?;
        let body = response.bytes().await?;

        let destination = destination.as_ref();
        tokio::fs::write(destination, &body).await?;

        info!(
            resource = %resource,
            path = %destination.display(),
            bytes = body.len(),
            "Exported CSV"
        );

        Ok(body.len() as u64)
    }

    async fn search(&self, resource: Resource, params: &SearchParams) -> Result<Value> {
        params.ensure_no_reserved_keys()?;

        let url = if params.is_empty() {
            self.endpoint(&[resource.as_str()], None)?
        } else {
            self.endpoint(&[resource.as_str(), "search"], Some(params))?
        };
        self.get_json(url).await
    }

    /// Build `{base}/{segments...}?{params}`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str], params: Option<&SearchParams>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| IndexHerbariorumError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        if let Some(params) = params.filter(|p| !p.is_empty()) {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value> {
        debug!(url = %url, "GET");
        let response = self.http.get(url).send().await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }
}

/// Only `200 OK` counts as success, for every endpoint
fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status != StatusCode::OK {
        warn!(url = %response.url(), status = status.as_u16(), "Index Herbariorum request failed");
        return Err(IndexHerbariorumError::Status(status.as_u16()));
    }
    Ok(response)
}

fn hits(body: Value) -> Result<u64> {
    let envelope: Envelope = serde_json::from_value(body)?;
    debug!(hits = envelope.meta.hits, "Counted records");
    Ok(envelope.meta.hits)
}
