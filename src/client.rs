//! HTTP client for the CNPJ lookup service
//!
//! Wraps the two service endpoints: `POST /scrape` for single and batch
//! lookups, and `POST /upload-cnpjs` for server-side batch-file processing.
//! The client trusts its inputs — precondition checks (batch size, identifier
//! shape) belong to [`crate::session::SearchSession`] — and concerns itself
//! only with constructing requests and mapping responses to the error
//! taxonomy.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{CompanyRecord, ErrorBody, ScrapeRequest};

/// Path of the lookup endpoint
const SCRAPE_PATH: &str = "/scrape";

/// Path of the batch-file upload endpoint
const UPLOAD_PATH: &str = "/upload-cnpjs";

/// Generic message surfaced when a transport-level failure occurs
const NETWORK_ERROR_MESSAGE: &str = "network error occurred";

/// Client for the CNPJ lookup service
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections
/// internally.
#[derive(Clone, Debug)]
pub struct LookupClient {
    http: reqwest::Client,
    config: Config,
}

impl LookupClient {
    /// Create a client from the given configuration
    ///
    /// Validates the base URL and builds the HTTP client with the configured
    /// request timeout, so misconfiguration fails here rather than on the
    /// first lookup.
    pub fn new(config: Config) -> Result<Self> {
        config.endpoint_url(SCRAPE_PATH)?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to build HTTP client: {}", e),
                key: None,
            })?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up a single CNPJ
    ///
    /// Sends a one-element batch to the scrape endpoint. An empty result
    /// array means the registry has no record for this identifier and maps
    /// to [`Error::NotFound`]; a non-2xx response surfaces the server's
    /// message via [`Error::Server`].
    pub async fn lookup_one(&self, cnpj: &str) -> Result<CompanyRecord> {
        let mut records = self
            .scrape(vec![cnpj.to_string()], "Failed to search company")
            .await?;
        if records.is_empty() {
            tracing::debug!(cnpj = %cnpj, "lookup returned no record");
            return Err(Error::NotFound(cnpj.to_string()));
        }
        Ok(records.swap_remove(0))
    }

    /// Look up a batch of CNPJs in one request
    ///
    /// Returns every record the service found. An empty list is a valid
    /// outcome (zero matches), not an error — callers distinguish "nothing
    /// matched" from "request rejected" by the `Result` itself.
    pub async fn lookup_many(&self, cnpjs: &[String]) -> Result<Vec<CompanyRecord>> {
        self.scrape(cnpjs.to_vec(), "Failed to perform bulk search")
            .await
    }

    /// Upload a batch file for server-side processing
    ///
    /// Sends the file as a single multipart `file` field to the upload
    /// endpoint. The server parses the file itself and responds with a CSV
    /// byte stream, returned here unmodified.
    pub async fn upload_batch_file(&self, filename: &str, contents: Vec<u8>) -> Result<Vec<u8>> {
        let url = self.config.endpoint_url(UPLOAD_PATH)?;
        let part = reqwest::multipart::Part::bytes(contents).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        tracing::debug!(url = %url, filename = %filename, "uploading batch file");
        let response = self
            .http
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(server_error(response, "Failed to upload file").await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(&url, &e))?;
        tracing::debug!(url = %url, bytes = bytes.len(), "batch file processed");
        Ok(bytes.to_vec())
    }

    /// Shared scrape call for both lookup paths
    async fn scrape(&self, cnpjs: Vec<String>, fallback: &str) -> Result<Vec<CompanyRecord>> {
        let url = self.config.endpoint_url(SCRAPE_PATH)?;
        let request = ScrapeRequest { cnpjs };

        tracing::debug!(url = %url, count = request.cnpjs.len(), "sending lookup request");
        let response = self
            .http
            .post(url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(server_error(response, fallback).await);
        }

        // An empty body from the service counts as zero matches.
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(&url, &e))?;
        if body.is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<CompanyRecord> = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "malformed response from lookup service");
            Error::Network("malformed response from lookup service".to_string())
        })?;
        tracing::debug!(url = %url, records = records.len(), "lookup request succeeded");
        Ok(records)
    }
}

/// Collapse a transport failure to the generic network error, logging detail
fn transport_error(url: &url::Url, e: &reqwest::Error) -> Error {
    tracing::warn!(url = %url, error = %e, "request failed");
    Error::Network(NETWORK_ERROR_MESSAGE.to_string())
}

/// Map a non-2xx response to a server error, preferring the body's message
async fn server_error(response: reqwest::Response, fallback: &str) -> Error {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => fallback.to_string(),
    };
    tracing::warn!(status = status, message = %message, "lookup service rejected request");
    Error::Server { status, message }
}
