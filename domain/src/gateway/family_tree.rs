//! Client for the upstream family members REST API.
//!
//! Every relayed operation goes through [`FamilyTreeClient::forward`], which issues one
//! GET request and either hands back the upstream body untouched or turns the failure
//! into a domain error carrying the status and message the client should see.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind};
use bytes::Bytes;
use log::*;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use service::config::Config;

/// One upstream call: the path below the upstream origin, the query pairs to send, and
/// the message reported to the client when the upstream gives no better one.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    path: String,
    query: Vec<(&'static str, String)>,
    failure_message: &'static str,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, failure_message: &'static str) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            failure_message,
        }
    }

    pub fn with_query(mut self, name: &'static str, value: String) -> Self {
        self.query.push((name, value));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn failure_message(&self) -> &'static str {
        self.failure_message
    }
}

/// A successful upstream answer, kept as raw bytes so it can be relayed verbatim.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Shape of an upstream error body. Only `message` is of interest; anything else,
/// including a body that isn't JSON at all, is ignored.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the family members API rooted at the configured upstream origin.
#[derive(Clone)]
pub struct FamilyTreeClient {
    client: reqwest::Client,
    base_url: String,
}

impl FamilyTreeClient {
    pub fn new(config: &Config, client: &reqwest::Client) -> Self {
        Self {
            client: client.clone(),
            base_url: config.upstream_base_url().to_string(),
        }
    }

    /// Full upstream URL for `endpoint`, without its query string.
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path)
    }

    /// Sends exactly one GET for `endpoint` and relays the outcome.
    pub async fn forward(&self, endpoint: &Endpoint) -> Result<UpstreamResponse, Error> {
        let url = self.url(endpoint);
        debug!("Relaying GET {url} with query {:?}", endpoint.query);

        let mut request = self.client.get(&url).header(ACCEPT, "*/*");
        if !endpoint.query.is_empty() {
            request = request.query(&endpoint.query);
        }

        let response = request
            .send()
            .await
            .map_err(|err| network_error(endpoint, err))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|err| network_error(endpoint, err))?;

        if status.is_success() {
            debug!("Upstream answered {status} ({} bytes)", body.len());
            return Ok(UpstreamResponse {
                content_type,
                body,
            });
        }

        let message =
            upstream_message(&body).unwrap_or_else(|| endpoint.failure_message.to_string());
        error!(
            "{}: upstream answered {status} for {url}: {message}",
            endpoint.failure_message
        );

        Err(Error {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Upstream {
                status: status.as_u16(),
                message,
            }),
        })
    }
}

fn network_error(endpoint: &Endpoint, err: reqwest::Error) -> Error {
    error!("{}: {err:?}", endpoint.failure_message);
    Error {
        source: Some(Box::new(err)),
        error_kind: DomainErrorKind::External(ExternalErrorKind::Network {
            message: endpoint.failure_message.to_string(),
        }),
    }
}

fn upstream_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|message| !message.is_empty())
}
