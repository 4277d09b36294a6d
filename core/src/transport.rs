//! Executes plain-data requests over the network.
//!
//! # Design
//! `Transport` is the only I/O seam in the crate. `UreqTransport` blocks the
//! calling thread for the full round-trip and leaves status interpretation
//! to `FeedClient`: ureq's status-code-as-error behavior is switched off so
//! 4xx/5xx responses come back as data rather than `Err`.

use std::fmt;

use tracing::{debug, warn};

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one HTTP round-trip.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let io_error = |e: ureq::Error| {
            warn!(url = %request.url, error = %e, "request failed");
            TransportError::Io {
                url: request.url.clone(),
                message: e.to_string(),
            }
        };

        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(io_error)?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(io_error)?;
        debug!(url = %request.url, status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}
