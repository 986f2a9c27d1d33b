use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ezid_verify_core::HttpOutcome;
use tracing::debug;
use ureq::{Agent, AgentBuilder};

const ANVL_CONTENT_TYPE: &str = "text/plain; charset=UTF-8";

/// Blocking HTTP client. Every call is bounded by the agent timeout and never retried.
pub struct Client {
    agent: Agent,
}

impl Client {
    pub fn new(timeout: Duration) -> Self {
        let agent = AgentBuilder::new().timeout(timeout).redirects(0).build();
        Self { agent }
    }

    /// GET without following redirects. Anything but a 2xx response is a failure.
    pub fn get(&self, url: &str) -> HttpOutcome {
        debug!(url, "GET");
        match self.agent.get(url).call() {
            Ok(response) => {
                let status = response.status();
                if !(200..300).contains(&status) {
                    return HttpOutcome::failed(
                        Some(status),
                        &status_detail(status, response.status_text(), url),
                    );
                }
                match response.into_string() {
                    Ok(body) => HttpOutcome::Response { status, body },
                    Err(err) => HttpOutcome::failed(Some(status), &err.to_string()),
                }
            }
            Err(ureq::Error::Status(status, response)) => HttpOutcome::failed(
                Some(status),
                &status_detail(status, response.status_text(), url),
            ),
            Err(err) => HttpOutcome::failed(None, &err.to_string()),
        }
    }

    /// POST an ANVL body with Basic auth. The API reports logical errors in the
    /// body, so any received response counts as success here.
    pub fn post(&self, url: &str, user: &str, password: &str, body: &str) -> HttpOutcome {
        debug!(url, bytes = body.len(), "POST");
        let credentials = BASE64.encode(format!("{user}:{password}"));
        let request = self
            .agent
            .post(url)
            .set("Content-Type", ANVL_CONTENT_TYPE)
            .set("Authorization", &format!("Basic {credentials}"));
        match request.send_bytes(body.as_bytes()) {
            Ok(response) | Err(ureq::Error::Status(_, response)) => {
                let status = response.status();
                match response.into_string() {
                    Ok(body) => HttpOutcome::Response { status, body },
                    Err(err) => HttpOutcome::failed(Some(status), &err.to_string()),
                }
            }
            Err(err) => HttpOutcome::failed(None, &err.to_string()),
        }
    }
}

fn status_detail(status: u16, reason: &str, url: &str) -> String {
    format!("{status} {reason} for url: {url}")
}
