//! Primary classifier adapter: calls the external intent-prediction
//! service over HTTP with a bounded timeout.
//!
//! The adapter is total at the trait boundary: connection failures,
//! timeouts, non-2xx statuses, malformed bodies, and unrecognized intent
//! tags all become "no usable result" (`None`). Availability of the
//! service never affects the correctness of a chat turn; the resolver
//! falls back to the keyword rules.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::Intent;
use crate::config::ClassifierConfig;

/// Trait for the primary message-intent predictor.
///
/// Total: implementations must convert every internal failure into
/// `None` rather than surfacing an error to the resolver.
pub trait IntentPredictor {
    fn predict_intent(&self, message: &str) -> Option<Intent>;
}

impl<P: IntentPredictor + ?Sized> IntentPredictor for &P {
    fn predict_intent(&self, message: &str) -> Option<Intent> {
        (**self).predict_intent(message)
    }
}

/// Request body for POST {base_url}/predict
#[derive(Serialize)]
struct PredictRequest<'a> {
    message: &'a str,
}

/// Response body from POST {base_url}/predict
#[derive(Deserialize)]
struct PredictResponse {
    intent: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum PredictError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("http error: {0}")]
    Http(String),

    #[error("service returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// HTTP client for the external intent-prediction service.
pub struct HttpIntentClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpIntentClient {
    /// Build a client from injected endpoint configuration. The timeout
    /// bounds the whole request so one turn can never stall its thread
    /// indefinitely.
    pub fn new(config: &ClassifierConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.clone(),
            client,
            timeout: config.timeout,
        }
    }

    pub fn from_env() -> Self {
        Self::new(&ClassifierConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_intent(&self, message: &str) -> Result<Option<String>, PredictError> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { message })
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    PredictError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    PredictError::Timeout(self.timeout)
                } else {
                    PredictError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status.as_u16()));
        }

        let parsed: PredictResponse = response
            .json()
            .map_err(|e| PredictError::Malformed(e.to_string()))?;

        Ok(parsed.intent)
    }
}

impl IntentPredictor for HttpIntentClient {
    fn predict_intent(&self, message: &str) -> Option<Intent> {
        match self.request_intent(message) {
            Ok(Some(raw)) => {
                let intent = Intent::from_wire(&raw);
                if intent.is_none() {
                    tracing::warn!(raw, "Primary classifier returned unrecognized intent tag");
                }
                intent
            }
            Ok(None) => {
                tracing::warn!("Primary classifier response carried no intent field");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Primary classifier unavailable");
                None
            }
        }
    }
}

/// Mock predictor for testing: returns a configured intent, or nothing,
/// and counts how often it was consulted.
pub struct MockPredictor {
    response: Option<Intent>,
    calls: AtomicUsize,
}

impl MockPredictor {
    /// Always predicts the given intent.
    pub fn returning(intent: Intent) -> Self {
        Self {
            response: Some(intent),
            calls: AtomicUsize::new(0),
        }
    }

    /// Simulates an unreachable or timed-out service.
    pub fn unavailable() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `predict_intent` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IntentPredictor for MockPredictor {
    fn predict_intent(&self, _message: &str) -> Option<Intent> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
    }
}
