use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use super::flow::{FormKind, SubmissionRequest};
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Could not prepare the form: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Message shown for a non-2xx response, preferring the server's own text.
pub fn server_message(status: u16, body: Option<String>) -> String {
    match body.map(|b| b.trim().to_string()) {
        Some(message) if !message.is_empty() => message,
        _ if status == 429 => "Too many submissions, please try again in a minute".to_string(),
        _ if status >= 500 => "Our server had a problem, please try again later".to_string(),
        _ => format!("Submission failed ({})", status),
    }
}

pub async fn submit(kind: FormKind, request: &SubmissionRequest) -> Result<(), SubmitError> {
    let url = format!("{}{}", config::get_backend_url(), kind.endpoint());
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        info!("{:?} form submitted", kind);
        return Ok(());
    }

    let status = response.status();
    let body = response.json::<ErrorResponse>().await.ok().map(|e| e.error);
    warn!("{:?} form rejected with status {}", kind, status);
    Err(SubmitError::Server {
        status,
        message: server_message(status, body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_text_wins() {
        assert_eq!(server_message(400, Some("Email already registered".into())), "Email already registered");
    }

    #[test]
    fn fallbacks_by_status() {
        assert_eq!(server_message(400, None), "Submission failed (400)");
        assert_eq!(server_message(400, Some("  ".into())), "Submission failed (400)");
        assert!(server_message(503, None).contains("try again later"));
        assert!(server_message(429, None).starts_with("Too many"));
    }

    #[test]
    fn server_error_displays_message_only() {
        let err = SubmitError::Server { status: 422, message: "Bad email".into() };
        assert_eq!(err.to_string(), "Bad email");
        assert_eq!(SubmitError::Network("offline".into()).to_string(), "Request failed: offline");
    }
}
