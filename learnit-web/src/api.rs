//! HTTP client for the authentication service
use learnit_core::{VerifyReply, VerifyRequest};
use thiserror::Error;

use crate::dom;

const DEFAULT_API_BASE: &str = "https://studycoin-w4q3.onrender.com/api/v1";

/// API origin, overridable at compile time via `LEARNIT_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("LEARNIT_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

fn verify_url() -> String {
    format!("{}/auth/verify", api_base())
}

/// Why a verification attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The service answered and rejected the code.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a usable answer.
    #[error("{0}")]
    Transport(String),
}

/// Submit a code to the verification endpoint.
///
/// A non-success status is reported with the body's `message` (or the
/// generic fallback); anything that keeps us from reading a body at all
/// is a transport error carrying the browser's description.
///
/// # Errors
/// Returns `VerifyError::Rejected` when the service turns the code
/// down and `VerifyError::Transport` for network or decoding failures.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn verify_otp(code: &str) -> Result<(), VerifyError> {
    let request = VerifyRequest::new(code);
    let body = serde_json::to_string(&request)
        .map_err(|err| VerifyError::Transport(err.to_string()))?;

    let response = dom::post_json(&verify_url(), &body)
        .await
        .map_err(|err| VerifyError::Transport(dom::js_error_message(&err)))?;
    let text = dom::response_text(&response)
        .await
        .map_err(|err| VerifyError::Transport(dom::js_error_message(&err)))?;

    if response.ok() {
        // The success body is an opaque confirmation; parse and discard.
        serde_json::from_str::<VerifyReply>(&text)
            .map_err(|err| VerifyError::Transport(err.to_string()))?;
        Ok(())
    } else {
        let reply: VerifyReply = serde_json::from_str(&text)
            .map_err(|err| VerifyError::Transport(err.to_string()))?;
        Err(VerifyError::Rejected(reply.failure_message()))
    }
}
