//! Diagnostic payload export
//!
//! Mirrors outgoing generation and warm-up requests to the console so the
//! exact message list can be inspected.

use serde::Serialize;

use super::message::{ChatMessage, Role};
use super::prompt::{PromptPlan, RequestType};

#[derive(Debug, Serialize)]
struct DiagnosticPayload<'a> {
    request_type: RequestType,
    model: &'a str,
    messages: Vec<&'a ChatMessage>,
}

/// Pretty JSON record `{request_type, model, messages}` for `plan`
///
/// Returns `None` for direct chat, which is already a diagnostic request.
/// The system message is only kept for the warm-up request.
pub fn diagnostic_payload(plan: &PromptPlan, model: &str) -> Option<String> {
    if plan.request_type == RequestType::DirectChat {
        return None;
    }

    let keep_system = plan.request_type.exports_system_message();
    let payload = DiagnosticPayload {
        request_type: plan.request_type,
        model,
        messages: plan
            .messages
            .iter()
            .filter(|m| keep_system || m.role != Role::System)
            .collect(),
    };

    match serde_json::to_string_pretty(&payload) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Failed to serialize diagnostic payload: {}", e);
            None
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod diagnostics_tests;
