//! Request/response plumbing between the UI thread and the request worker
//!
//! The UI owns an `AiState` holding the channel endpoints and the request id
//! counter. Every dispatched request gets a fresh id plus a cancellation
//! token; together they act as the subscription the caller can drop.

use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use super::prompt::PromptPlan;
use super::provider::{CompletionOptions, ProviderSettings};
use super::reply_option::ReplyOptions;
use crate::error::ChatpickError;

/// Request sent to the worker thread
#[derive(Debug)]
pub struct AiRequest {
    /// Unique ID, used to drop responses from superseded requests
    pub request_id: u64,
    pub plan: PromptPlan,
    /// Connection settings captured at dispatch time
    pub settings: ProviderSettings,
    pub options: CompletionOptions,
    /// Cancelled when the caller is no longer interested in the result
    pub cancel_token: CancellationToken,
}

/// Messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiResponse {
    /// Parsed options of a generation request
    Options {
        request_id: u64,
        options: ReplyOptions,
    },
    /// Raw reply of a direct-chat request
    Reply { request_id: u64, text: String },
    /// Warm-up request finished
    Preloaded { request_id: u64 },
    /// Request failed; `message` is human readable
    Error { request_id: u64, message: String },
    /// Operational log line
    Log(String),
    /// Pretty JSON diagnostic payload of an outgoing request
    Payload(String),
}

impl AiResponse {
    /// Request this response belongs to, if any
    pub fn request_id(&self) -> Option<u64> {
        match self {
            AiResponse::Options { request_id, .. }
            | AiResponse::Reply { request_id, .. }
            | AiResponse::Preloaded { request_id }
            | AiResponse::Error { request_id, .. } => Some(*request_id),
            AiResponse::Log(_) | AiResponse::Payload(_) => None,
        }
    }
}

/// Handle returned for a dispatched request
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub request_id: u64,
    pub cancel_token: CancellationToken,
}

/// Channel endpoints and request bookkeeping owned by the UI thread
#[derive(Debug, Default)]
pub struct AiState {
    request_tx: Option<UnboundedSender<AiRequest>>,
    response_rx: Option<Receiver<AiResponse>>,
    /// Last issued request ID
    request_id: u64,
}

impl AiState {
    /// State without a worker; every dispatch fails
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connect(
        request_tx: UnboundedSender<AiRequest>,
        response_rx: Receiver<AiResponse>,
    ) -> Self {
        Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            request_id: 0,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some() && self.response_rx.is_some()
    }

    /// Last issued request ID (0 before the first dispatch)
    pub fn last_request_id(&self) -> u64 {
        self.request_id
    }

    /// Validate settings and hand `plan` to the worker
    ///
    /// Missing credentials are reported here, so an unconfigured request is
    /// never dispatched.
    pub fn dispatch(
        &mut self,
        plan: PromptPlan,
        settings: ProviderSettings,
    ) -> Result<Dispatched, ChatpickError> {
        settings.validate()?;

        let tx = self
            .request_tx
            .as_ref()
            .ok_or_else(|| ChatpickError::Worker("request worker is not running".to_string()))?;

        self.request_id = self.request_id.wrapping_add(1);
        let cancel_token = CancellationToken::new();
        let request = AiRequest {
            request_id: self.request_id,
            options: plan.request_type.completion_options(),
            plan,
            settings,
            cancel_token: cancel_token.clone(),
        };

        if tx.send(request).is_err() {
            self.request_tx = None;
            return Err(ChatpickError::Worker("request worker has stopped".to_string()));
        }

        Ok(Dispatched {
            request_id: self.request_id,
            cancel_token,
        })
    }

    /// Drain all pending responses without blocking
    pub fn poll_responses(&mut self) -> Vec<AiResponse> {
        let mut responses = Vec::new();
        let Some(rx) = &self.response_rx else {
            return responses;
        };

        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected {
            log::error!("Request worker channel disconnected");
            self.response_rx = None;
        }

        responses
    }
}

#[cfg(test)]
#[path = "ai_state_tests.rs"]
mod ai_state_tests;
