//! Request Worker Thread
//!
//! Handles chat-completion requests in a background thread to avoid blocking
//! the UI. Receives requests via channel, makes HTTP calls to the provider,
//! and sends results back to the main thread.
//!
//! Each request runs as its own task on a single-threaded tokio runtime, so
//! a warm-up, a console message and a generation can be in flight at once.
//! Cancellation is advisory: the HTTP call always runs to completion, the
//! result is just not delivered once the request's token is cancelled.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use reqwest::Client;
use tokio::sync::mpsc::UnboundedReceiver;

use super::ai_state::{AiRequest, AiResponse};
use super::diagnostics::diagnostic_payload;
use super::prompt::{PRESET_MARK, PromptPlan, RequestType};
use super::provider::{build_http_client, client_for};
use super::reply_option::parse_options;
use crate::error::ChatpickError;

/// Name of the worker thread; the panic hook uses it to tell worker panics
/// apart from UI panics
pub const WORKER_THREAD_NAME: &str = "chatpick-worker";

/// Spawn the request worker thread
///
/// The thread exits once every `AiRequest` sender has been dropped.
pub fn spawn_worker(
    request_rx: UnboundedReceiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) -> Result<JoinHandle<()>, ChatpickError> {
    let handle = std::thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create tokio runtime: {}", e);
                        let _ = response_tx.send(AiResponse::Log(format!(
                            "Request worker failed to start: {}",
                            e
                        )));
                        return;
                    }
                };

                rt.block_on(worker_loop(request_rx, response_tx));
            }));

            if let Err(e) = result {
                log::error!("Request worker thread panicked: {}", panic_message(e.as_ref()));
            }
        })?;

    Ok(handle)
}

/// Main async worker loop, runs until the request channel is closed
async fn worker_loop(
    mut request_rx: UnboundedReceiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let http = match build_http_client() {
        Ok(client) => Some(client),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    };

    while let Some(request) = request_rx.recv().await {
        let http = http.clone();
        let response_tx = response_tx.clone();
        let request_id = request.request_id;

        tokio::spawn(async move {
            let task = tokio::spawn(handle_request(http, request, response_tx.clone()));
            let Err(e) = task.await else {
                return;
            };
            if e.is_panic() {
                let message = format!(
                    "Request task crashed: {}",
                    panic_message(e.into_panic().as_ref())
                );
                log::error!("{}", message);
                let _ = response_tx.send(AiResponse::Error {
                    request_id,
                    message,
                });
            }
        });
    }

    log::debug!("Request channel closed, worker exiting");
}

/// Run one request to completion and report its result
async fn handle_request(http: Option<Client>, request: AiRequest, response_tx: Sender<AiResponse>) {
    let AiRequest {
        request_id,
        plan,
        settings,
        options,
        cancel_token,
    } = request;

    if cancel_token.is_cancelled() {
        log::debug!("Request {} cancelled before dispatch", request_id);
        return;
    }

    let client = match http {
        Some(http) => client_for(&http, &settings),
        None => build_http_client().and_then(|http| client_for(&http, &settings)),
    };
    let client = match client {
        Ok(client) => client,
        Err(e) => {
            let _ = response_tx.send(AiResponse::Error {
                request_id,
                message: e.to_string(),
            });
            return;
        }
    };

    announce(&plan, client.model(), &response_tx);

    let result = client.complete(&plan.messages, options).await;

    if cancel_token.is_cancelled() {
        log::debug!("Dropping result of cancelled request {}", request_id);
        return;
    }

    let response = match result {
        Ok(text) => match plan.request_type {
            RequestType::PreloadPing => {
                let _ = response_tx.send(AiResponse::Log(
                    "Connection warm-up succeeded".to_string(),
                ));
                AiResponse::Preloaded { request_id }
            }
            RequestType::DirectChat => AiResponse::Reply { request_id, text },
            RequestType::GenerateOptions => AiResponse::Options {
                request_id,
                options: parse_options(&text),
            },
        },
        Err(e) => {
            let _ = response_tx.send(AiResponse::Log(format!("Connection error: {}", e)));
            AiResponse::Error {
                request_id,
                message: e.to_string(),
            }
        }
    };

    let _ = response_tx.send(response);
}

/// Progress log line and diagnostic payload for an outgoing request
fn announce(plan: &PromptPlan, model: &str, response_tx: &Sender<AiResponse>) {
    match plan.request_type {
        RequestType::PreloadPing => {
            let lexicon_attached = plan
                .messages
                .first()
                .is_some_and(|m| m.content.contains(PRESET_MARK));
            let _ = response_tx.send(AiResponse::Log(format!(
                "Warming up connection (lexicon attached: {})",
                if lexicon_attached { "yes" } else { "no" }
            )));
        }
        RequestType::GenerateOptions => {
            let _ = response_tx.send(AiResponse::Log("Generating reply options...".to_string()));
        }
        RequestType::DirectChat => {}
    }

    if let Some(payload) = diagnostic_payload(plan, model) {
        let _ = response_tx.send(AiResponse::Payload(payload));
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
