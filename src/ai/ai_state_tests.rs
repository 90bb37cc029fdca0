//! Tests for request dispatch and response polling

use std::sync::mpsc;

use tokio::sync::mpsc::unbounded_channel;

use super::*;
use crate::ai::prompt::{PromptMode, PromptSettings, RequestType, build_messages};
use crate::ai::provider::AiError;

fn plan(mode: PromptMode<'_>) -> PromptPlan {
    build_messages(
        mode,
        PromptSettings {
            system_prompt: "persona",
            use_preset_directions: false,
        },
        "",
    )
}

fn valid_settings() -> ProviderSettings {
    ProviderSettings {
        api_key: "sk-test".into(),
        base_url: "https://example.test/v1".into(),
        model: "m".into(),
    }
}

#[test]
fn test_dispatch_assigns_increasing_ids() {
    let (tx, mut rx) = unbounded_channel();
    let (_resp_tx, resp_rx) = mpsc::channel();
    let mut state = AiState::connect(tx, resp_rx);

    let first = state.dispatch(plan(PromptMode::Preload), valid_settings()).unwrap();
    let second = state
        .dispatch(plan(PromptMode::DirectChat { input: "x" }), valid_settings())
        .unwrap();

    assert_eq!(first.request_id, 1);
    assert_eq!(second.request_id, 2);
    assert_eq!(state.last_request_id(), 2);

    let sent = rx.try_recv().unwrap();
    assert_eq!(sent.request_id, 1);
    assert_eq!(sent.plan.request_type, RequestType::PreloadPing);
    assert_eq!(sent.options.max_tokens, Some(1));
    assert!(!sent.cancel_token.is_cancelled());
}

#[test]
fn test_dispatch_token_is_shared_with_request() {
    let (tx, mut rx) = unbounded_channel();
    let (_resp_tx, resp_rx) = mpsc::channel();
    let mut state = AiState::connect(tx, resp_rx);

    let dispatched = state.dispatch(plan(PromptMode::Preload), valid_settings()).unwrap();
    dispatched.cancel_token.cancel();

    assert!(rx.try_recv().unwrap().cancel_token.is_cancelled());
}

#[test]
fn test_dispatch_without_credentials_never_sends() {
    let (tx, mut rx) = unbounded_channel();
    let (_resp_tx, resp_rx) = mpsc::channel();
    let mut state = AiState::connect(tx, resp_rx);

    let mut settings = valid_settings();
    settings.api_key.clear();
    let err = state.dispatch(plan(PromptMode::Preload), settings).unwrap_err();

    assert!(matches!(err, ChatpickError::Ai(AiError::NotConfigured { .. })));
    assert!(rx.try_recv().is_err());
    assert_eq!(state.last_request_id(), 0);
}

#[test]
fn test_dispatch_when_disconnected() {
    let mut state = AiState::disconnected();
    assert!(!state.is_connected());
    let err = state.dispatch(plan(PromptMode::Preload), valid_settings()).unwrap_err();
    assert!(matches!(err, ChatpickError::Worker(_)));
}

#[test]
fn test_dispatch_after_worker_stopped() {
    let (tx, rx) = unbounded_channel();
    let (_resp_tx, resp_rx) = mpsc::channel();
    let mut state = AiState::connect(tx, resp_rx);
    drop(rx);

    let err = state.dispatch(plan(PromptMode::Preload), valid_settings()).unwrap_err();
    assert!(matches!(err, ChatpickError::Worker(_)));
    assert!(!state.is_connected());
}

#[test]
fn test_poll_drains_in_order() {
    let (tx, _rx) = unbounded_channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let mut state = AiState::connect(tx, resp_rx);

    resp_tx.send(AiResponse::Log("a".into())).unwrap();
    resp_tx.send(AiResponse::Preloaded { request_id: 1 }).unwrap();

    assert_eq!(
        state.poll_responses(),
        vec![
            AiResponse::Log("a".into()),
            AiResponse::Preloaded { request_id: 1 }
        ]
    );
    assert!(state.poll_responses().is_empty());
}

#[test]
fn test_poll_detects_disconnect() {
    let (tx, _rx) = unbounded_channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let mut state = AiState::connect(tx, resp_rx);

    resp_tx.send(AiResponse::Log("last".into())).unwrap();
    drop(resp_tx);

    assert_eq!(state.poll_responses().len(), 1);
    assert!(!state.is_connected());
    assert!(state.poll_responses().is_empty());
}

#[test]
fn test_response_request_id() {
    assert_eq!(AiResponse::Log("x".into()).request_id(), None);
    assert_eq!(AiResponse::Payload("{}".into()).request_id(), None);
    assert_eq!(
        AiResponse::Error {
            request_id: 9,
            message: String::new()
        }
        .request_id(),
        Some(9)
    );
}
