//! Conversation state machine
//!
//! Only the UI thread mutates a `Conversation`. Background results reach it
//! as `receive_options`/`fail` calls tagged with their request id; anything
//! not matching the active request is ignored, which is how a cancelled
//! request's late answer stays invisible.

use std::fmt;

use crate::ai::ai_state::Dispatched;
use crate::ai::message::ChatMessage;
use crate::ai::reply_option::ReplyOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingOptions,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::AwaitingOptions => write!(f, "AwaitingOptions"),
        }
    }
}

/// Who a transcript line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One displayed chat line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Conversation {
    phase: Phase,
    /// Confirmed turns sent as context with every generation
    history: Vec<ChatMessage>,
    transcript: Vec<TranscriptEntry>,
    /// Input of the current turn, reused by regenerate
    pending_input: Option<String>,
    options: Option<ReplyOptions>,
    active: Option<Dispatched>,
    log: Vec<String>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn pending_input(&self) -> Option<&str> {
        self.pending_input.as_deref()
    }

    /// Cached options; `None` while waiting or when idle
    pub fn options(&self) -> Option<&ReplyOptions> {
        self.options.as_ref()
    }

    pub fn active_request_id(&self) -> Option<u64> {
        self.active.as_ref().map(|d| d.request_id)
    }

    /// Take the log lines produced since the last call
    pub fn drain_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    /// Start a turn with `input`
    ///
    /// Returns the trimmed input to generate options for, or `None` when the
    /// input is blank or a turn is already in flight.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.phase != Phase::Idle {
            return None;
        }

        self.set_phase(Phase::AwaitingOptions);
        self.pending_input = Some(text.to_string());
        self.transcript.push(TranscriptEntry {
            speaker: Speaker::User,
            text: text.to_string(),
        });
        self.options = None;

        Some(text.to_string())
    }

    /// Bind the dispatched generation request to the current turn
    ///
    /// If the turn is already over the request is cancelled right away.
    pub fn attach_request(&mut self, dispatched: Dispatched) {
        if self.phase != Phase::AwaitingOptions {
            dispatched.cancel_token.cancel();
            return;
        }
        if let Some(previous) = self.active.replace(dispatched) {
            previous.cancel_token.cancel();
        }
    }

    /// Cache the options of the active request
    ///
    /// Returns `false` when the options are stale and were dropped.
    pub fn receive_options(&mut self, request_id: u64, options: ReplyOptions) -> bool {
        if self.phase != Phase::AwaitingOptions || self.active_request_id() != Some(request_id) {
            log::debug!("Ignoring options of stale request {}", request_id);
            return false;
        }

        self.push_log(format!("Received {} reply options", options.len()));
        self.options = Some(options);
        self.active = None;
        true
    }

    /// Confirm option `index` as the reply
    ///
    /// Appends the user input and the chosen reply to the history, returns to
    /// `Idle` and yields the reply text for mirroring.
    pub fn select(&mut self, index: usize) -> Option<String> {
        if self.phase != Phase::AwaitingOptions {
            return None;
        }
        let Some(options) = &self.options else {
            self.push_log("No options to select yet".to_string());
            return None;
        };
        let Some(option) = options.get(index) else {
            self.push_log(format!("Selected index {} is out of range", index));
            return None;
        };

        let reply = option.content.clone();
        let line = format!("Selected direction: [{}]", option.label);
        self.push_log(line);

        let input = self.pending_input.take().unwrap_or_default();
        self.history.push(ChatMessage::user(input));
        self.history.push(ChatMessage::assistant(reply.clone()));
        self.transcript.push(TranscriptEntry {
            speaker: Speaker::Assistant,
            text: reply.clone(),
        });
        self.options = None;
        self.active = None;
        self.set_phase(Phase::Idle);

        Some(reply)
    }

    /// Abandon the current turn
    ///
    /// The in-flight request keeps running but its result is discarded.
    pub fn cancel(&mut self) -> bool {
        if self.phase != Phase::AwaitingOptions {
            return false;
        }

        self.push_log("User cancelled the current turn".to_string());
        self.reset_turn();
        true
    }

    /// Drop the current options and ask again with the same input
    ///
    /// Returns the cached input to dispatch; the transcript is not touched.
    pub fn regenerate(&mut self) -> Option<String> {
        if self.phase != Phase::AwaitingOptions {
            return None;
        }
        let input = self.pending_input.clone()?;

        self.push_log("Regenerating reply options...".to_string());
        if let Some(active) = self.active.take() {
            active.cancel_token.cancel();
        }
        self.options = None;
        self.set_phase(Phase::Idle);
        self.set_phase(Phase::AwaitingOptions);

        Some(input)
    }

    /// Log an error, then behave as cancel. The transcript is left as is.
    ///
    /// `request_id` of `None` means the request never left (e.g. missing
    /// credentials). Errors of stale requests are ignored.
    pub fn fail(&mut self, request_id: Option<u64>, message: &str) -> bool {
        if self.phase != Phase::AwaitingOptions {
            return false;
        }
        let stale = request_id.is_some_and(|id| self.active_request_id() != Some(id));
        if stale {
            log::debug!("Ignoring error of stale request {:?}: {}", request_id, message);
            return false;
        }

        self.push_log(format!("Error: {}", message));
        self.reset_turn();
        true
    }

    fn reset_turn(&mut self) {
        if let Some(active) = self.active.take() {
            active.cancel_token.cancel();
        }
        self.options = None;
        self.set_phase(Phase::Idle);
    }

    fn set_phase(&mut self, phase: Phase) {
        self.push_log(format!("[state change] {} -> {}", self.phase, phase));
        self.phase = phase;
    }

    fn push_log(&mut self, line: String) {
        log::debug!("{}", line);
        self.log.push(line);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
