//! The authoritative record of what the body of the screen shows.
//!
//! Mutation is `pub(super)`: only the orchestrator and the app's intent-switch
//! path can move the phase. Widgets and the card renderer get `&ViewState`.

use crate::lookup::{Intent, LookupError, LookupResult};

/// Identity of one submission. Completions carrying an older ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Loading,
    Error(String),
    Result(LookupResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Idle,
    Loading,
    Error,
    Result,
}

/// What `settle` did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Stale,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    phase: Phase,
    intent: Intent,
    pending: Option<Ticket>,
    issued: u64,
    /// URL of the latest accepted submission, exactly as typed.
    submitted: Option<String>,
}

impl ViewState {
    pub fn new(intent: Intent) -> Self {
        Self {
            phase: Phase::Idle,
            intent,
            pending: None,
            issued: 0,
            submitted: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        match self.phase {
            Phase::Idle => PhaseKind::Idle,
            Phase::Loading => PhaseKind::Loading,
            Phase::Error(_) => PhaseKind::Error,
            Phase::Result(_) => PhaseKind::Result,
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&LookupResult> {
        match &self.phase {
            Phase::Result(r) => Some(r),
            _ => None,
        }
    }

    /// The URL the current Loading/Error/Result phase belongs to.
    pub fn submitted_url(&self) -> Option<&str> {
        self.submitted.as_deref()
    }

    /// Any state -> Idle. Clears message/result and orphans the in-flight ticket.
    pub(super) fn switch_intent(&mut self, intent: Intent) {
        self.intent = intent;
        self.pending = None;
        self.submitted = None;
        self.phase = Phase::Idle;
    }

    /// Submission refused locally. Also supersedes whatever was in flight.
    pub(super) fn reject(&mut self, message: String) {
        self.pending = None;
        self.submitted = None;
        self.phase = Phase::Error(message);
    }

    /// Enter Loading under a fresh ticket.
    pub(super) fn begin(&mut self, url: &str) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        self.submitted = Some(url.to_string());
        self.phase = Phase::Loading;
        ticket
    }

    /// Apply a completion if it belongs to the current submission.
    pub(super) fn settle(
        &mut self,
        ticket: Ticket,
        outcome: Result<LookupResult, LookupError>,
    ) -> Settled {
        if self.pending != Some(ticket) {
            return Settled::Stale;
        }
        self.pending = None;
        self.phase = match outcome {
            Ok(result) => Phase::Result(result),
            Err(err) => Phase::Error(err.to_string()),
        };
        Settled::Applied
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Intent::default())
    }
}
