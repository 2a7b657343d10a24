//! Owns the single in-flight lookup and funnels every outcome through
//! [`ViewState`].
//!
//! `submit` is the only way into Loading. The network call runs on a spawned
//! task and its outcome comes back as [`NetworkEvent::LookupSettled`] on the
//! app's event channel, where `settle` applies it (or drops it if a newer
//! submission or an intent switch got there first). Superseded requests are
//! not aborted; only their effect on the view is suppressed.

use crate::api::InfoSource;
use crate::app::events::{Event, NetworkEvent};
use crate::app::view::{Settled, Ticket, ViewState};
use crate::lookup::{self, Intent, LookupError, LookupRequest, LookupResult, Resolution};
use tokio::sync::mpsc;

pub struct Orchestrator<S> {
    source: S,
    send_resolution: bool,
}

impl<S: InfoSource> Orchestrator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            send_resolution: true,
        }
    }

    pub fn send_resolution(mut self, enabled: bool) -> Self {
        self.send_resolution = enabled;
        self
    }

    /// Validate, enter Loading, fire exactly one request.
    ///
    /// Returns the ticket of the issued request, or `None` when the input was
    /// rejected and nothing was sent.
    pub fn submit(
        &self,
        view: &mut ViewState,
        url: &str,
        resolution: Option<Resolution>,
        tx: &mpsc::Sender<Event>,
    ) -> Option<Ticket> {
        if let Err(e) = lookup::validate(url) {
            tracing::info!("submission rejected: {e}");
            view.reject(e.to_string());
            return None;
        }

        let ticket = view.begin(url);
        let resolution = resolution.filter(|_| self.send_resolution);
        let request = LookupRequest::new(url, view.intent()).with_resolution(resolution);
        tracing::info!(?ticket, intent = %request.intent, "lookup started");

        let source = self.source.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            // The inner task is joined so a panic still settles the ticket.
            let fetch = tokio::spawn(async move { source.fetch(&request).await });
            let outcome = match fetch.await {
                Ok(outcome) => outcome,
                Err(e) => Err(LookupError::Transport {
                    detail: format!("lookup task failed: {e}"),
                }),
            };
            let _ = tx
                .send(Event::Network(NetworkEvent::LookupSettled { ticket, outcome }))
                .await;
        });

        Some(ticket)
    }

    /// Explicit tab change: back to Idle from anywhere.
    pub fn switch_intent(&self, view: &mut ViewState, intent: Intent) {
        tracing::info!(from = %view.intent(), to = %intent, "intent switched");
        view.switch_intent(intent);
    }

    pub fn settle(
        &self,
        view: &mut ViewState,
        ticket: Ticket,
        outcome: Result<LookupResult, LookupError>,
    ) -> Settled {
        if let Err(LookupError::Transport { detail }) = &outcome {
            tracing::warn!(?ticket, %detail, "lookup transport failure");
        }
        let settled = view.settle(ticket, outcome);
        match settled {
            Settled::Applied => tracing::info!(?ticket, phase = ?view.kind(), "lookup settled"),
            Settled::Stale => tracing::warn!(?ticket, "discarding stale lookup completion"),
        }
        settled
    }
}

/// Run one lookup through the full pipeline and hand back the final view.
pub async fn lookup_once<S: InfoSource>(
    orchestrator: &Orchestrator<S>,
    intent: Intent,
    url: &str,
    resolution: Option<Resolution>,
) -> ViewState {
    let (tx, mut rx) = mpsc::channel::<Event>(4);
    let mut view = ViewState::new(intent);

    let Some(ticket) = orchestrator.submit(&mut view, url, resolution, &tx) else {
        return view;
    };
    drop(tx);

    while let Some(ev) = rx.recv().await {
        if let Event::Network(NetworkEvent::LookupSettled { ticket: t, outcome }) = ev
            && orchestrator.settle(&mut view, t, outcome) == Settled::Applied
            && t == ticket
        {
            break;
        }
    }
    view
}
