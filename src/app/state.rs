use crate::app::view::ViewState;
use crate::lookup::{Intent, Resolution};

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Everything the widgets read. Form fields are edited freely by input
/// handling; the lookup phase lives in `view` and only moves through the
/// orchestrator.
pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    // Form
    pub url_input: String,
    pub resolution: Resolution,

    pub show_help: bool,

    view: ViewState,

    // Toast notification
    pub toast: Option<Toast>,

    // Footer status line
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Intent::default(), Resolution::default())
    }
}

impl AppState {
    pub fn new(intent: Intent, resolution: Resolution) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            url_input: String::new(),
            resolution,
            show_help: false,
            view: ViewState::new(intent),
            toast: None,
            status: String::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub(super) fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn intent(&self) -> Intent {
        self.view.intent()
    }

    /// Drop the toast once its time is up. Returns whether one was dropped.
    pub fn expire_toast(&mut self) -> bool {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
            return true;
        }
        false
    }
}
