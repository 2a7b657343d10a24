pub mod actions;
pub mod events;
pub mod orchestrator;
pub mod state;
pub mod view;

use crate::api::InfoSource;
use crate::card;
use crate::config::Config;
use crate::input;
use crate::lookup::Intent;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetworkEvent};
use orchestrator::Orchestrator;
use state::{AppState, Toast};
use tokio::sync::mpsc;

pub use orchestrator::lookup_once;

pub struct App<S> {
    cfg: Config,
    state: AppState,
    orchestrator: Orchestrator<S>,
}

impl<S: InfoSource> App<S> {
    pub fn new(cfg: Config, source: S) -> Self {
        let state = AppState::new(cfg.lookup.default_intent, cfg.lookup.default_resolution);
        let orchestrator = Orchestrator::new(source).send_resolution(cfg.api.send_resolution);
        Self {
            cfg,
            state,
            orchestrator,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone());
        input::spawn_ticker(tx.clone());

        self.state.status = "Paste a YouTube URL and press Enter".into();
        tui::draw(terminal, &self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Network(ne) => {
                    self.handle_network(ne);
                }
                Event::Tick => {
                    self.state.tick = self.state.tick.wrapping_add(1);
                    // Only the spinner and toast expiry need ticks.
                    let expired = self.state.expire_toast();
                    if !self.state.view().is_loading() && !expired {
                        continue;
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.state)?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::NextIntent => self.switch_intent(self.state.intent().next()),
            Action::PrevIntent => self.switch_intent(self.state.intent().prev()),
            Action::SetIntent(intent) => self.switch_intent(intent),
            Action::InputChar(c) => self.state.url_input.push(c),
            Action::InputText(text) => {
                // Pasted text may carry line breaks; the URL is a single line.
                self.state
                    .url_input
                    .extend(text.chars().filter(|c| !c.is_control()));
            }
            Action::Backspace => {
                self.state.url_input.pop();
            }
            Action::ClearInput => self.state.url_input.clear(),
            Action::Submit => self.submit(tx),
            Action::ResolutionUp => {
                if self.state.intent() == Intent::DownloadLookup {
                    self.state.resolution = self.state.resolution.higher();
                }
            }
            Action::ResolutionDown => {
                if self.state.intent() == Intent::DownloadLookup {
                    self.state.resolution = self.state.resolution.lower();
                }
            }
            Action::Download => self.open_from_card(card::Card::download_url, "download link", tx),
            Action::OpenPage => self.open_from_card(card::Card::page_url, "channel page", tx),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Resize => {
                // Resize is handled by terminal
            }
        }
    }

    fn switch_intent(&mut self, intent: Intent) {
        self.orchestrator.switch_intent(self.state.view_mut(), intent);
        self.state.status = format!("{} selected", intent.label());
    }

    fn submit(&mut self, tx: &mpsc::Sender<Event>) {
        let url = self.state.url_input.clone();
        let resolution = Some(self.state.resolution);
        match self
            .orchestrator
            .submit(self.state.view_mut(), &url, resolution, tx)
        {
            Some(_) => self.state.status = "Processing...".into(),
            None => self.state.status = "Nothing to look up".into(),
        }
    }

    /// Open the link `pick` finds on the current result card, if any.
    fn open_from_card(
        &mut self,
        pick: fn(&card::Card) -> Option<&str>,
        what: &str,
        tx: &mpsc::Sender<Event>,
    ) {
        let view = self.state.view();
        let Some(result) = view.result() else {
            return;
        };
        let card = card::render(
            result,
            view.intent(),
            self.state.resolution,
            view.submitted_url(),
        );
        let Some(url) = pick(&card).map(str::to_string) else {
            self.state.toast = Some(Toast::error(format!("No {what} for this result")));
            return;
        };

        self.state.status = format!("Opening {what}...");
        let opener = self.cfg.download.opener.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match crate::launch::open_url(&url, opener.as_deref()).await {
                Ok(()) => NetworkEvent::LinkOpened,
                Err(e) => NetworkEvent::LinkFailed(format!("{e:#}")),
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }

    fn handle_network(&mut self, ne: NetworkEvent) {
        match ne {
            NetworkEvent::LookupSettled { ticket, outcome } => {
                let settled = self
                    .orchestrator
                    .settle(self.state.view_mut(), ticket, outcome);
                if settled == view::Settled::Applied {
                    self.state.status = match self.state.view().error_message() {
                        Some(_) => "Lookup failed (press Enter to retry)".into(),
                        None => "Done".into(),
                    };
                }
            }
            NetworkEvent::LinkOpened => {
                self.state.toast = Some(Toast::success("Link opened"));
                self.state.status.clear();
            }
            NetworkEvent::LinkFailed(e) => {
                self.state.toast = Some(Toast::error(e.clone()));
                self.state.status = format!("Error: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ToastKind;
    use crate::app::view::PhaseKind;
    use crate::lookup::{ChannelInfo, LookupError, LookupRequest, LookupResult, Resolution, VideoInfo};

    type Reply = Result<LookupResult, LookupError>;

    #[derive(Clone)]
    struct Fixed(Reply);

    impl InfoSource for Fixed {
        async fn fetch(&self, _request: &LookupRequest) -> Reply {
            self.0.clone()
        }
    }

    fn app(reply: Reply) -> App<Fixed> {
        App::new(Config::default(), Fixed(reply))
    }

    fn video_without_link() -> Reply {
        Ok(LookupResult::Video(VideoInfo {
            title: Some("T".into()),
            ..VideoInfo::default()
        }))
    }

    fn channel() -> Reply {
        Ok(LookupResult::Channel(ChannelInfo {
            name: Some("Chan".into()),
            ..ChannelInfo::default()
        }))
    }

    async fn deliver_next(app: &mut App<Fixed>, rx: &mut mpsc::Receiver<Event>) {
        match rx.recv().await {
            Some(Event::Network(ne)) => app.handle_network(ne),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    fn submit(app: &mut App<Fixed>, url: &str, tx: &mpsc::Sender<Event>) {
        app.handle_action(Action::ClearInput, tx);
        app.handle_action(Action::InputText(url.into()), tx);
        app.handle_action(Action::Submit, tx);
    }

    #[test]
    fn test_resolution_keys_ignored_outside_download_tab() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = app(video_without_link());

        app.handle_action(Action::ResolutionUp, &tx);
        assert_eq!(app.state.resolution, Resolution::P720);

        app.handle_action(Action::SetIntent(Intent::DownloadLookup), &tx);
        app.handle_action(Action::ResolutionUp, &tx);
        assert_eq!(app.state.resolution, Resolution::P1080);
        app.handle_action(Action::ResolutionDown, &tx);
        app.handle_action(Action::ResolutionDown, &tx);
        assert_eq!(app.state.resolution, Resolution::P480);
    }

    #[test]
    fn test_paste_drops_line_breaks() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = app(video_without_link());
        app.handle_action(Action::InputText("https://youtu.be/x\r\n".into()), &tx);
        assert_eq!(app.state.url_input, "https://youtu.be/x");
    }

    #[tokio::test]
    async fn test_download_without_link_shows_toast() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = app(video_without_link());

        // Nothing to download before there is a result.
        app.handle_action(Action::Download, &tx);
        assert!(app.state.toast.is_none());

        app.handle_action(Action::SetIntent(Intent::DownloadLookup), &tx);
        submit(&mut app, "https://youtu.be/x", &tx);
        assert_eq!(app.state.status, "Processing...");
        deliver_next(&mut app, &mut rx).await;
        assert_eq!(app.state.status, "Done");

        app.handle_action(Action::Download, &tx);
        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "No download link for this result");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_status_after_stale_and_applied_settle() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = app(video_without_link());

        submit(&mut app, "https://youtu.be/x", &tx);
        app.handle_action(Action::NextIntent, &tx);
        assert_eq!(app.state.status, "Check Channel selected");

        deliver_next(&mut app, &mut rx).await;
        assert_eq!(app.state.status, "Check Channel selected");
        assert_eq!(app.state.view().kind(), PhaseKind::Idle);

        submit(&mut app, "https://youtu.be/x", &tx);
        deliver_next(&mut app, &mut rx).await;
        assert_eq!(app.state.status, "Done");
        assert_eq!(app.state.view().kind(), PhaseKind::Result);
    }

    #[tokio::test]
    async fn test_failed_lookup_status() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = app(Err(LookupError::Service {
            status: 404,
            message: "private video".into(),
        }));

        submit(&mut app, "https://youtu.be/x", &tx);
        deliver_next(&mut app, &mut rx).await;
        assert_eq!(app.state.status, "Lookup failed (press Enter to retry)");
        assert_eq!(app.state.view().error_message(), Some("private video"));

        submit(&mut app, "   ", &tx);
        assert_eq!(app.state.status, "Nothing to look up");
        assert!(rx.try_recv().is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_open_channel_page_uses_opener() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut cfg = Config::default();
        cfg.download.opener = Some("true".into());
        let mut app = App::new(cfg, Fixed(channel()));

        app.handle_action(Action::SetIntent(Intent::ChannelLookup), &tx);
        submit(&mut app, "https://youtube.com/@chan", &tx);
        deliver_next(&mut app, &mut rx).await;

        // A channel card has no download link.
        app.handle_action(Action::Download, &tx);
        assert_eq!(
            app.state.toast.take().map(|t| t.message),
            Some("No download link for this result".to_string())
        );

        app.handle_action(Action::OpenPage, &tx);
        assert_eq!(app.state.status, "Opening channel page...");
        deliver_next(&mut app, &mut rx).await;
        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Link opened");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_opener_reported() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut cfg = Config::default();
        cfg.download.opener = Some("false".into());
        let mut app = App::new(cfg, Fixed(channel()));

        submit(&mut app, "https://youtube.com/@chan", &tx);
        deliver_next(&mut app, &mut rx).await;
        app.handle_action(Action::OpenPage, &tx);
        deliver_next(&mut app, &mut rx).await;

        assert_eq!(app.state.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));
        assert!(app.state.status.starts_with("Error: false failed"));
    }
}
