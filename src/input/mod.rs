use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::AppState;
use crate::lookup::Intent;
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let sent = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => {
                        tx.blocking_send(Event::Input(InputEvent::Key(k)))
                    }
                    Ok(CtEvent::Paste(text)) => {
                        tx.blocking_send(Event::Input(InputEvent::Paste(text)))
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        tx.blocking_send(Event::Input(InputEvent::Resize))
                    }
                    Ok(_) | Err(_) => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

/// Drives the loading spinner and toast expiry.
pub fn spawn_ticker(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Paste(text) => Some(Action::InputText(text)),
        InputEvent::Key(k) if state.show_help => handle_help_overlay(k),
        InputEvent::Key(k) => handle_form(state, k),
    }
}

fn handle_help_overlay(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
            Some(Action::ToggleHelp)
        }
        _ => None,
    }
}

fn handle_form(state: &AppState, k: KeyEvent) -> Option<Action> {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    match k.code {
        // Quit
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        // Intent tabs
        KeyCode::Tab => Some(Action::NextIntent),
        KeyCode::BackTab => Some(Action::PrevIntent),
        KeyCode::F(2) => Some(Action::SetIntent(Intent::VideoLookup)),
        KeyCode::F(3) => Some(Action::SetIntent(Intent::ChannelLookup)),
        KeyCode::F(4) => Some(Action::SetIntent(Intent::DownloadLookup)),

        // Resolution selector only exists on the download tab
        KeyCode::Up if state.intent() == Intent::DownloadLookup => Some(Action::ResolutionUp),
        KeyCode::Down if state.intent() == Intent::DownloadLookup => Some(Action::ResolutionDown),

        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Char('d') if ctrl => Some(Action::Download),
        KeyCode::Char('o') if ctrl => Some(Action::OpenPage),
        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::F(1) => Some(Action::ToggleHelp),

        KeyCode::Char(c) if !ctrl && !k.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::InputChar(c))
        }

        _ => None,
    }
}
