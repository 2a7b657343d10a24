//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, ToastKind};
use crate::app::view::Phase;
use crate::card;
use crate::lookup::Intent;
use crate::tui::theme::{LoadingSpinner, get_theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{card as card_widget, form, help, tabs};

/// Main layout structure:
/// ┌──────────────────────────────────────────────┐
/// │ YTScraper                                    │
/// │ [Check Video] [Check Channel] [Downloader]   │
/// │ URL input                                    │
/// │ (resolution selector, downloader only)       │
/// │                                              │
/// │ Idle hint / spinner / error / result card    │
/// │                                              │
/// │ status / toast                               │
/// └──────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &AppState) {
    let root = frame.area();

    let form_height = if state.intent() == Intent::DownloadLookup {
        6
    } else {
        3
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Header
            Constraint::Length(3),           // Intent tabs
            Constraint::Length(form_height), // Form
            Constraint::Min(5),              // Body
            Constraint::Length(1),           // Status line
        ])
        .split(root);

    render_header(frame, rows[0]);
    tabs::render(frame, state, rows[1]);
    form::render(frame, state, rows[2]);

    if state.show_help {
        help::render(frame, rows[3]);
    } else {
        render_body(frame, state, rows[3]);
    }

    render_status(frame, state, rows[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", theme.icons.youtube),
            Style::default().fg(theme.palette.accent),
        ),
        Span::styled(
            "YT",
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Scraper",
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  v{} {} F1 help", env!("CARGO_PKG_VERSION"), theme.icons.bullet),
            Style::default().fg(theme.palette.fg_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Exactly one of idle hint, spinner, error box or result card.
fn render_body(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let view = state.view();

    match view.phase() {
        Phase::Idle => {
            let hint = match view.intent() {
                Intent::ChannelLookup => "Paste a channel URL and press Enter to fetch its stats.",
                Intent::VideoLookup => "Paste a video URL and press Enter to analyse it.",
                Intent::DownloadLookup => {
                    "Pick a target quality, paste a video URL and press Enter to get a link."
                }
            };
            let p = Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(theme.palette.fg_secondary),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(p, centered_line(area));
        }
        Phase::Loading => {
            let spinner = LoadingSpinner::frame(state.tick);
            let p = Paragraph::new(Line::from(vec![
                Span::styled(spinner, Style::default().fg(theme.palette.accent)),
                Span::styled(
                    " Processing...",
                    Style::default().fg(theme.palette.fg_secondary),
                ),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(p, centered_line(area));
        }
        Phase::Error(message) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_set(theme.border_set())
                .border_style(Style::default().fg(theme.palette.error))
                .title(format!(" {} Error ", theme.icons.error))
                .title_style(Style::default().fg(theme.palette.error));
            let p = Paragraph::new(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(theme.palette.error),
            )))
            .wrap(Wrap { trim: true })
            .block(block);
            let height = area.height.min(5);
            frame.render_widget(p, Rect { height, ..area });
        }
        Phase::Result(result) => {
            let card = card::render(
                result,
                view.intent(),
                state.resolution,
                view.submitted_url(),
            );
            card_widget::render(frame, &card, area);
        }
    }
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let line = match &state.toast {
        Some(toast) if !toast.is_expired() => {
            let (prefix, color) = match toast.kind {
                ToastKind::Success => (icons.success, theme.palette.success),
                ToastKind::Error => (icons.error, theme.palette.error),
            };
            Line::from(vec![
                Span::styled(format!(" {prefix} "), Style::default().fg(color)),
                Span::styled(toast.message.as_str(), Style::default().fg(color)),
            ])
        }
        _ => Line::from(Span::styled(
            format!(" {}", state.status),
            Style::default().fg(theme.palette.fg_muted),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Two-row strip around the vertical middle of `area` (room for one wrap).
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height.saturating_sub(1) / 2;
    Rect {
        y,
        height: area.height.min(2),
        ..area
    }
}
