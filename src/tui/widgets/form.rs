//! URL input box and the downloader's resolution selector

use crate::app::state::AppState;
use crate::lookup::Intent;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    if state.intent() == Intent::DownloadLookup {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(area);
        render_url_box(frame, state, rows[0]);
        render_resolution(frame, state, rows[1]);
    } else {
        render_url_box(frame, state, area);
    }
}

fn render_url_box(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let intent = state.intent();
    let loading = state.view().is_loading();

    let title = match intent {
        Intent::ChannelLookup => format!(" {} YouTube Channel URL ", icons.user),
        _ => format!(" {} YouTube Video URL ", icons.play),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.focused_border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(title)
        .title_style(Style::default().fg(theme.palette.fg_primary));

    let line = if state.url_input.is_empty() {
        let placeholder = match intent {
            Intent::ChannelLookup => "https://youtube.com/@channel...",
            _ => "https://youtube.com/watch?v=...",
        };
        Line::from(vec![
            Span::styled("▏", Style::default().fg(theme.palette.fg_primary)),
            Span::styled(placeholder, Style::default().fg(theme.palette.fg_muted)),
        ])
    } else {
        // Keep the tail visible when the URL is wider than the box.
        let width = area.width.saturating_sub(3) as usize;
        let shown = tail(&state.url_input, width);
        let cursor = if loading { "" } else { "▏" };
        Line::from(vec![
            Span::styled(shown, Style::default().fg(theme.palette.fg_primary)),
            Span::styled(cursor, Style::default().fg(theme.palette.fg_primary)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_resolution(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Target Quality (Up/Down) ", icons.settings))
        .title_style(Style::default().fg(theme.palette.fg_secondary));

    let line = Line::from(vec![
        Span::styled(
            state.resolution.label(),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} ", icons.warning),
            Style::default().fg(theme.palette.warning),
        ),
        Span::styled(
            "The closest available quality will be used.",
            Style::default().fg(theme.palette.fg_muted),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Last `max` characters of `s`, prefixed with "..." when cut.
fn tail(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().skip(count - max).collect();
    }
    let kept: String = s.chars().skip(count - (max - 3)).collect();
    format!("...{kept}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail() {
        assert_eq!(tail("abcdef", 10), "abcdef");
        assert_eq!(tail("abcdefghij", 7), "...ghij");
        assert_eq!(tail("abcdef", 2), "ef");
    }
}
