use crate::app::state::AppState;
use crate::lookup::Intent;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Intent switcher. The downloader tab gets the accent color when active.
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let active = state.intent();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(" Tab / Shift+Tab ")
        .title_style(Style::default().fg(theme.palette.fg_muted));

    let titles: Vec<Line> = Intent::ALL
        .iter()
        .map(|intent| {
            let style = if *intent == active {
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };
            Line::from(vec![
                Span::styled(icons.for_intent(*intent), style),
                Span::raw(" "),
                Span::styled(intent.label(), style),
            ])
        })
        .collect();

    let highlight = if active == Intent::DownloadLookup {
        Style::default()
            .fg(theme.palette.fg_primary)
            .bg(theme.palette.accent)
    } else {
        Style::default()
            .fg(theme.palette.fg_primary)
            .bg(theme.palette.border)
    };

    let tabs = Tabs::new(titles)
        .block(block)
        .select(active.index())
        .highlight_style(highlight)
        .divider(Span::styled("│", Style::default().fg(theme.palette.border)));

    frame.render_widget(tabs, area);
}
