//! Help overlay showing keybindings

use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Lookup", &theme),
        keybind("Enter", "Submit URL", &theme),
        keybind("Ctrl+u", "Clear input", &theme),
        keybind("Backspace", "Delete character", &theme),
        keybind("Up / Down", "Change target quality", &theme),
        keybind("Ctrl+d", "Open download link", &theme),
        keybind("Ctrl+o", "Open channel on YouTube", &theme),
    ];
    frame.render_widget(
        Paragraph::new(left_content).wrap(Wrap { trim: false }),
        cols[0],
    );

    let right_content = vec![
        section_header("Tabs", &theme),
        keybind("Tab", "Next tab", &theme),
        keybind("Shift+Tab", "Previous tab", &theme),
        keybind("F2 / F3 / F4", "Video / Channel / Downloader", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("F1", "Toggle this help", &theme),
        keybind("Esc / Ctrl+c", "Quit", &theme),
    ];
    frame.render_widget(
        Paragraph::new(right_content).wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:14}", key),
            Style::default()
                .fg(theme.palette.fg_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
