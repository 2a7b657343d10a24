//! Draws a rendered result card

use crate::card::{Card, ChannelCard, DownloadAction, VideoCard, VideoFooter};
use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, card: &Card, area: Rect) {
    let theme = get_theme();
    let (title, lines) = match card {
        Card::Channel(c) => (
            format!(" {} Channel ", theme.icons.user),
            channel_lines(c, &theme),
        ),
        Card::Video(v) => (
            format!(" {} Video ", theme.icons.play),
            video_lines(v, &theme),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent));

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(p, area);
}

fn channel_lines<'a>(c: &'a ChannelCard, theme: &Theme) -> Vec<Line<'a>> {
    let p = &theme.palette;
    let mut lines = Vec::new();

    if let Some(banner) = &c.banner {
        lines.push(field(theme.icons.image, "Banner", banner, theme));
    }
    lines.push(Line::from(vec![
        Span::styled(
            c.name.as_str(),
            Style::default().fg(p.fg_primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(c.id.as_str(), Style::default().fg(p.fg_muted)),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("SUBSCRIBERS ", Style::default().fg(p.fg_muted)),
        Span::styled(
            c.subscribers.as_str(),
            Style::default().fg(p.fg_primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("TOTAL VIDEOS ", Style::default().fg(p.fg_muted)),
        Span::styled(
            c.video_count.as_str(),
            Style::default().fg(p.fg_primary).add_modifier(Modifier::BOLD),
        ),
    ]));
    if let Some(thumb) = &c.thumbnail {
        lines.push(field(theme.icons.image, "Avatar", thumb, theme));
    }
    if let Some(page) = &c.page_url {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} Open on YouTube ", theme.icons.youtube),
                Style::default()
                    .fg(p.fg_primary)
                    .bg(p.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ctrl+O to open", Style::default().fg(p.fg_muted)),
        ]));
        lines.push(field(theme.icons.link, "Link", page, theme));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Channel Description",
        Style::default().fg(p.fg_secondary).add_modifier(Modifier::BOLD),
    )));
    for text in c.description.lines() {
        lines.push(Line::from(Span::styled(text, Style::default().fg(p.fg_secondary))));
    }
    lines
}

fn video_lines<'a>(v: &'a VideoCard, theme: &Theme) -> Vec<Line<'a>> {
    let p = &theme.palette;
    let icons = &theme.icons;
    let mut lines = vec![
        Line::from(Span::styled(
            v.title.as_str(),
            Style::default().fg(p.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("{} ", icons.user), Style::default().fg(p.fg_secondary)),
            Span::styled(v.uploader.as_str(), Style::default().fg(p.fg_secondary)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{} VIEWS ", icons.eye), Style::default().fg(p.fg_muted)),
            Span::styled(v.views.as_str(), Style::default().fg(p.fg_primary)),
            Span::raw("    "),
            Span::styled(format!("{} LIKES ", icons.thumbs_up), Style::default().fg(p.fg_muted)),
            Span::styled(v.likes.as_str(), Style::default().fg(p.fg_primary)),
            Span::raw("    "),
            Span::styled(format!("{} ", icons.clock), Style::default().fg(p.fg_muted)),
            Span::styled(v.duration.as_str(), Style::default().fg(p.fg_primary)),
        ]),
    ];
    if let Some(thumb) = &v.thumbnail {
        lines.push(field(icons.image, "Thumbnail", thumb, theme));
    }
    lines.push(Line::default());

    match &v.footer {
        VideoFooter::Acknowledged => {
            lines.push(Line::from(Span::styled(
                format!("{} Video data fetched successfully.", icons.success),
                Style::default().fg(p.info),
            )));
        }
        VideoFooter::Download(panel) => {
            let available = if panel.resolutions.is_empty() {
                "none listed".to_string()
            } else {
                panel.resolutions.join(", ")
            };
            lines.push(Line::from(vec![
                Span::styled(
                    "Link available for resolutions: ",
                    Style::default().fg(p.fg_secondary),
                ),
                Span::styled(available, Style::default().fg(p.fg_primary)),
            ]));
            match &panel.action {
                DownloadAction::Ready { url, label } => {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!(" {} {label} ", icons.download),
                            Style::default()
                                .fg(p.fg_primary)
                                .bg(p.success)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled("  Ctrl+D to open", Style::default().fg(p.fg_muted)),
                    ]));
                    lines.push(field(icons.link, "Link", url, theme));
                }
                DownloadAction::NotFound => {
                    lines.push(Line::from(Span::styled(
                        format!("{} Download link not found.", icons.warning),
                        Style::default().fg(p.warning),
                    )));
                }
            }
        }
    }
    lines
}

fn field<'a>(icon: &'static str, label: &'static str, value: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{icon} {label}: "), Style::default().fg(theme.palette.fg_muted)),
        Span::styled(value, Style::default().fg(theme.palette.fg_secondary)),
    ])
}
