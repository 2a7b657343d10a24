//! Result renderer: a pure mapping from a lookup result to a display card.
//!
//! Nothing here touches the network or the view state. The TUI draws a
//! [`Card`] with ratatui widgets; headless mode prints its `Display` form.

use crate::lookup::{ChannelInfo, Format, Intent, LookupResult, Metric, Resolution, VideoInfo};
use std::fmt;

/// Stand-in for a field the service did not provide.
pub const PLACEHOLDER: &str = "-";
/// Shown when a channel hides its subscriber count.
pub const HIDDEN: &str = "hidden";
/// Label for a format entry without a height.
pub const UNKNOWN_RESOLUTION: &str = "unknown";

#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    Channel(ChannelCard),
    Video(VideoCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCard {
    pub name: String,
    pub id: String,
    pub description: String,
    pub subscribers: String,
    pub video_count: String,
    pub thumbnail: Option<String>,
    /// `None` means the banner section is left out entirely.
    pub banner: Option<String>,
    /// The submitted channel URL, offered as "Open on YouTube".
    pub page_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoCard {
    pub title: String,
    pub uploader: String,
    pub views: String,
    pub likes: String,
    pub duration: String,
    pub thumbnail: Option<String>,
    pub footer: VideoFooter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VideoFooter {
    /// Plain video lookup: just confirm the data arrived.
    Acknowledged,
    Download(DownloadPanel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadPanel {
    /// De-duplicated, in first-seen order, e.g. `["720p", "480p"]`.
    pub resolutions: Vec<String>,
    pub action: DownloadAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DownloadAction {
    Ready { url: String, label: String },
    NotFound,
}

impl Card {
    /// Link the download action points at, if the card offers one.
    pub fn download_url(&self) -> Option<&str> {
        match self {
            Card::Video(VideoCard {
                footer:
                    VideoFooter::Download(DownloadPanel {
                        action: DownloadAction::Ready { url, .. },
                        ..
                    }),
                ..
            }) => Some(url),
            _ => None,
        }
    }

    /// Channel page the "Open on YouTube" action points at.
    pub fn page_url(&self) -> Option<&str> {
        match self {
            Card::Channel(c) => c.page_url.as_deref(),
            Card::Video(_) => None,
        }
    }
}

/// Build the card for `result`. Only the `type` tag picks the card kind;
/// `intent` only decides whether a video card carries the download panel.
/// `submitted` is the URL the lookup was made for.
pub fn render(
    result: &LookupResult,
    intent: Intent,
    preferred: Resolution,
    submitted: Option<&str>,
) -> Card {
    match result {
        LookupResult::Channel(c) => Card::Channel(channel_card(c, submitted)),
        LookupResult::Video(v) => Card::Video(video_card(v, intent, preferred)),
    }
}

fn channel_card(c: &ChannelInfo, submitted: Option<&str>) -> ChannelCard {
    ChannelCard {
        name: text_or_placeholder(c.name.as_deref()),
        id: text_or_placeholder(c.id.as_deref()),
        description: text_or_placeholder(c.description.as_deref()),
        subscribers: c
            .subscribers
            .as_ref()
            .map(Metric::to_string)
            .unwrap_or_else(|| HIDDEN.to_string()),
        video_count: metric_or_placeholder(c.video_count.as_ref()),
        thumbnail: non_empty(c.thumbnail.as_deref()),
        banner: non_empty(c.banner.as_deref()),
        page_url: non_empty(submitted),
    }
}

fn video_card(v: &VideoInfo, intent: Intent, preferred: Resolution) -> VideoCard {
    let footer = if intent == Intent::DownloadLookup {
        let resolutions = available_resolutions(v.formats.as_deref().unwrap_or_default());
        let action = match non_empty(v.download_url.as_deref()) {
            Some(url) => DownloadAction::Ready {
                url,
                label: format!("Download {preferred} now"),
            },
            None => DownloadAction::NotFound,
        };
        VideoFooter::Download(DownloadPanel {
            resolutions,
            action,
        })
    } else {
        VideoFooter::Acknowledged
    };

    VideoCard {
        title: text_or_placeholder(v.title.as_deref()),
        uploader: text_or_placeholder(v.uploader.as_deref()),
        views: metric_or_placeholder(v.views.as_ref()),
        likes: metric_or_placeholder(v.likes.as_ref()),
        duration: metric_or_placeholder(v.duration.as_ref()),
        thumbnail: non_empty(v.thumbnail.as_deref()),
        footer,
    }
}

/// `res` values as `"<res>p"`, de-duplicated in first-seen order.
pub fn available_resolutions(formats: &[Format]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for f in formats {
        let label = match f.res {
            Some(res) => format!("{res}p"),
            None => UNKNOWN_RESOLUTION.to_string(),
        };
        if !out.contains(&label) {
            out.push(label);
        }
    }
    out
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

fn text_or_placeholder(s: Option<&str>) -> String {
    non_empty(s).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn metric_or_placeholder(m: Option<&Metric>) -> String {
    m.map(Metric::to_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Channel(c) => {
                writeln!(f, "{} ({})", c.name, c.id)?;
                writeln!(f, "Subscribers: {}", c.subscribers)?;
                writeln!(f, "Videos:      {}", c.video_count)?;
                if let Some(thumb) = &c.thumbnail {
                    writeln!(f, "Thumbnail:   {thumb}")?;
                }
                if let Some(banner) = &c.banner {
                    writeln!(f, "Banner:      {banner}")?;
                }
                if let Some(page) = &c.page_url {
                    writeln!(f, "Open on YouTube: {page}")?;
                }
                writeln!(f)?;
                writeln!(f, "{}", c.description)
            }
            Card::Video(v) => {
                writeln!(f, "{}", v.title)?;
                writeln!(f, "by {}", v.uploader)?;
                writeln!(f, "Views:    {}", v.views)?;
                writeln!(f, "Likes:    {}", v.likes)?;
                writeln!(f, "Duration: {}", v.duration)?;
                if let Some(thumb) = &v.thumbnail {
                    writeln!(f, "Thumbnail: {thumb}")?;
                }
                match &v.footer {
                    VideoFooter::Acknowledged => writeln!(f, "Video data fetched successfully."),
                    VideoFooter::Download(panel) => {
                        let res = if panel.resolutions.is_empty() {
                            "none listed".to_string()
                        } else {
                            panel.resolutions.join(", ")
                        };
                        writeln!(f, "Available resolutions: {res}")?;
                        match &panel.action {
                            DownloadAction::Ready { url, label } => writeln!(f, "{label}: {url}"),
                            DownloadAction::NotFound => writeln!(f, "Download link not found."),
                        }
                    }
                }
            }
        }
    }
}
