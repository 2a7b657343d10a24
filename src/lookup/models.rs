use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which operation the user picked. Doubles as the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    #[default]
    #[serde(rename = "video")]
    VideoLookup,
    #[serde(rename = "channel")]
    ChannelLookup,
    #[serde(rename = "downloader")]
    DownloadLookup,
}

impl Intent {
    pub const ALL: [Intent; 3] = [
        Intent::VideoLookup,
        Intent::ChannelLookup,
        Intent::DownloadLookup,
    ];

    /// Wire value for `type=`.
    pub fn as_query(self) -> &'static str {
        match self {
            Intent::VideoLookup => "video",
            Intent::ChannelLookup => "channel",
            Intent::DownloadLookup => "downloader",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intent::VideoLookup => "Check Video",
            Intent::ChannelLookup => "Check Channel",
            Intent::DownloadLookup => "Downloader",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Intent::VideoLookup => 0,
            Intent::ChannelLookup => 1,
            Intent::DownloadLookup => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Intent::VideoLookup => Intent::ChannelLookup,
            Intent::ChannelLookup => Intent::DownloadLookup,
            Intent::DownloadLookup => Intent::VideoLookup,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Intent::VideoLookup => Intent::DownloadLookup,
            Intent::ChannelLookup => Intent::VideoLookup,
            Intent::DownloadLookup => Intent::ChannelLookup,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(Intent::VideoLookup),
            "channel" => Ok(Intent::ChannelLookup),
            "download" | "downloader" => Ok(Intent::DownloadLookup),
            other => Err(format!(
                "unknown intent '{other}' (expected video, channel or download)"
            )),
        }
    }
}

/// Preferred download quality. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Resolution {
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

impl Resolution {
    pub const ALL: [Resolution; 6] = [
        Resolution::P360,
        Resolution::P480,
        Resolution::P720,
        Resolution::P1080,
        Resolution::P1440,
        Resolution::P2160,
    ];

    pub fn height(self) -> u32 {
        match self {
            Resolution::P360 => 360,
            Resolution::P480 => 480,
            Resolution::P720 => 720,
            Resolution::P1080 => 1080,
            Resolution::P1440 => 1440,
            Resolution::P2160 => 2160,
        }
    }

    /// Human label used by the selector.
    pub fn label(self) -> &'static str {
        match self {
            Resolution::P360 => "Low (360p)",
            Resolution::P480 => "SD (480p)",
            Resolution::P720 => "HD (720p)",
            Resolution::P1080 => "Full HD (1080p)",
            Resolution::P1440 => "2K (1440p)",
            Resolution::P2160 => "4K (2160p)",
        }
    }

    /// Next higher quality, saturating at 2160p.
    pub fn higher(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1).min(Self::ALL.len() - 1)]
    }

    /// Next lower quality, saturating at 360p.
    pub fn lower(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[idx.saturating_sub(1)]
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::P720
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.height())
    }
}

impl TryFrom<u32> for Resolution {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|r| r.height() == value)
            .ok_or_else(|| {
                format!("unsupported resolution {value} (expected 360, 480, 720, 1080, 1440 or 2160)")
            })
    }
}

impl From<Resolution> for u32 {
    fn from(r: Resolution) -> Self {
        r.height()
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_suffix(['p', 'P']).unwrap_or(s);
        let value: u32 = digits
            .parse()
            .map_err(|_| format!("invalid resolution '{s}'"))?;
        Resolution::try_from(value)
    }
}

/// One lookup as the user asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub url: String,
    pub intent: Intent,
    pub resolution: Option<Resolution>,
}

impl LookupRequest {
    pub fn new(url: impl Into<String>, intent: Intent) -> Self {
        Self {
            url: url.into(),
            intent,
            resolution: None,
        }
    }

    pub fn with_resolution(mut self, resolution: Option<Resolution>) -> Self {
        self.resolution = resolution;
        self
    }

    /// `url=..&type=..` plus `resolution=..` for download lookups only.
    pub fn query_string(&self) -> String {
        let mut query = format!(
            "url={}&type={}",
            urlencoding::encode(&self.url),
            self.intent.as_query()
        );
        if self.intent == Intent::DownloadLookup
            && let Some(res) = self.resolution
        {
            query.push_str(&format!("&resolution={}", res.height()));
        }
        query
    }
}

/// A counter as the service reports it: a raw number or a preformatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Count(u64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Count(n) => f.write_str(&group_thousands(*n)),
            Metric::Decimal(x) if x.fract() == 0.0 && *x >= 0.0 && *x < u64::MAX as f64 => {
                f.write_str(&group_thousands(*x as u64))
            }
            Metric::Decimal(x) => write!(f, "{x}"),
            Metric::Text(s) => f.write_str(s),
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Successful lookup payload. `type` is the only discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LookupResult {
    Channel(ChannelInfo),
    Video(VideoInfo),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelInfo {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub subscribers: Option<Metric>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub video_count: Option<Metric>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub views: Option<Metric>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub likes: Option<Metric>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub duration: Option<Metric>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<Format>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Format {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub format_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_height", skip_serializing_if = "Option::is_none")]
    pub res: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
}

/// Decode a field, mapping `null` or a wrongly-typed value to `None`.
fn lenient<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(T::deserialize(value).ok())
}

/// Decode an array entry by entry. Entries that fail are dropped; a non-array is `None`.
fn lenient_list<'de, D, T>(de: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let serde_json::Value::Array(items) = serde_json::Value::deserialize(de)? else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
    ))
}

/// Pixel height. Integral floats (`720.0`) count; fractions and negatives do not.
fn lenient_height<'de, D>(de: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    if let Some(n) = value.as_u64() {
        return Ok(u32::try_from(n).ok());
    }
    Ok(value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| f as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_wire_values() {
        assert_eq!(Intent::VideoLookup.as_query(), "video");
        assert_eq!(Intent::ChannelLookup.as_query(), "channel");
        assert_eq!(Intent::DownloadLookup.as_query(), "downloader");
        assert_eq!("download".parse::<Intent>(), Ok(Intent::DownloadLookup));
        assert!("playlist".parse::<Intent>().is_err());
    }

    #[test]
    fn test_intent_cycles() {
        for intent in Intent::ALL {
            assert_eq!(intent.next().prev(), intent);
        }
        assert_eq!(Intent::DownloadLookup.next(), Intent::VideoLookup);
    }

    #[test]
    fn test_resolution_parse_and_step() {
        assert_eq!("720".parse::<Resolution>(), Ok(Resolution::P720));
        assert_eq!("1080p".parse::<Resolution>(), Ok(Resolution::P1080));
        assert!("721".parse::<Resolution>().is_err());
        assert_eq!(Resolution::P2160.higher(), Resolution::P2160);
        assert_eq!(Resolution::P360.lower(), Resolution::P360);
        assert_eq!(Resolution::P720.higher(), Resolution::P1080);
    }

    #[test]
    fn test_query_string_encodes_url() {
        let req = LookupRequest::new("https://youtube.com/watch?v=abc&t=1", Intent::VideoLookup);
        assert_eq!(
            req.query_string(),
            "url=https%3A%2F%2Fyoutube.com%2Fwatch%3Fv%3Dabc%26t%3D1&type=video"
        );
    }

    #[test]
    fn test_resolution_only_sent_for_downloads() {
        let video = LookupRequest::new("x", Intent::VideoLookup)
            .with_resolution(Some(Resolution::P480));
        assert_eq!(video.query_string(), "url=x&type=video");

        let download = LookupRequest::new("x", Intent::DownloadLookup)
            .with_resolution(Some(Resolution::P480));
        assert_eq!(download.query_string(), "url=x&type=downloader&resolution=480");
    }

    #[test]
    fn test_parse_video_with_string_views() {
        let raw = r#"{"type":"video","title":"T","uploader":"U","views":"1M"}"#;
        let parsed: LookupResult = serde_json::from_str(raw).unwrap();
        let LookupResult::Video(v) = parsed else {
            panic!("expected video");
        };
        assert_eq!(v.title.as_deref(), Some("T"));
        assert_eq!(v.views, Some(Metric::Text("1M".into())));
        assert!(v.download_url.is_none());
        assert!(v.formats.is_none());
    }

    #[test]
    fn test_parse_channel_with_nulls_and_wrong_types() {
        let raw = r#"{
            "type":"channel","id":"UC1","name":"Chan","description":null,
            "subscribers":null,"video_count":42,"thumbnail":["not","a","string"],"banner":""
        }"#;
        let parsed: LookupResult = serde_json::from_str(raw).unwrap();
        let LookupResult::Channel(c) = parsed else {
            panic!("expected channel");
        };
        assert_eq!(c.name.as_deref(), Some("Chan"));
        assert!(c.description.is_none());
        assert!(c.subscribers.is_none());
        assert_eq!(c.video_count, Some(Metric::Count(42)));
        assert!(c.thumbnail.is_none());
        assert_eq!(c.banner.as_deref(), Some(""));
    }

    #[test]
    fn test_formats_skip_bad_entries() {
        let raw = r#"{"type":"video","formats":[{"res":720},null,"webm",{"res":480,"ext":"mp4"}]}"#;
        let LookupResult::Video(v) = serde_json::from_str(raw).unwrap() else {
            panic!("expected video");
        };
        let heights: Vec<_> = v.formats.unwrap().iter().map(|f| f.res).collect();
        assert_eq!(heights, vec![Some(720), Some(480)]);

        let raw = r#"{"type":"video","formats":"none"}"#;
        let LookupResult::Video(v) = serde_json::from_str(raw).unwrap() else {
            panic!("expected video");
        };
        assert!(v.formats.is_none());
    }

    #[test]
    fn test_format_height_accepts_integral_floats() {
        let formats: Vec<Format> = serde_json::from_str(
            r#"[{"res":720.0},{"res":1080},{"res":360.5},{"res":-1},{"res":"720"}]"#,
        )
        .unwrap();
        let heights: Vec<_> = formats.iter().map(|f| f.res).collect();
        assert_eq!(heights, vec![Some(720), Some(1080), None, None, None]);
    }

    #[test]
    fn test_unknown_or_missing_type_is_rejected() {
        assert!(serde_json::from_str::<LookupResult>(r#"{"type":"playlist"}"#).is_err());
        assert!(serde_json::from_str::<LookupResult>(r#"{"title":"T"}"#).is_err());
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(Metric::Count(1234567).to_string(), "1,234,567");
        assert_eq!(Metric::Count(999).to_string(), "999");
        assert_eq!(Metric::Decimal(1000.0).to_string(), "1,000");
        assert_eq!(Metric::Text("1M".into()).to_string(), "1M");
    }
}
