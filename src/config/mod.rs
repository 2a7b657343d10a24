use crate::lookup::{Intent, Resolution};
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub lookup: LookupConfig,
    pub paths: PathsConfig,
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Where the metadata service listens; `/api/info` is appended.
    pub base_url: String,
    /// Append the advisory `resolution=` parameter to download lookups.
    pub send_resolution: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Tab selected on startup.
    pub default_intent: Intent,
    pub default_resolution: Resolution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Program used to open download links (e.g. "firefox"). Platform default when unset.
    pub opener: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            send_resolution: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "ytscraper", "ytscraper");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("ytscraper"));
        Self { data_dir }
    }
}

impl Config {
    pub fn log_path(&self) -> PathBuf {
        self.paths.data_dir.join("ytscraper.log")
    }

    /// Service URL for this run. A `--server` override wins but is never stored.
    pub fn server_url<'a>(&'a self, override_url: Option<&'a str>) -> &'a str {
        override_url.unwrap_or(&self.api.base_url)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "ytscraper", "ytscraper").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

fn resolve_path(override_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match override_path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

fn write_private(path: &Path, raw: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = resolve_path(override_path)?;
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    write_private(&path, &raw)
}

/// Load the config, writing defaults on first run.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = resolve_path(override_path)?;

    if !path.exists() {
        let cfg = Config::default();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        write_private(&path, &raw)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Re-read the file, apply `edit` and write it back. Only what is on disk
/// gets saved.
pub fn update(
    override_path: Option<&Path>,
    edit: impl FnOnce(&mut Config),
) -> anyhow::Result<Config> {
    let mut cfg = load(override_path)?;
    edit(&mut cfg);
    save(&cfg, override_path)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(cfg.lookup.default_resolution, Resolution::P720);
        assert_eq!(cfg.lookup.default_intent, Intent::VideoLookup);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("default_resolution = 720"));
        assert!(raw.contains(r#"default_intent = "video""#));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[api]\nbase_url = \"https://yt.example\"\n\n[lookup]\ndefault_intent = \"downloader\"\n",
        )
        .unwrap();

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.api.base_url, "https://yt.example");
        assert!(cfg.api.send_resolution);
        assert_eq!(cfg.lookup.default_intent, Intent::DownloadLookup);
        assert_eq!(cfg.lookup.default_resolution, Resolution::P720);
        assert!(cfg.download.opener.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.lookup.default_resolution = Resolution::P1440;
        cfg.download.opener = Some("firefox".into());
        save(&cfg, Some(&path)).unwrap();

        let back = load(Some(&path)).unwrap();
        assert_eq!(back.lookup.default_resolution, Resolution::P1440);
        assert_eq!(back.download.opener.as_deref(), Some("firefox"));
    }

    #[test]
    fn test_server_override_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\nbase_url = \"https://yt.example\"\n").unwrap();

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.server_url(Some("http://scratch.invalid:9")), "http://scratch.invalid:9");
        assert_eq!(cfg.server_url(None), "https://yt.example");

        let updated = update(Some(&path), |c| c.lookup.default_resolution = Resolution::P1080).unwrap();
        assert_eq!(updated.api.base_url, "https://yt.example");

        let back = load(Some(&path)).unwrap();
        assert_eq!(back.api.base_url, "https://yt.example");
        assert_eq!(back.lookup.default_resolution, Resolution::P1080);
    }

    #[test]
    fn test_rejects_unsupported_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[lookup]\ndefault_resolution = 999\n").unwrap();
        assert!(load(Some(&path)).is_err());
    }
}
