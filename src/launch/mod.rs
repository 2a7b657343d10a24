//! Hands a link (a download URL or a channel page) to the desktop opener.

use anyhow::Context;
use tokio::process::Command;

/// Platform default opener: program followed by leading args.
#[cfg(target_os = "macos")]
const DEFAULT_OPENER: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const DEFAULT_OPENER: &[&str] = &["cmd", "/C", "start", ""];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_OPENER: &[&str] = &["xdg-open"];

/// Build the command that opens `url`, honoring a configured opener.
pub fn opener_command(url: &str, opener: Option<&str>) -> Command {
    let mut cmd = match opener.map(str::trim).filter(|s| !s.is_empty()) {
        Some(program) => Command::new(program),
        None => {
            let mut cmd = Command::new(DEFAULT_OPENER[0]);
            cmd.args(&DEFAULT_OPENER[1..]);
            cmd
        }
    };
    cmd.arg(url);
    cmd
}

pub async fn open_url(url: &str, opener: Option<&str>) -> anyhow::Result<()> {
    let mut cmd = opener_command(url, opener);
    let program = cmd.as_std().get_program().to_string_lossy().into_owned();
    tracing::info!(%program, %url, "opening link");

    let out = cmd
        .stdin(std::process::Stdio::null())
        .output()
        .await
        .with_context(|| format!("run {program}"))?;
    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        anyhow::bail!("{program} failed: {}", stderr.trim());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(cmd: &Command) -> Vec<String> {
        let std = cmd.as_std();
        std::iter::once(std.get_program())
            .chain(std.get_args())
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_configured_opener_wins() {
        let cmd = opener_command("https://cdn/v.mp4", Some("firefox"));
        assert_eq!(argv(&cmd), vec!["firefox", "https://cdn/v.mp4"]);
    }

    #[test]
    fn test_blank_opener_falls_back_to_default() {
        let cmd = opener_command("https://cdn/v.mp4", Some("  "));
        let args = argv(&cmd);
        assert_eq!(args.first().map(String::as_str), Some(DEFAULT_OPENER[0]));
        assert_eq!(args.last().map(String::as_str), Some("https://cdn/v.mp4"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_opener_reports_error() {
        assert!(open_url("https://cdn/v.mp4", Some("false")).await.is_err());
    }
}
