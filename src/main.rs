mod api;
mod app;
mod card;
mod config;
mod input;
mod launch;
mod lookup;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lookup::{Intent, Resolution};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "ytscraper", version, about = "YouTube video/channel lookup and download-link TUI")]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Metadata service base URL for this run (overrides config).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Look up one URL and print the result (headless).
    Lookup {
        url: String,
        /// video, channel or download. Defaults to `lookup.default_intent`.
        #[arg(long, short)]
        intent: Option<Intent>,
        /// Preferred quality for download lookups (360..2160).
        #[arg(long, short)]
        resolution: Option<Resolution>,
        /// Print the raw result as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },
    /// Inspect or edit the config file.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the config path and contents.
    Show,
    /// Set the metadata service base URL.
    Server { url: String },
    /// Set the default target quality.
    Resolution { value: Resolution },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let server_url = cfg.server_url(cli.server.as_deref()).to_string();

    let tui_mode = matches!(cli.command, None | Some(Command::Tui));
    init_logging(&cfg, tui_mode, cli.verbose)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let client = api::MetadataClient::new(&server_url)?;
            tracing::info!(server = client.base_url(), "starting tui");
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(cfg, client);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Lookup {
            url,
            intent,
            resolution,
            json,
        } => {
            let client = api::MetadataClient::new(&server_url)?;
            let intent = intent.unwrap_or(cfg.lookup.default_intent);
            let orchestrator =
                app::orchestrator::Orchestrator::new(client).send_resolution(cfg.api.send_resolution);
            let resolution = resolution.unwrap_or(cfg.lookup.default_resolution);
            let view = app::lookup_once(&orchestrator, intent, &url, Some(resolution)).await;

            match view.phase() {
                app::view::Phase::Result(result) if json => {
                    println!("{}", serde_json::to_string_pretty(result)?);
                }
                app::view::Phase::Result(result) => {
                    print!(
                        "{}",
                        card::render(result, intent, resolution, view.submitted_url())
                    );
                }
                app::view::Phase::Error(message) => anyhow::bail!("{message}"),
                app::view::Phase::Idle | app::view::Phase::Loading => {
                    anyhow::bail!("lookup did not complete")
                }
            }
        }
        Command::Config { cmd } => match cmd {
            ConfigCommand::Show => {
                let path = match cli.config.clone() {
                    Some(p) => p,
                    None => config::default_config_path().context("default config path")?,
                };
                println!("# {}", path.display());
                if let Some(server) = &cli.server {
                    println!("# --server {server} applies to this run only");
                }
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Server { url } => {
                config::update(cli.config.as_deref(), |c| c.api.base_url = url)
                    .context("save config")?;
                println!("Updated metadata service URL in config.");
            }
            ConfigCommand::Resolution { value } => {
                config::update(cli.config.as_deref(), |c| c.lookup.default_resolution = value)
                    .context("save config")?;
                println!("Default target quality set to {value}.");
            }
        },
    }

    Ok(())
}

/// TUI logs go to a file so they never land on the alternate screen.
fn init_logging(cfg: &config::Config, to_file: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    if to_file {
        let path = cfg.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(true)
            .with_ansi(false)
            .with_max_level(level)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(true)
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
