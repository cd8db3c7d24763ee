use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::app::settings::{self, Settings};
use folio::content::Profile;
use folio::errors::SettingsError;
use folio::runner;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Terminal portfolio viewer: about page, skills chart, project carousel"
)]
struct Cli {
    /// Portfolio content TOML file (defaults to the built-in profile)
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Starting theme
    #[arg(long, value_parser = ["light", "dark"])]
    theme: Option<String>,

    /// Carousel autoplay dwell in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Disable carousel autoplay
    #[arg(long)]
    no_autoplay: bool,
}

/// Route tracing output to a file in the cache dir; stdout belongs to the
/// TUI. The returned guard must live for the whole run so buffered lines
/// are flushed on exit.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = settings::user_cache_dir()?;
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }
    let appender = tracing_appender::rolling::never(dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging();

    // Settings are best-effort: a missing or unparsable file means defaults.
    let mut settings = match settings::load_settings() {
        Ok(s) => s,
        Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            // First run: write the defaults so the timing knobs are
            // discoverable in the config dir.
            if let Err(e) = settings::save_settings(&Settings::default()) {
                tracing::debug!("could not write default settings: {}", e);
            }
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("using default settings: {}", e);
            Settings::default()
        }
    };
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if let Some(ms) = cli.interval_ms {
        settings.autoplay_interval_ms = ms;
    }
    if cli.no_autoplay {
        settings.autoplay = false;
    }

    let content_path = cli.content.or_else(|| settings.content_path.clone());
    let profile = match content_path {
        Some(path) => Profile::load(&path)?,
        None => Profile::default(),
    };

    runner::run_app(profile, settings)
}
