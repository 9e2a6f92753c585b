//! Headless flip-book driver.
//!
//! Opens a PDF, runs a script of viewer commands against it, writes the
//! active page to a PNG and prints the final viewer state as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use flipbook::constants::DEFAULT_LOG_FILTER;
use flipbook::fullscreen::{FullscreenNotifier, HeadlessFullscreen};
use flipbook::settings::ViewerSettings;
use flipbook::source::{PdfiumLoader, PdfiumSource};
use flipbook::{ViewerCommand, ViewerSession};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flipbook", version, about = "Drive the flip-book viewer over a PDF")]
struct Args {
    /// PDF document to open
    pdf: PathBuf,

    /// Viewer command to run, in order (next, prev, zoom-in, goto:N, input:TEXT, ...)
    #[arg(short, long = "command")]
    commands: Vec<ViewerCommand>,

    /// Directory to write the rendered page into
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Settings file (defaults to the platform config dir)
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn init_tracing(settings: &ViewerSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(settings.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => ViewerSettings::load_from(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?,
        None => ViewerSettings::load(),
    };
    init_tracing(&settings);

    let pdfium = PdfiumLoader::load(settings.pdfium_library_path.as_deref())
        .context("Failed to bind the pdfium library")?;

    let notifier = FullscreenNotifier::new();
    let platform = HeadlessFullscreen::new(notifier.clone());
    let mut session = ViewerSession::mount(settings, &notifier, platform);

    session.load(PdfiumSource::open(&pdfium, &args.pdf));
    if let Some(reason) = session.viewer().load_error() {
        anyhow::bail!("{}", reason);
    }

    for command in args.commands {
        session.execute(command);
    }

    let viewer = session.viewer();
    if let Some(page) = session.render_current_page().context("Failed to render page")? {
        std::fs::create_dir_all(&args.out)
            .with_context(|| format!("Failed to create {}", args.out.display()))?;
        let path = args.out.join(format!("page-{:03}.png", viewer.current_page()));
        page.save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote page");
    }

    println!("{}", serde_json::to_string_pretty(&viewer.snapshot())?);
    Ok(())
}
