//! PythonPal - a friendly Python tutor in your terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use tracing::warn;

/// PythonPal - a friendly Python tutor in your terminal
#[derive(Parser, Debug)]
#[command(name = "pypal")]
#[command(about = "A friendly Python tutor in your terminal", long_about = None)]
struct Args {
    /// Tutor to start with (case-insensitive name match)
    #[arg(long, value_name = "NAME")]
    tutor: Option<String>,

    /// Open the code playground at startup
    #[arg(long)]
    playground: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    pypal_core::logging::init()?;

    // Config file first, CLI flags on top
    let mut settings = pypal_app::config::load_settings();
    if args.playground {
        settings.behavior.playground_on_start = true;
    }
    if let Some(name) = args.tutor {
        if pypal_core::catalog::tutor_index_by_name(&name).is_none() {
            warn!("Unknown tutor '{}', starting with the default", name);
        }
        settings.ui.default_tutor = Some(name);
    }

    pypal_tui::run(settings).await?;
    Ok(())
}
