//! Binary entry point: parse flags, route logs to a file, seed the catalog,
//! and drive the Ratatui event loop until the user exits.
use biblioteca_digital::cli::Cli;
use biblioteca_digital::logging::init_logging;
use biblioteca_digital::{run_app, App, LibraryState};
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_path = init_logging(cli.log_file.as_deref(), &cli.log_level)?;

    let catalog = cli.initial_catalog()?;
    info!(
        books = catalog.len(),
        log = %log_path.display(),
        "starting session"
    );

    let mut app = App::new(LibraryState::new(catalog));
    let result = run_app(&mut app);
    info!(books = app.state().total_count(), "session ended");
    result
}
