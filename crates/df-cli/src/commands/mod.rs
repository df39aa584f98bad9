pub mod diary;
pub mod dream;
pub mod fortune;
pub mod signs;
pub mod tarot;

use colored::Colorize;
use tracing::debug;

use df_core::{
    AppConfig, Catalog, Clock, DfError, FixedClock, FortuneApp, JsonFileStore, Storage,
    SystemClock,
};

use crate::GlobalOpts;

/// Load the catalog, honouring `--catalog`.
fn load_catalog(opts: &GlobalOpts) -> Result<Catalog, String> {
    match &opts.catalog {
        Some(dir) => Catalog::from_dir(dir)
            .map_err(|e| format!("cannot load catalog from {}: {e}", dir.display())),
        None => Catalog::builtin().map_err(|e| format!("bundled catalog is invalid: {e}")),
    }
}

/// The system clock, or a fixed one when `--date` or `--hour` is given.
fn make_clock(opts: &GlobalOpts) -> Box<dyn Clock> {
    if opts.date.is_none() && opts.hour.is_none() {
        return Box::new(SystemClock);
    }
    let date = opts.date.unwrap_or_else(|| SystemClock.today());
    let hour = opts.hour.unwrap_or_else(|| SystemClock.hour());
    Box::new(FixedClock::at(date, hour))
}

/// Build the app over the file store in `--data-dir`.
fn open_app(opts: &GlobalOpts) -> Result<FortuneApp, String> {
    let catalog = load_catalog(opts)?;
    let config = AppConfig::default();
    let store = JsonFileStore::open(&opts.data_dir)
        .map_err(|e| format!("cannot open data directory {}: {e}", opts.data_dir.display()))?;
    debug!(data_dir = %opts.data_dir.display(), "opened data directory");
    let storage = Storage::new(Box::new(store), &config.namespace);
    Ok(FortuneApp::new(catalog, make_clock(opts), storage, config))
}

/// Tell the user a save failed; the command itself still succeeds.
fn warn_unsaved(what: &str, warning: Option<DfError>) {
    if let Some(e) = warning {
        eprintln!("{} {what} not saved: {e}", "warning:".yellow().bold());
    }
}
