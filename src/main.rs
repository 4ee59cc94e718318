use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use budget_tracker::config::TrackerPaths;
use budget_tracker::store::ExpenseStore;
use budget_tracker::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "btrack",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracking and budgeting application",
    long_about = "BudgetTracker is a terminal-based personal budgeting application. \
                  Record expenses, categorize them, set per-category budget caps, \
                  and keep an eye on totals, remaining budget, and over-budget \
                  alerts - all from your terminal."
)]
struct Cli {
    /// Override the config directory (also: BUDGET_TRACKER_DATA_DIR)
    #[arg(long, env = "BUDGET_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Start with an empty expense list instead of the sample data
    #[arg(long)]
    fresh: bool,

    /// Don't show the onboarding tour, even on a first visit
    #[arg(long)]
    skip_tour: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };

    let store = if cli.fresh {
        ExpenseStore::new()
    } else {
        ExpenseStore::with_sample_data()
    };

    run_tui(store, paths, cli.skip_tour)?;

    Ok(())
}
