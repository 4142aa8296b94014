//! Command implementations for the IMDB CLI.
//!
//! Both subcommands load a movie CSV, apply the same filter selection the
//! dashboard sidebar offers, and report on the filtered view.

use clap::{Args, Subcommand};
use imdb_data::{Bounds, Choice, FilterOptions, FilterSelection};
use std::path::PathBuf;

pub mod export;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print row counts and the most popular film of the filtered view
    Summary {
        /// Path to the movie CSV
        #[arg(short = 'c', long)]
        csv: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Write every chart of the filtered view as a Vega-Lite JSON file
    Export {
        /// Path to the movie CSV
        #[arg(short = 'c', long)]
        csv: PathBuf,

        /// Directory receiving `<chart-id>.vl.json` files (created if missing)
        #[arg(short = 'o', long)]
        out_dir: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Sidebar filters as flags. Omitted flags keep the dataset-wide default.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// Lowest vote average to keep
    #[arg(long)]
    pub min_vote: Option<f64>,

    /// Highest vote average to keep
    #[arg(long)]
    pub max_vote: Option<f64>,

    /// Genre to match (substring of the genres column)
    #[arg(long)]
    pub genre: Option<String>,

    /// Exact original language code, e.g. "en"
    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub min_year: Option<i32>,

    #[arg(long)]
    pub max_year: Option<i32>,

    /// Lower budget bound (compared against revenue, as in the dashboard)
    #[arg(long)]
    pub min_budget: Option<f64>,

    /// Upper budget bound (compared against revenue, as in the dashboard)
    #[arg(long)]
    pub max_budget: Option<f64>,
}

impl FilterArgs {
    /// Overlay the given flags on the default selection for `options`.
    pub fn selection(&self, options: &FilterOptions) -> FilterSelection {
        let base = options.default_selection();
        FilterSelection {
            vote_average: Bounds::new(
                self.min_vote.unwrap_or(base.vote_average.min),
                self.max_vote.unwrap_or(base.vote_average.max),
            ),
            genre: self.genre.as_deref().map_or(base.genre, Choice::from_label),
            original_language: self
                .language
                .as_deref()
                .map_or(base.original_language, Choice::from_label),
            year: Bounds::new(
                self.min_year.unwrap_or(base.year.min),
                self.max_year.unwrap_or(base.year.max),
            ),
            budget: Bounds::new(
                self.min_budget.unwrap_or(base.budget.min),
                self.max_budget.unwrap_or(base.budget.max),
            ),
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { csv, filters } => summary::run_summary(&csv, &filters),
        Command::Export {
            csv,
            out_dir,
            filters,
        } => export::run_export(&csv, &out_dir, &filters).map(|_| ()),
    }
}
