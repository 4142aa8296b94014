//! Builders that turn a filtered view into the data behind one panel each.
//!
//! Every builder is a pure function over a slice of movies. Builders that
//! use zero-as-missing fields drop rows where those fields are `None` before
//! aggregating, and return an empty result (or `None`) when nothing is left.

mod distribution;
mod language;
mod monthly;
mod popular;
mod scatter;
mod success;
mod summary;

pub use distribution::{histogram, vote_average_distribution, VOTE_AVERAGE_BINS};
pub use language::original_language_distribution;
pub use monthly::month_vs_revenue;
pub use popular::most_popular_film;
pub use scatter::{budget_vs_revenue, runtime_vs_budget};
pub use success::{budget_vs_success, normalize_success, success_score, TREND_SAMPLES};
pub use summary::summarize;
