mod analysis;
mod overview;

pub use analysis::AnalysisPage;
pub use overview::OverviewPage;
