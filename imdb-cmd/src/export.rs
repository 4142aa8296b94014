//! Export of chart specs as Vega-Lite JSON files.

use crate::FilterArgs;
use anyhow::Context;
use imdb_charts::ChartKind;
use imdb_core::{Dataset, Movie};
use imdb_data::FilterOptions;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Load `csv`, filter it with `filters` and write the charts to `out_dir`.
pub fn run_export(csv: &Path, out_dir: &Path, filters: &FilterArgs) -> anyhow::Result<Vec<PathBuf>> {
    let dataset = Dataset::from_path(csv)?;
    let options = FilterOptions::from_dataset(&dataset);
    let view = filters.selection(&options).apply(&dataset);
    info!("{} of {} movies match", view.len(), dataset.len());

    let written = export_charts(&view, out_dir)?;
    info!("Export complete. {} charts written to {}", written.len(), out_dir.display());
    Ok(written)
}

/// Write `<out_dir>/<chart-id>.vl.json` for every chart that has data.
///
/// Returns the paths written, in chart order.
pub fn export_charts(movies: &[Movie], out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();
    for kind in ChartKind::ALL {
        let Some(spec) = kind.build(movies) else {
            warn!("Skipping {}: nothing to draw", kind.id());
            continue;
        };
        let path = out_dir.join(format!("{}.vl.json", kind.id()));
        let json = spec
            .to_json_pretty()
            .with_context(|| format!("Failed to serialize {}", kind.id()))?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
title,vote_average,vote_count,release_date,revenue,runtime,budget,original_language,popularity
A,6.0,10,1999-05-01,100,90,50,en,2.5
B,7.5,200,2008-07-04,900,120,300,fr,8.0
C,5.5,40,2011-12-24,400,100,120,en,4.0
D,8.1,900,2015-06-12,5000,150,700,en,30.0
";

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("imdb-cmd-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_one_file_per_chart() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let dir = scratch_dir("all");
        let written = export_charts(dataset.movies(), &dir).unwrap();

        assert_eq!(written.len(), ChartKind::ALL.len());
        for kind in ChartKind::ALL {
            let path = dir.join(format!("{}.vl.json", kind.id()));
            let text = fs::read_to_string(&path).unwrap();
            assert!(text.contains("vega-lite"), "{} is not a Vega-Lite spec", kind.id());
        }
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_view_writes_nothing() {
        let dir = scratch_dir("empty");
        let written = export_charts(&[], &dir).unwrap();
        assert!(written.is_empty());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_csv_is_an_error() {
        let dir = scratch_dir("missing");
        let result = run_export(Path::new("/nonexistent/movies.csv"), &dir, &FilterArgs::default());
        assert!(result.is_err());
    }
}
