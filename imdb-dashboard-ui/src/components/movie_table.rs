//! Plain HTML tables for the overview page.

use dioxus::prelude::*;
use imdb_core::movie::COLUMN_GLOSSARY;
use imdb_core::Movie;
use imdb_utils::dates::format_date;

const CELL_STYLE: &str = "padding: 4px 8px; border-bottom: 1px solid #EEE; white-space: nowrap; max-width: 240px; overflow: hidden; text-overflow: ellipsis;";
const HEAD_STYLE: &str = "padding: 6px 8px; border-bottom: 2px solid #BDBDBD; text-align: left; background: #F5F5F5; position: sticky; top: 0;";

fn measure(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// The 21 cells of a movie, in file column order.
fn cells(movie: &Movie) -> [String; 21] {
    [
        movie.id.to_string(),
        movie.title.clone(),
        measure(movie.vote_average),
        movie.vote_count.to_string(),
        movie.status.clone(),
        movie.release_date.as_ref().map(format_date).unwrap_or_default(),
        measure(movie.revenue),
        measure(movie.runtime),
        movie.adult.to_string(),
        measure(movie.budget),
        movie.imdb_id.clone(),
        movie.original_language.clone(),
        movie.original_title.clone(),
        movie.overview.clone(),
        measure(movie.popularity),
        movie.tagline.clone(),
        movie.genres.clone(),
        movie.production_companies.clone(),
        movie.production_countries.clone(),
        movie.spoken_languages.clone(),
        movie.keywords.clone(),
    ]
}

#[derive(Props, Clone, PartialEq)]
pub struct MovieTableProps {
    pub rows: Vec<Movie>,
}

/// Scrollable table with one row per movie and every column of the file.
#[component]
pub fn MovieTable(props: MovieTableProps) -> Element {
    rsx! {
        div {
            style: "max-height: 480px; overflow: auto; border: 1px solid #E0E0E0; border-radius: 4px;",
            table {
                style: "border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        for (name, _) in COLUMN_GLOSSARY.iter() {
                            th { style: HEAD_STYLE, "{name}" }
                        }
                    }
                }
                tbody {
                    for movie in props.rows.iter() {
                        tr {
                            key: "{movie.id}-{movie.title}",
                            for cell in cells(movie) {
                                td { style: CELL_STYLE, "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Name and meaning of every column.
#[component]
pub fn ColumnGlossary() -> Element {
    rsx! {
        ul {
            style: "font-size: 14px; line-height: 1.5;",
            for (name, meaning) in COLUMN_GLOSSARY.iter() {
                li {
                    strong { "{name}" }
                    ": {meaning}"
                }
            }
        }
    }
}
