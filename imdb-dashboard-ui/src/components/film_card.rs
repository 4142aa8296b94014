//! Card highlighting a single movie.

use dioxus::prelude::*;
use imdb_core::Movie;
use imdb_utils::dates::format_date;
use imdb_utils::format::usd;

#[derive(Props, Clone, PartialEq)]
pub struct FilmCardProps {
    pub movie: Movie,
}

/// Title, tagline and headline numbers of a movie.
#[component]
pub fn FilmCard(props: FilmCardProps) -> Element {
    let movie = &props.movie;
    let released = movie
        .release_date
        .as_ref()
        .map(format_date)
        .unwrap_or_else(|| "unknown".to_string());
    let popularity = movie
        .popularity
        .map(|p| format!("{:.1}", p))
        .unwrap_or_else(|| "n/a".to_string());
    let rating = movie
        .vote_average
        .map(|v| format!("{:.1} / 10 ({} votes)", v, movie.vote_count))
        .unwrap_or_else(|| "unrated".to_string());
    let budget = movie.budget.map(usd).unwrap_or_else(|| "n/a".to_string());
    let revenue = movie.revenue.map(usd).unwrap_or_else(|| "n/a".to_string());

    rsx! {
        div {
            style: "padding: 12px 16px; border: 1px solid #E0E0E0; border-left: 4px solid #1976D2; border-radius: 4px; background: #FFFFFF; max-width: 640px;",
            h4 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{movie.title}"
            }
            if !movie.tagline.is_empty() {
                p {
                    style: "margin: 0 0 8px 0; font-style: italic; color: #555;",
                    "{movie.tagline}"
                }
            }
            dl {
                style: "display: grid; grid-template-columns: max-content 1fr; gap: 2px 12px; margin: 0; font-size: 14px;",
                dt { "Popularity" }
                dd { style: "margin: 0;", "{popularity}" }
                dt { "Rating" }
                dd { style: "margin: 0;", "{rating}" }
                dt { "Released" }
                dd { style: "margin: 0;", "{released}" }
                dt { "Genres" }
                dd { style: "margin: 0;", "{movie.genres}" }
                dt { "Budget" }
                dd { style: "margin: 0;", "{budget}" }
                dt { "Revenue" }
                dd { style: "margin: 0;", "{revenue}" }
            }
        }
    }
}
