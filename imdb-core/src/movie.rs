use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use imdb_utils::dates::parse_release_date;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Number of named columns in the movie CSV.
pub const COLUMN_COUNT: usize = 21;

/// Column names with their meaning, in file order. Shown on the overview page.
pub const COLUMN_GLOSSARY: [(&str, &str); COLUMN_COUNT] = [
    ("id", "A unique identifier for each movie."),
    ("title", "The name of the movie."),
    (
        "vote_average",
        "The average rating the movie has received from users (0 to 10, 0 when unrated).",
    ),
    ("vote_count", "The total number of votes submitted for the movie."),
    (
        "status",
        "The current state of the movie (e.g. \"Released\", \"Post Production\").",
    ),
    ("release_date", "The date when the movie was officially released."),
    ("revenue", "The total earnings of the movie (usually in USD)."),
    ("runtime", "The duration of the movie in minutes."),
    ("adult", "Whether the movie is classified as adult content."),
    ("budget", "The total cost of producing the movie (usually in USD)."),
    ("imdb_id", "The identifier of the movie on IMDb."),
    (
        "original_language",
        "The language the movie was originally produced in (e.g. \"en\").",
    ),
    ("original_title", "The title of the movie in its native language."),
    ("overview", "A brief summary of the plot."),
    (
        "popularity",
        "A metric indicating how popular the movie is (views, searches, ratings).",
    ),
    ("tagline", "A short phrase or slogan associated with the movie."),
    ("genres", "Comma-separated genres (e.g. Action, Comedy, Drama)."),
    ("production_companies", "The companies involved in producing the movie."),
    ("production_countries", "The countries where the movie was produced."),
    ("spoken_languages", "The languages spoken in the movie."),
    ("keywords", "Terms associated with the movie, used for categorization or search."),
];

/// One row of the CSV exactly as written, before any interpretation.
///
/// Every column is read as text so that a blank or odd cell never rejects the
/// whole row; [`Movie::from`] decides what each value means.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MovieRow {
    id: String,
    title: String,
    vote_average: String,
    vote_count: String,
    status: String,
    release_date: String,
    revenue: String,
    runtime: String,
    adult: String,
    budget: String,
    imdb_id: String,
    original_language: String,
    original_title: String,
    overview: String,
    popularity: String,
    tagline: String,
    genres: String,
    production_companies: String,
    production_countries: String,
    spoken_languages: String,
    keywords: String,
}

/// A single movie from the dataset.
///
/// `vote_average`, `budget`, `revenue`, `runtime` and `popularity` follow the
/// dataset's zero-as-missing convention: a literal 0 (or a blank cell) is
/// stored as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub vote_average: Option<f64>,
    pub vote_count: u64,
    pub status: String,
    pub release_date: Option<NaiveDate>,
    /// Derived from `release_date`.
    pub year: Option<i32>,
    pub revenue: Option<f64>,
    /// Minutes
    pub runtime: Option<f64>,
    pub adult: bool,
    pub budget: Option<f64>,
    pub imdb_id: String,
    pub original_language: String,
    pub original_title: String,
    pub overview: String,
    pub popularity: Option<f64>,
    pub tagline: String,
    pub genres: String,
    pub production_companies: String,
    pub production_countries: String,
    pub spoken_languages: String,
    pub keywords: String,
}

fn parse_measure(ess: &str) -> Option<f64> {
    match ess.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => Some(v),
        _ => None,
    }
}

fn parse_count(ess: &str) -> u64 {
    match ess.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v as u64,
        _ => 0,
    }
}

fn parse_flag(ess: &str) -> bool {
    matches!(ess.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let release_date = parse_release_date(&row.release_date);
        Movie {
            id: row.id.trim().parse::<f64>().map(|v| v as i64).unwrap_or_default(),
            title: row.title,
            vote_average: parse_measure(&row.vote_average),
            vote_count: parse_count(&row.vote_count),
            status: row.status,
            year: release_date.map(|d| d.year()),
            release_date,
            revenue: parse_measure(&row.revenue),
            runtime: parse_measure(&row.runtime),
            adult: parse_flag(&row.adult),
            budget: parse_measure(&row.budget),
            imdb_id: row.imdb_id,
            original_language: row.original_language.trim().to_string(),
            original_title: row.original_title,
            overview: row.overview,
            popularity: parse_measure(&row.popularity),
            tagline: row.tagline,
            genres: row.genres,
            production_companies: row.production_companies,
            production_countries: row.production_countries,
            spoken_languages: row.spoken_languages,
            keywords: row.keywords,
        }
    }
}

impl Movie {
    /// Rating as written in the file; unrated movies read as 0.
    pub fn rating(&self) -> f64 {
        self.vote_average.unwrap_or(0.0)
    }

    /// Revenue as written in the file; unreported revenue reads as 0.
    pub fn gross(&self) -> f64 {
        self.revenue.unwrap_or(0.0)
    }

    /// Trimmed, non-empty genre names from the comma-delimited list.
    pub fn genre_list(&self) -> impl Iterator<Item = &str> {
        self.genres.split(',').map(str::trim).filter(|g| !g.is_empty())
    }

    /// Parse movie rows from any CSV reader with a header row.
    ///
    /// Columns are matched by header name and extra columns are ignored.
    /// Rows the CSV reader cannot decode are skipped and counted.
    pub fn read_movie_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Movie>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if !headers.iter().any(|h| h.trim() == "title") {
            anyhow::bail!("movie CSV has no `title` column (headers: {:?})", headers);
        }

        let mut movies = Vec::new();
        let mut skipped = 0u32;
        for result in rdr.deserialize::<MovieRow>() {
            match result {
                Ok(row) => movies.push(Movie::from(row)),
                Err(e) => {
                    log::debug!("skipping malformed movie row: {}", e);
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            log::warn!("movie: skipped {} malformed rows", skipped);
        }
        log::info!("movie: parsed {} movies", movies.len());
        Ok(movies)
    }

    /// Parse movie rows from an in-memory CSV string.
    pub fn parse_movie_csv(csv_object: &str) -> anyhow::Result<Vec<Movie>> {
        Movie::read_movie_csv(csv_object.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub const HEADER: &str = "id,title,vote_average,vote_count,status,release_date,revenue,runtime,adult,budget,imdb_id,original_language,original_title,overview,popularity,tagline,genres,production_companies,production_countries,spoken_languages,keywords";

    #[test]
    fn parse_full_row() {
        let csv = format!(
            "{}\n{}\n",
            HEADER,
            r#"19995,Avatar,7.573,29815,Released,2009-12-15,2923706026,162,False,237000000,tt0499549,en,Avatar,"In the 22nd century, a paraplegic Marine...",79.932,Enter the world of Pandora.,"Action, Adventure, Fantasy, Science Fiction","Dune Entertainment, Lightstorm Entertainment","United States of America, United Kingdom","English, Spanish","future, society, culture clash""#
        );
        let movies = Movie::parse_movie_csv(&csv).unwrap();
        assert_eq!(movies.len(), 1);
        let avatar = &movies[0];
        assert_eq!(avatar.id, 19995);
        assert_eq!(avatar.title, "Avatar");
        assert_eq!(avatar.vote_average, Some(7.573));
        assert_eq!(avatar.vote_count, 29815);
        assert_eq!(avatar.year, Some(2009));
        assert_eq!(avatar.revenue, Some(2_923_706_026.0));
        assert_eq!(avatar.runtime, Some(162.0));
        assert!(!avatar.adult);
        assert_eq!(avatar.budget, Some(237_000_000.0));
        assert_eq!(avatar.original_language, "en");
        assert_eq!(
            avatar.genre_list().collect::<Vec<_>>(),
            vec!["Action", "Adventure", "Fantasy", "Science Fiction"]
        );
    }

    #[test]
    fn zero_and_blank_measures_are_missing() {
        let csv = format!(
            "{}\n{}\n",
            HEADER, "1,Unknown Film,0,0,Released,,0,,True,0,,fr,Unknown Film,,0,,,,,,"
        );
        let movies = Movie::parse_movie_csv(&csv).unwrap();
        let film = &movies[0];
        assert_eq!(film.vote_average, None);
        assert_eq!(film.rating(), 0.0);
        assert_eq!(film.vote_count, 0);
        assert_eq!(film.release_date, None);
        assert_eq!(film.year, None);
        assert_eq!(film.revenue, None);
        assert_eq!(film.gross(), 0.0);
        assert_eq!(film.runtime, None);
        assert_eq!(film.budget, None);
        assert_eq!(film.popularity, None);
        assert!(film.adult);
        assert_eq!(film.genre_list().count(), 0);
    }

    #[test]
    fn columns_are_matched_by_name() {
        let csv = "\
title,budget,extra,genres
Reordered,5000,ignored,Drama
";
        let movies = Movie::parse_movie_csv(csv).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Reordered");
        assert_eq!(movies[0].budget, Some(5000.0));
        assert_eq!(movies[0].genres, "Drama");
        assert_eq!(movies[0].year, None);
    }

    #[test]
    fn missing_title_column_is_an_error() {
        let csv = "foo,bar\n1,2\n";
        assert!(Movie::parse_movie_csv(csv).is_err());
    }

    #[test]
    fn glossary_lists_every_column() {
        let names: Vec<&str> = COLUMN_GLOSSARY.iter().map(|(name, _)| *name).collect();
        let header: Vec<&str> = HEADER.split(',').collect();
        assert_eq!(names, header);
    }
}
