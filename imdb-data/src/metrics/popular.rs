use imdb_core::Movie;

/// The movie with the highest popularity; the earliest row wins a tie.
///
/// Movies without a popularity figure count as 0.
pub fn most_popular_film(movies: &[Movie]) -> Option<&Movie> {
    let mut best: Option<&Movie> = None;
    for movie in movies {
        let popularity = movie.popularity.unwrap_or(0.0);
        match best {
            Some(current) if popularity <= current.popularity.unwrap_or(0.0) => {}
            _ => best = Some(movie),
        }
    }
    best
}
