use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("imdb_movies.csv");

    // A missing dataset becomes an empty file, which the app reports as
    // "nothing to render" instead of failing the build.
    let src = Path::new("../fixtures/imdb_movies.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, "").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/imdb_movies.csv");
}
