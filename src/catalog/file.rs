use std::fs::File;
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogSource, MovieRecord};
use crate::error::TransportError;

/// Reads the catalog from a `title,rating,image` CSV file.
#[derive(Debug)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: &Path) -> Self {
        FileCatalogSource {
            path: path.to_path_buf(),
        }
    }
}

impl CatalogSource for FileCatalogSource {
    fn fetch_catalog(&self) -> Result<Vec<MovieRecord>, TransportError> {
        let file = File::open(&self.path)?;
        let mut csv_reader = csv::Reader::from_reader(file);
        let mut movies = Vec::new();
        for movie in csv_reader.deserialize() {
            let movie: MovieRecord = movie?;
            movies.push(movie);
        }
        Ok(movies)
    }
}
