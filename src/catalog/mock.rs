use parking_lot::Mutex;
use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use crate::catalog::{CatalogSource, ImageSource, MovieRecord};
use crate::error::TransportError;

pub fn sample_movies() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new("The Godfather", "9.2", "https://example.com/godfather._V1_.jpg"),
        MovieRecord::new("Kill Bill", "8.1", "https://example.com/killbill._V1_.jpg"),
        MovieRecord::new("Tesla", "5.1", "https://example.com/tesla._V1_.jpg"),
        MovieRecord::new("Vivarium", "5.8", "https://example.com/vivarium._V1_.jpg"),
    ]
}

pub struct StaticCatalog {
    movies: Vec<MovieRecord>,
}

impl StaticCatalog {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        StaticCatalog { movies }
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch_catalog(&self) -> Result<Vec<MovieRecord>, TransportError> {
        Ok(self.movies.clone())
    }
}

pub struct FailingCatalog;

impl CatalogSource for FailingCatalog {
    fn fetch_catalog(&self) -> Result<Vec<MovieRecord>, TransportError> {
        Err(TransportError::Remote("Invalid API key".to_owned()))
    }
}

/// Serves one scripted response per call, each after its own delay. `None` fails the call.
pub struct ScriptedCatalog {
    responses: Mutex<VecDeque<(Duration, Option<Vec<MovieRecord>>)>>,
}

impl ScriptedCatalog {
    pub fn new(responses: Vec<(Duration, Option<Vec<MovieRecord>>)>) -> Self {
        ScriptedCatalog {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

impl CatalogSource for ScriptedCatalog {
    fn fetch_catalog(&self) -> Result<Vec<MovieRecord>, TransportError> {
        let response = self.responses.lock().pop_front();
        match response {
            Some((delay, movies)) => {
                thread::sleep(delay);
                movies.ok_or_else(|| TransportError::Remote("Scripted failure".to_owned()))
            }
            None => Err(TransportError::Remote("No more scripted responses".to_owned())),
        }
    }
}

pub struct StaticImages;

pub const STATIC_IMAGE: &[u8] = b"poster";

impl ImageSource for StaticImages {
    fn fetch_image(&self, _url: &str) -> Result<Vec<u8>, TransportError> {
        Ok(STATIC_IMAGE.to_vec())
    }
}

pub struct SlowImages(pub Duration);

impl ImageSource for SlowImages {
    fn fetch_image(&self, _url: &str) -> Result<Vec<u8>, TransportError> {
        thread::sleep(self.0);
        Ok(STATIC_IMAGE.to_vec())
    }
}

pub struct FailingImages;

impl ImageSource for FailingImages {
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        Err(TransportError::Remote(format!("404 for {}", url)))
    }
}
