use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::catalog::{CatalogSource, ImageSource, MovieRecord};
use crate::error::TransportError;

#[derive(Deserialize)]
struct MostPopularMovies {
    #[serde(rename = "errorMessage", default)]
    error_message: Option<String>,
    #[serde(default)]
    items: Vec<MovieRecord>,
}

pub(super) fn parse_catalog(body: &[u8]) -> Result<Vec<MovieRecord>, TransportError> {
    let movies: MostPopularMovies = serde_json::from_slice(body)?;
    match movies.error_message {
        Some(message) if !message.trim().is_empty() => Err(TransportError::Remote(message)),
        _ => Ok(movies.items),
    }
}

fn build_client(timeout: Duration) -> Result<Client, TransportError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

#[derive(Debug)]
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, TransportError> {
        Ok(HttpCatalogSource {
            client: build_client(timeout)?,
            url: url.to_owned(),
        })
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_catalog(&self) -> Result<Vec<MovieRecord>, TransportError> {
        debug!("Fetching movie catalog from {}", self.url);
        let body = self.client.get(&self.url).send()?.error_for_status()?.bytes()?;
        parse_catalog(&body)
    }
}

#[derive(Debug)]
pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        Ok(HttpImageSource {
            client: build_client(timeout)?,
        })
    }
}

impl ImageSource for HttpImageSource {
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let body = self.client.get(url).send()?.error_for_status()?.bytes()?;
        Ok(body.to_vec())
    }
}
