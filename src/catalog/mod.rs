use serde::Deserialize;

use crate::error::TransportError;

mod file;
mod http;
#[cfg(test)]
pub mod mock;

pub use self::file::FileCatalogSource;
pub use self::http::{HttpCatalogSource, HttpImageSource};

const RESIZED_IMAGE_SUFFIX: &str = "._V0_UX600_.jpg";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MovieRecord {
    #[serde(rename = "fullTitle", alias = "title")]
    pub title: String,
    #[serde(rename = "imDbRating", alias = "rating", default)]
    pub rating: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

impl MovieRecord {
    pub fn new(title: &str, rating: &str, image_url: &str) -> Self {
        MovieRecord {
            title: title.to_owned(),
            rating: rating.to_owned(),
            image_url: image_url.to_owned(),
        }
    }

    /// Ratings that don't parse count as zero.
    pub fn rating_value(&self) -> f32 {
        self.rating.trim().parse().unwrap_or(0.0)
    }

    /// Poster URLs carry their size parameters after the first `._`, swap them for a
    /// fixed-width rendition.
    pub fn resized_image_url(&self) -> String {
        match self.image_url.find("._") {
            Some(index) => format!("{}{}", &self.image_url[..index], RESIZED_IMAGE_SUFFIX),
            None => self.image_url.clone(),
        }
    }
}

pub trait CatalogSource: Send + Sync {
    fn fetch_catalog(&self) -> Result<Vec<MovieRecord>, TransportError>;
}

pub trait ImageSource: Send + Sync {
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}
