use thiserror::Error;

/// Failures reported by the catalog and image sources.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid CSV catalog: {0}")]
    Csv(#[from] csv::Error),

    /// The server answered but reported an error in its payload
    #[error("Server reported an error: {0}")]
    Remote(String),
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Could not load the movie catalog: {0}")]
    CatalogLoad(#[source] TransportError),

    #[error("The movie catalog is empty")]
    EmptyCatalog,

    /// Only ever logged, questions fall back to a placeholder image.
    #[error("Could not load the image for {title}: {source}")]
    ImageFetch {
        title: String,
        #[source]
        source: TransportError,
    },
}

