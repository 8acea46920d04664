use anyhow::{Context, Result};
use clap::Parser;
use directories_next::BaseDirs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "https://tv-api.com/en/API/Top250Movies/k_zcuw1ytf";
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Parser)]
#[command(name = "movie-quiz")]
#[command(about = "Guess whether top-rated movies beat a rating", long_about = None)]
pub struct Args {
    /// Endpoint serving the movie catalog as JSON
    #[arg(long, env = "MOVIE_QUIZ_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Read movies from a title,rating,image CSV file instead of the network
    #[arg(long)]
    pub catalog_file: Option<PathBuf>,

    /// Where lifetime statistics are kept (defaults to the user data directory)
    #[arg(long, env = "MOVIE_QUIZ_STATS_FILE")]
    pub stats_file: Option<PathBuf>,

    /// Seed for question generation, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print lifetime statistics and exit
    #[arg(long)]
    pub stats: bool,
}

impl Args {
    pub fn stats_path(&self) -> Result<PathBuf> {
        match &self.stats_file {
            Some(path) => Ok(path.clone()),
            None => default_stats_path(),
        }
    }
}

fn default_stats_path() -> Result<PathBuf> {
    let mut path = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    path.push("movie-quiz");
    path.push("statistics.json");
    Ok(path)
}
