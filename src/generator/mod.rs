use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::catalog::{CatalogSource, ImageSource, MovieRecord};
use crate::error::{QuizError, TransportError};
use crate::quiz::Question;

mod placeholder;
#[cfg(test)]
mod tests;

const GOAL_RATING_MIN: f32 = 6.0;
const GOAL_RATING_MAX: f32 = 10.0;

#[derive(Debug)]
pub enum GeneratorEvent {
    CatalogLoaded(usize),
    CatalogFailed(QuizError),
    QuestionReady(Question),
}

enum Outcome {
    Catalog(Result<Vec<MovieRecord>, TransportError>),
    Question(Question),
}

/// Turns a movie catalog into rating questions.
///
/// Catalog loads and image fetches run on worker threads. Their outcomes are tagged with the
/// generation that requested them and collected with [`QuestionGenerator::poll`]; anything
/// tagged with an older generation is dropped.
pub struct QuestionGenerator {
    catalog_source: Arc<dyn CatalogSource>,
    image_source: Arc<dyn ImageSource>,
    movies: Vec<MovieRecord>,
    rng: Box<dyn RngCore + Send>,
    generation: u64,
    sender: Sender<(u64, Outcome)>,
    receiver: Receiver<(u64, Outcome)>,
}

impl QuestionGenerator {
    pub fn new(catalog_source: Arc<dyn CatalogSource>, image_source: Arc<dyn ImageSource>) -> Self {
        let (sender, receiver) = channel();
        QuestionGenerator {
            catalog_source,
            image_source,
            movies: Vec::new(),
            rng: Box::new(StdRng::from_entropy()),
            generation: 0,
            sender,
            receiver,
        }
    }

    pub fn with_rng<R: RngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Invalidates every outstanding request.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn load_catalog(&mut self) {
        self.cancel();
        let generation = self.generation;
        let source = self.catalog_source.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = source.fetch_catalog();
            sender.send((generation, Outcome::Catalog(result))).ok();
        });
    }

    pub fn next_question(&mut self) -> Result<(), QuizError> {
        if self.movies.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }

        let index = self.rng.gen_range(0, self.movies.len());
        let goal_rating: f32 = self.rng.gen_range(GOAL_RATING_MIN, GOAL_RATING_MAX);
        let movie = self.movies[index].clone();
        let (text, correct_answer) = compose(&movie, goal_rating);

        let generation = self.generation;
        let image_source = self.image_source.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let image = fetch_image(image_source.as_ref(), &movie);
            let question = Question {
                image,
                text,
                correct_answer,
            };
            sender.send((generation, Outcome::Question(question))).ok();
        });
        Ok(())
    }

    pub fn poll(&mut self) -> Option<GeneratorEvent> {
        while let Ok((generation, outcome)) = self.receiver.try_recv() {
            if generation != self.generation {
                debug!(
                    "Dropping outcome from generation {} (current is {})",
                    generation, self.generation
                );
                continue;
            }
            let event = match outcome {
                Outcome::Catalog(Ok(movies)) => {
                    info!("Loaded catalog of {} movies", movies.len());
                    self.movies = movies;
                    GeneratorEvent::CatalogLoaded(self.movies.len())
                }
                Outcome::Catalog(Err(e)) => GeneratorEvent::CatalogFailed(QuizError::CatalogLoad(e)),
                Outcome::Question(question) => GeneratorEvent::QuestionReady(question),
            };
            return Some(event);
        }
        None
    }
}

fn compose(movie: &MovieRecord, goal_rating: f32) -> (String, bool) {
    let text = format!(
        "Is this movie's rating higher than {}?",
        goal_rating.floor() as u32
    );
    let correct_answer = movie.rating_value() > goal_rating;
    (text, correct_answer)
}

fn fetch_image(image_source: &dyn ImageSource, movie: &MovieRecord) -> Vec<u8> {
    match image_source.fetch_image(&movie.resized_image_url()) {
        Ok(image) if !image.is_empty() => image,
        Ok(_) => {
            warn!("Empty image for {}, using a placeholder", movie.title);
            placeholder::render(&movie.title)
        }
        Err(e) => {
            let error = QuizError::ImageFetch {
                title: movie.title.clone(),
                source: e,
            };
            warn!("{}, using a placeholder", error);
            placeholder::render(&movie.title)
        }
    }
}
