use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::*;
use crate::catalog::mock::*;

fn wait_for_event(generator: &mut QuestionGenerator) -> GeneratorEvent {
    let start_time = Instant::now();
    loop {
        if let Some(event) = generator.poll() {
            return event;
        }
        if Instant::now().duration_since(start_time) > Duration::from_secs(5) {
            panic!("Timed out waiting for generator event");
        }
        thread::sleep(Duration::from_millis(5));
    }
}

fn wait_for_question(generator: &mut QuestionGenerator) -> Question {
    generator.next_question().unwrap();
    match wait_for_event(generator) {
        GeneratorEvent::QuestionReady(question) => question,
        other => panic!("Expected a question, got {:?}", other),
    }
}

fn loaded_generator(images: Arc<dyn ImageSource>, seed: u64) -> QuestionGenerator {
    let catalog = Arc::new(StaticCatalog::new(sample_movies()));
    let mut generator = QuestionGenerator::new(catalog, images).with_seed(seed);
    generator.load_catalog();
    match wait_for_event(&mut generator) {
        GeneratorEvent::CatalogLoaded(count) => assert_eq!(count, sample_movies().len()),
        other => panic!("Expected catalog to load, got {:?}", other),
    }
    generator
}

#[test]
fn loads_catalog() {
    let generator = loaded_generator(Arc::new(StaticImages), 1);
    assert_eq!(generator.movies(), sample_movies().as_slice());
}

#[test]
fn failed_load_reports_catalog_error() {
    let mut generator = QuestionGenerator::new(Arc::new(FailingCatalog), Arc::new(StaticImages));
    generator.load_catalog();
    match wait_for_event(&mut generator) {
        GeneratorEvent::CatalogFailed(QuizError::CatalogLoad(TransportError::Remote(message))) => {
            assert_eq!(message, "Invalid API key")
        }
        other => panic!("Expected catalog failure, got {:?}", other),
    }
    assert!(generator.movies().is_empty());
}

#[test]
fn empty_catalog_cannot_produce_questions() {
    let mut generator =
        QuestionGenerator::new(Arc::new(StaticCatalog::new(vec![])), Arc::new(StaticImages));
    assert!(matches!(
        generator.next_question(),
        Err(QuizError::EmptyCatalog)
    ));

    generator.load_catalog();
    assert!(matches!(
        wait_for_event(&mut generator),
        GeneratorEvent::CatalogLoaded(0)
    ));
    assert!(matches!(
        generator.next_question(),
        Err(QuizError::EmptyCatalog)
    ));
}

#[test]
fn prompt_uses_floored_goal_rating() {
    let movie = MovieRecord::new("The Godfather", "9.2", "https://example.com/godfather.jpg");
    assert_eq!(
        compose(&movie, 8.7),
        ("Is this movie's rating higher than 8?".to_owned(), true)
    );
    assert_eq!(
        compose(&movie, 9.5),
        ("Is this movie's rating higher than 9?".to_owned(), false)
    );
}

#[test]
fn equal_rating_is_not_higher() {
    let movie = MovieRecord::new("Even", "7.0", "https://example.com/even.jpg");
    assert_eq!(compose(&movie, 7.0).1, false);
}

#[test]
fn unrated_movie_is_never_higher() {
    let movie = MovieRecord::new("Unrated", "", "https://example.com/unrated.jpg");
    for goal in &[6.0, 7.5, 9.99] {
        assert_eq!(compose(&movie, *goal).1, false);
    }
}

#[test]
fn goal_rating_stays_in_range() {
    let mut generator = loaded_generator(Arc::new(StaticImages), 7);
    for _ in 0..50 {
        let question = wait_for_question(&mut generator);
        let threshold: u32 = question
            .text
            .trim_start_matches("Is this movie's rating higher than ")
            .trim_end_matches('?')
            .parse()
            .unwrap();
        assert!(threshold >= 6 && threshold <= 9);
    }
}

#[test]
fn seeded_generators_are_reproducible() {
    let mut first = loaded_generator(Arc::new(StaticImages), 42);
    let mut second = loaded_generator(Arc::new(StaticImages), 42);
    for _ in 0..20 {
        assert_eq!(
            wait_for_question(&mut first),
            wait_for_question(&mut second)
        );
    }
}

#[test]
fn uses_fetched_image() {
    let mut generator = loaded_generator(Arc::new(StaticImages), 3);
    let question = wait_for_question(&mut generator);
    assert_eq!(question.image, STATIC_IMAGE);
}

#[test]
fn failed_images_fall_back_to_placeholder() {
    let mut generator = loaded_generator(Arc::new(FailingImages), 3);
    for _ in 0..10 {
        let question = wait_for_question(&mut generator);
        assert!(!question.image.is_empty());
        assert!(question.image.starts_with(b"<svg"));
    }
}

#[test]
fn reload_drops_stale_catalog() {
    let old = vec![MovieRecord::new("Old", "5.0", "https://example.com/old.jpg")];
    let new = vec![MovieRecord::new("New", "9.0", "https://example.com/new.jpg")];
    let catalog = Arc::new(ScriptedCatalog::new(vec![
        (Duration::from_millis(300), Some(old)),
        (Duration::from_millis(0), Some(new.clone())),
    ]));
    let mut generator = QuestionGenerator::new(catalog, Arc::new(StaticImages));
    generator.load_catalog();
    thread::sleep(Duration::from_millis(100));
    generator.load_catalog();

    assert!(matches!(
        wait_for_event(&mut generator),
        GeneratorEvent::CatalogLoaded(1)
    ));
    assert_eq!(generator.movies(), new.as_slice());

    thread::sleep(Duration::from_millis(500));
    assert!(generator.poll().is_none());
    assert_eq!(generator.movies(), new.as_slice());
}

#[test]
fn cancel_drops_pending_question() {
    let mut generator = loaded_generator(Arc::new(StaticImages), 5);
    generator.next_question().unwrap();
    generator.cancel();
    thread::sleep(Duration::from_millis(200));
    assert!(generator.poll().is_none());
}
