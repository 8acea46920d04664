use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;

pub mod storage;

pub use self::storage::{DataSource, JsonFileStorage, MemoryStorage, StatisticKey, Storage};


#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameResult {
    pub correct: u32,
    pub total: u32,
    pub date: DateTime<Utc>,
}

impl GameResult {
    pub fn new(correct: u32, total: u32, date: DateTime<Utc>) -> Self {
        GameResult {
            correct,
            total,
            date,
        }
    }

    /// Only the number of correct answers counts, a tie is not better.
    pub fn is_better_than(&self, other: &GameResult) -> bool {
        self.correct > other.correct
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LifetimeStats {
    pub games_count: u32,
    pub best_game: GameResult,
    pub total_accuracy: f64,
}

/// Lifetime aggregates across every completed game.
///
/// Assumes a single writer: two processes sharing one store can lose updates.
pub struct StatisticService {
    data_source: DataSource,
}

impl StatisticService {
    pub fn new(data_source: DataSource) -> Self {
        StatisticService { data_source }
    }

    pub fn games_count(&self) -> u32 {
        self.data_source.get(StatisticKey::GamesCount, 0)
    }

    pub fn best_game(&self) -> GameResult {
        GameResult {
            correct: self.data_source.get(StatisticKey::BestGameCorrect, 0),
            total: self.data_source.get(StatisticKey::BestGameTotal, 0),
            date: self
                .data_source
                .get(StatisticKey::BestGameDate, DateTime::<Utc>::default()),
        }
    }

    pub fn total_correct_answers(&self) -> u64 {
        self.data_source.get(StatisticKey::TotalCorrectAnswers, 0)
    }

    pub fn total_questions_asked(&self) -> u64 {
        self.data_source.get(StatisticKey::TotalQuestionsAsked, 0)
    }

    /// Percentage of correct answers over every game, 0 before the first game.
    pub fn total_accuracy(&self) -> f64 {
        let total = self.total_questions_asked();
        if total == 0 {
            return 0.0;
        }
        100.0 * self.total_correct_answers() as f64 / total as f64
    }

    pub fn lifetime(&self) -> LifetimeStats {
        LifetimeStats {
            games_count: self.games_count(),
            best_game: self.best_game(),
            total_accuracy: self.total_accuracy(),
        }
    }

    pub fn store(&mut self, correct: u32, total: u32) -> Result<()> {
        self.store_result(&GameResult::new(correct, total, Utc::now()))
    }

    pub fn store_result(&mut self, current: &GameResult) -> Result<()> {
        let total_correct = self.total_correct_answers() + u64::from(current.correct);
        let total_asked = self.total_questions_asked() + u64::from(current.total);
        let games_count = self.games_count() + 1;
        let best_game = self.best_game();

        self.data_source
            .set(StatisticKey::TotalCorrectAnswers, &total_correct)?;
        self.data_source
            .set(StatisticKey::TotalQuestionsAsked, &total_asked)?;
        self.data_source.set(StatisticKey::GamesCount, &games_count)?;

        if current.is_better_than(&best_game) {
            info!("New best game: {}/{}", current.correct, current.total);
            self.data_source
                .set(StatisticKey::BestGameCorrect, &current.correct)?;
            self.data_source
                .set(StatisticKey::BestGameTotal, &current.total)?;
            self.data_source
                .set(StatisticKey::BestGameDate, &current.date)?;
        }

        self.data_source
            .commit()
            .context("Could not save statistics")
    }
}
