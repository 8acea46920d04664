use chrono::Utc;
use log::{debug, error, info, warn};
use std::time::Duration;

use self::phase::*;
use crate::generator::{GeneratorEvent, QuestionGenerator};
use crate::output::GameOutput;
use crate::statistics::{GameResult, StatisticService};

mod phase;
mod question;
mod settings;

pub use self::question::Question;
pub use self::settings::{Settings, QUESTIONS_PER_GAME};

trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Idle,
    Loading,
    AwaitingAnswer,
    Feedback,
    Complete,
    Failed,
}

enum Phase<O> {
    Idle,
    Loading(LoadingState),
    Question(QuestionState<O>),
    Feedback(FeedbackState<O>),
    Results(ResultsState<O>),
    Failed(FailedState<O>),
}

impl<O: GameOutput> Phase<O> {
    fn get_state(&mut self) -> Option<&mut dyn State> {
        match self {
            Phase::Idle => None,
            Phase::Loading(s) => Some(s),
            Phase::Question(s) => Some(s),
            Phase::Feedback(s) => Some(s),
            Phase::Results(s) => Some(s),
            Phase::Failed(s) => Some(s),
        }
    }

    fn status(&self) -> Status {
        match self {
            Phase::Idle => Status::Idle,
            Phase::Loading(_) => Status::Loading,
            Phase::Question(_) => Status::AwaitingAnswer,
            Phase::Feedback(_) => Status::Feedback,
            Phase::Results(_) => Status::Complete,
            Phase::Failed(_) => Status::Failed,
        }
    }
}

/// One player's run through a fixed number of questions.
///
/// Driven by [`Quiz::tick`]: each tick collects finished background work from the generator,
/// then advances the current phase.
pub struct Quiz<O: GameOutput + Clone> {
    settings: Settings,
    current_phase: Phase<O>,
    current_index: usize,
    correct_count: u32,
    generator: QuestionGenerator,
    statistics: StatisticService,
    output: O,
}

impl<O: GameOutput + Clone> Quiz<O> {
    pub fn new(
        generator: QuestionGenerator,
        statistics: StatisticService,
        output: O,
        settings: Settings,
    ) -> Quiz<O> {
        Quiz {
            settings,
            current_phase: Phase::Idle,
            current_index: 0,
            correct_count: 0,
            generator,
            statistics,
            output,
        }
    }

    pub fn status(&self) -> Status {
        self.current_phase.status()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn total_questions(&self) -> usize {
        QUESTIONS_PER_GAME
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.current_phase {
            Phase::Question(state) => state.question(),
            _ => None,
        }
    }

    pub fn statistics(&self) -> &StatisticService {
        &self.statistics
    }

    /// Begins a new run, abandoning the current one if any.
    pub fn start(&mut self) {
        info!("Starting a new quiz");
        self.current_index = 0;
        self.correct_count = 0;
        self.generator.load_catalog();
        let state = LoadingState::new(LoadingTarget::Catalog, self.settings.load_timeout);
        self.set_current_phase(Phase::Loading(state));
    }

    /// Returns whether the answer was correct, or `None` when there is no question to answer.
    pub fn submit_answer(&mut self, answer: bool) -> Option<bool> {
        let is_correct = match &mut self.current_phase {
            Phase::Question(state) => state.answer(answer),
            _ => None,
        };
        let is_correct = match is_correct {
            Some(is_correct) => is_correct,
            None => {
                debug!("Ignoring answer, there is no active question");
                return None;
            }
        };

        if is_correct {
            self.correct_count += 1;
        }
        let state = FeedbackState::new(
            is_correct,
            self.settings.feedback_duration,
            self.output.clone(),
        );
        self.set_current_phase(Phase::Feedback(state));
        Some(is_correct)
    }

    pub fn tick(&mut self, dt: Duration) {
        while let Some(event) = self.generator.poll() {
            self.on_generator_event(event);
        }

        let is_over = match self.current_phase.get_state() {
            Some(state) => {
                state.on_tick(dt);
                state.is_over()
            }
            None => false,
        };
        if is_over {
            self.advance();
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        if let Some(state) = self.current_phase.get_state() {
            state.on_end();
        }

        self.current_phase = phase;
        debug!("Entering quiz phase: {:?}", self.current_phase.status());

        if let Some(state) = self.current_phase.get_state() {
            state.on_begin();
        }
    }

    fn on_generator_event(&mut self, event: GeneratorEvent) {
        let loading = match &self.current_phase {
            Phase::Loading(state) => Some(state.target),
            _ => None,
        };
        match (event, loading) {
            (GeneratorEvent::CatalogLoaded(_), Some(LoadingTarget::Catalog)) => {
                self.request_question();
            }
            (GeneratorEvent::CatalogFailed(e), Some(LoadingTarget::Catalog)) => {
                self.fail(e.to_string());
            }
            (GeneratorEvent::QuestionReady(question), Some(LoadingTarget::Question)) => {
                let state = QuestionState::new(
                    question,
                    self.current_index,
                    QUESTIONS_PER_GAME,
                    self.output.clone(),
                );
                self.set_current_phase(Phase::Question(state));
            }
            (event, _) => {
                debug!(
                    "Ignoring generator event during {:?}: {:?}",
                    self.status(),
                    event
                );
            }
        }
    }

    fn advance(&mut self) {
        match self.current_phase.status() {
            Status::Loading => {
                warn!("Gave up waiting for the question generator");
                self.generator.cancel();
                self.fail("Timed out while loading movies".to_owned());
            }
            Status::Feedback => {
                if self.current_index + 1 >= QUESTIONS_PER_GAME {
                    self.finish();
                } else {
                    self.current_index += 1;
                    self.request_question();
                }
            }
            _ => (),
        }
    }

    fn request_question(&mut self) {
        match self.generator.next_question() {
            Ok(()) => {
                let state = LoadingState::new(LoadingTarget::Question, self.settings.load_timeout);
                self.set_current_phase(Phase::Loading(state));
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn fail(&mut self, reason: String) {
        warn!("Quiz failed: {}", reason);
        let state = FailedState::new(reason, self.output.clone());
        self.set_current_phase(Phase::Failed(state));
    }

    fn finish(&mut self) {
        let result = GameResult::new(self.correct_count, QUESTIONS_PER_GAME as u32, Utc::now());
        info!("Quiz complete: {}/{}", result.correct, result.total);
        if let Err(e) = self.statistics.store_result(&result) {
            error!("{:#}", e);
        }
        let lifetime = self.statistics.lifetime();
        let state = ResultsState::new(result, lifetime, self.output.clone());
        self.set_current_phase(Phase::Results(state));
    }
}
