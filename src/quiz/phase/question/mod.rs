use log::debug;
use std::time::Duration;

use crate::output::{Event, GameOutput};
use crate::quiz::{Question, State};


pub struct QuestionState<O> {
    question: Option<Question>,
    index: usize,
    total: usize,
    output: O,
}

impl<O: GameOutput> QuestionState<O> {
    pub fn new(question: Question, index: usize, total: usize, output: O) -> Self {
        QuestionState {
            question: Some(question),
            index,
            total,
            output,
        }
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Scores `answer` against the question. The question is consumed, so only the first
    /// answer gets a verdict.
    pub fn answer(&mut self, answer: bool) -> Option<bool> {
        match self.question.take() {
            Some(question) => Some(question.is_answer_correct(answer)),
            None => {
                debug!("Question {} was already answered", self.index + 1);
                None
            }
        }
    }
}

impl<O: GameOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        if let Some(question) = &self.question {
            self.output.say(&Event::QuestionReady(
                question.clone(),
                self.index,
                self.total,
            ));
        }
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
