use crate::quiz::Question;
use crate::statistics::{GameResult, LifetimeStats};

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    QuestionReady(Question, usize, usize),
    AnswerScored(bool),
    SessionComplete(GameResult, LifetimeStats),
    LoadFailed(String),
}

pub trait GameOutput {
    fn say(&self, event: &Event);
}
