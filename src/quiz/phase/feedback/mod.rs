use std::time::Duration;

use crate::output::{Event, GameOutput};
use crate::quiz::State;


/// Shows whether the last answer was right before the quiz moves on.
#[derive(Debug)]
pub struct FeedbackState<O> {
    is_correct: bool,
    time_elapsed: Duration,
    time_to_wait: Duration,
    output: O,
}

impl<O: GameOutput> FeedbackState<O> {
    pub fn new(is_correct: bool, duration: Duration, output: O) -> Self {
        FeedbackState {
            is_correct,
            time_elapsed: Duration::default(),
            time_to_wait: duration,
            output,
        }
    }
}

impl<O: GameOutput> State for FeedbackState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Event::AnswerScored(self.is_correct));
    }

    fn on_tick(&mut self, dt: Duration) {
        self.time_elapsed += dt;
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_to_wait
    }
}
