use std::time::Duration;

use crate::output::{Event, GameOutput};
use crate::quiz::State;


pub struct FailedState<O> {
    reason: String,
    output: O,
}

impl<O: GameOutput> FailedState<O> {
    pub fn new(reason: String, output: O) -> Self {
        FailedState { reason, output }
    }
}

impl<O: GameOutput> State for FailedState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Event::LoadFailed(self.reason.clone()));
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
