use std::time::Duration;

use crate::output::{Event, GameOutput};
use crate::quiz::State;
use crate::statistics::{GameResult, LifetimeStats};


pub struct ResultsState<O> {
    result: GameResult,
    lifetime: LifetimeStats,
    output: O,
}

impl<O: GameOutput> ResultsState<O> {
    pub fn new(result: GameResult, lifetime: LifetimeStats, output: O) -> Self {
        ResultsState {
            result,
            lifetime,
            output,
        }
    }
}

impl<O: GameOutput> State for ResultsState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Event::SessionComplete(
            self.result.clone(),
            self.lifetime.clone(),
        ));
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
