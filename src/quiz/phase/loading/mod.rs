use std::time::Duration;

use crate::quiz::State;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadingTarget {
    Catalog,
    Question,
}

/// Waits for the generator. Running past the time limit counts as a failure.
#[derive(Debug)]
pub struct LoadingState {
    pub target: LoadingTarget,
    time_elapsed: Duration,
    time_limit: Duration,
}

impl LoadingState {
    pub fn new(target: LoadingTarget, time_limit: Duration) -> Self {
        LoadingState {
            target,
            time_elapsed: Duration::default(),
            time_limit,
        }
    }
}

impl State for LoadingState {
    fn on_begin(&mut self) {}

    fn on_tick(&mut self, dt: Duration) {
        self.time_elapsed += dt;
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_limit
    }
}
