use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Event, GameOutput};

#[derive(Clone, Default)]
pub struct MockGameOutput {
    events: Arc<RwLock<Vec<Event>>>,
}

impl MockGameOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Event> {
        std::mem::replace(&mut *self.events.write(), Vec::new())
    }

    pub fn contains_event(&self, event: &Event) -> bool {
        self.events.read().iter().any(|e| e == event)
    }
}

impl GameOutput for MockGameOutput {
    fn say(&self, event: &Event) {
        self.events.write().push(event.clone());
    }
}
