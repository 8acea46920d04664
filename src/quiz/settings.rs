use std::time::Duration;

pub const QUESTIONS_PER_GAME: usize = 10;

#[derive(Clone, Debug)]
pub struct Settings {
    pub feedback_duration: Duration,
    pub load_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            feedback_duration: Duration::from_secs(1),
            load_timeout: Duration::from_secs(30),
        }
    }
}
