use crate::output::{Event, GameOutput};

/// Prints events to stdout.
#[derive(Clone, Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput
    }

    fn interpret_event(event: &Event) -> String {
        use Event::*;
        match event {
            QuestionReady(question, index, total) => format!(
                "\n🎬 Question {}/{} (poster: {} bytes)\n{}\n[y]es / [n]o",
                index + 1,
                total,
                question.image.len(),
                question.text
            ),
            AnswerScored(true) => "✅ Correct!".into(),
            AnswerScored(false) => "❌ Wrong!".into(),
            SessionComplete(result, lifetime) => format!(
                "\nThis round is over!\nYour result: {}/{}\nGames played: {}\nBest game: {}/{} ({})\nAverage accuracy: {:.2}%\n\n[r] Play again / [q] Quit",
                result.correct,
                result.total,
                lifetime.games_count,
                lifetime.best_game.correct,
                lifetime.best_game.total,
                lifetime.best_game.date.format("%d.%m.%y %H:%M"),
                lifetime.total_accuracy
            ),
            LoadFailed(reason) => format!(
                "\nSomething went wrong 😞\n{}\n\n[r] Try again / [q] Quit",
                reason
            ),
        }
    }
}

impl GameOutput for ConsoleOutput {
    fn say(&self, event: &Event) {
        println!("{}", Self::interpret_event(event));
    }
}
