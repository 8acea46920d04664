/// A yes/no question about one movie's rating.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub image: Vec<u8>,
    pub text: String,
    pub correct_answer: bool,
}

impl Question {
    pub fn is_answer_correct(&self, answer: bool) -> bool {
        self.correct_answer == answer
    }
}
