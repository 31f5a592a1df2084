pub mod bank;
pub mod session;

use self::bank::{Question, QuestionBank};
use self::session::{QuizSession, SessionError};

/// The one state object owned by the interaction loop: the question bank
/// loaded at startup plus the session currently playing through it.
pub struct Game {
    bank: QuestionBank,
    session: QuizSession,
}

impl Game {
    pub fn new(bank: QuestionBank) -> Game {
        let session = QuizSession::start(&bank);
        Game { bank, session }
    }

    pub fn new_seeded(bank: QuestionBank, seed: u64) -> Game {
        let session = QuizSession::start_seeded(&bank, seed);
        Game { bank, session }
    }

    pub fn current_question(&self) -> Result<&Question, SessionError> {
        self.session.current_question(&self.bank)
    }

    pub fn submit_answer(&mut self, choice: bool) -> Result<(), SessionError> {
        self.session.submit_answer(&self.bank, choice)
    }

    pub fn advance(&mut self) -> Result<(), SessionError> {
        self.session.advance()
    }

    pub fn restart(&mut self) {
        self.session.restart(&self.bank);
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn is_answered(&self) -> bool {
        self.session.is_answered()
    }

    pub fn was_last_correct(&self) -> bool {
        self.session.was_last_correct()
    }

    pub fn get_score(&self) -> usize {
        self.session.get_score()
    }

    pub fn get_position(&self) -> usize {
        self.session.get_position()
    }

    pub fn get_question_count(&self) -> usize {
        self.session.get_question_count()
    }
}
