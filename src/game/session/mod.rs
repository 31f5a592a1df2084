use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::game::bank::{Question, QuestionBank};


#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SessionError {
    #[error("the quiz is complete, there is no current question")]
    QuizComplete,
    #[error("the current question has not been answered yet")]
    QuestionNotAnswered,
}

/// One pass over the question bank in shuffled order.
#[derive(Debug)]
pub struct QuizSession {
    order: Vec<usize>,
    cursor: usize,
    score: usize,
    answered: bool,
    last_correct: bool,
}

impl QuizSession {
    pub fn start(bank: &QuestionBank) -> QuizSession {
        Self::start_with_rng(bank, &mut rand::thread_rng())
    }

    pub fn start_seeded(bank: &QuestionBank, seed: u64) -> QuizSession {
        Self::start_with_rng(bank, &mut StdRng::seed_from_u64(seed))
    }

    fn start_with_rng(bank: &QuestionBank, rng: &mut impl Rng) -> QuizSession {
        let mut order: Vec<usize> = (0..bank.len()).collect();
        order.shuffle(rng);
        QuizSession {
            order,
            cursor: 0,
            score: 0,
            answered: false,
            last_correct: false,
        }
    }

    #[cfg(test)]
    fn with_order(order: Vec<usize>) -> QuizSession {
        QuizSession {
            order,
            cursor: 0,
            score: 0,
            answered: false,
            last_correct: false,
        }
    }

    pub fn restart(&mut self, bank: &QuestionBank) {
        *self = QuizSession::start(bank);
    }

    pub fn current_question<'a>(
        &self,
        bank: &'a QuestionBank,
    ) -> Result<&'a Question, SessionError> {
        if self.is_complete() {
            return Err(SessionError::QuizComplete);
        }
        Ok(&bank.get_questions()[self.order[self.cursor]])
    }

    pub fn submit_answer(
        &mut self,
        bank: &QuestionBank,
        choice: bool,
    ) -> Result<(), SessionError> {
        let outcome = self.current_question(bank)?.outcome;
        if self.answered {
            return Ok(());
        }
        self.answered = true;
        self.last_correct = choice == outcome;
        if self.last_correct {
            self.score += 1;
        }
        Ok(())
    }

    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::QuizComplete);
        }
        if !self.answered {
            return Err(SessionError::QuestionNotAnswered);
        }
        self.cursor += 1;
        self.answered = false;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.order.len()
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn was_last_correct(&self) -> bool {
        self.last_correct
    }

    pub fn get_score(&self) -> usize {
        self.score
    }

    pub fn get_position(&self) -> usize {
        self.cursor
    }

    pub fn get_question_count(&self) -> usize {
        self.order.len()
    }
}
