use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::game::session::SessionError;
use crate::game::Game;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Answer(bool),
    Next,
    Score,
    Restart,
    Quit,
}

pub fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_lowercase().as_ref() {
        "true" | "t" => Some(Command::Answer(true)),
        "false" | "f" => Some(Command::Answer(false)),
        "" | "next" | "n" => Some(Command::Next),
        "score" => Some(Command::Score),
        "restart" => Some(Command::Restart),
        "quit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

pub fn run(game: &mut Game, input: impl BufRead, mut output: impl Write) -> Result<()> {
    print_state(game, &mut output)?;
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Answer(choice)) => answer(game, choice, &mut output)?,
            Some(Command::Next) => next(game, &mut output)?,
            Some(Command::Score) => writeln!(output, "Score: {}", game.get_score())?,
            Some(Command::Restart) => {
                game.restart();
                writeln!(output, "Starting over with a fresh shuffle.")?;
                print_state(game, &mut output)?;
            }
            Some(Command::Quit) => return Ok(()),
            None => writeln!(
                output,
                "Commands: true (t), false (f), next, score, restart, quit"
            )?,
        }
    }
    Ok(())
}

fn answer(game: &mut Game, choice: bool, output: &mut impl Write) -> Result<()> {
    if game.is_complete() {
        writeln!(output, "The quiz is over. Type restart to play again.")?;
        return Ok(());
    }
    if game.is_answered() {
        writeln!(output, "Already answered. Press Enter for the next question.")?;
        return Ok(());
    }
    game.submit_answer(choice)
        .context("Could not submit answer")?;

    let question = game.current_question()?;
    if game.was_last_correct() {
        writeln!(output, "Correct!")?;
    } else {
        writeln!(
            output,
            "Incorrect. The correct answer is {}.",
            outcome_label(question.outcome)
        )?;
    }
    if !question.context.trim().is_empty() {
        writeln!(output, "Context: {}", question.context)?;
    }
    writeln!(output, "Press Enter for the next question.")?;
    Ok(())
}

fn next(game: &mut Game, output: &mut impl Write) -> Result<()> {
    match game.advance() {
        Ok(()) => print_state(game, output),
        Err(SessionError::QuestionNotAnswered) => {
            writeln!(output, "Answer the current question first: true or false?")?;
            Ok(())
        }
        Err(SessionError::QuizComplete) => {
            writeln!(output, "Type restart to play again, or quit to exit.")?;
            Ok(())
        }
    }
}

fn print_state(game: &Game, output: &mut impl Write) -> Result<()> {
    if game.is_complete() {
        writeln!(
            output,
            "🎉 Quiz complete! Final score: {}/{}",
            game.get_score(),
            game.get_question_count()
        )?;
        writeln!(output, "Type restart to play again, or quit to exit.")?;
        return Ok(());
    }
    let question = game.current_question()?;
    writeln!(output)?;
    writeln!(
        output,
        "Question {} of {} (score: {})",
        game.get_position() + 1,
        game.get_question_count(),
        game.get_score()
    )?;
    writeln!(output, "{}", question.statement)?;
    writeln!(output, "True or false?")?;
    Ok(())
}

fn outcome_label(outcome: bool) -> &'static str {
    if outcome {
        "True"
    } else {
        "False"
    }
}
