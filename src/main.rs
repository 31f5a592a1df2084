use anyhow::*;
use std::env;
use std::io;
use std::path::Path;
use std::process;

mod commands;
mod game;

use crate::game::bank::QuestionBank;
use crate::game::Game;

const DEFAULT_QUESTION_FILE: &str = "truefalse.csv";

fn main() {
    pretty_env_logger::init();
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let path_string = args
        .next()
        .unwrap_or_else(|| DEFAULT_QUESTION_FILE.to_owned());
    let path = Path::new(&path_string);
    let bank = QuestionBank::open(path)
        .with_context(|| format!("Could not load questions from {:?}", path))?;
    if bank.is_empty() {
        log::warn!("Question file {:?} has no questions", path);
    } else {
        log::info!("Loaded {} questions from {:?}", bank.len(), path);
    }

    let mut game = match args.next() {
        Some(seed) => {
            let seed = seed
                .parse::<u64>()
                .context("Shuffle seed must be an integer")?;
            Game::new_seeded(bank, seed)
        }
        None => Game::new(bank),
    };

    println!("True or False Game");
    println!("Answer with true/false (or t/f). Other commands: next, score, restart, quit.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    commands::run(&mut game, stdin.lock(), stdout.lock())
}
