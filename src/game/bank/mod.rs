use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod question;
#[cfg(test)]
mod tests;

pub use self::question::{Question, RawQuestion};

const REQUIRED_COLUMNS: [&str; 2] = ["statement", "outcome"];

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("could not open question file {path:?}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("question file is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("could not parse question file")]
    Malformed(#[from] csv::Error),
}

#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn open(source: &Path) -> Result<QuestionBank, DataSourceError> {
        let file = File::open(source).map_err(|e| DataSourceError::Open {
            path: source.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<QuestionBank, DataSourceError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        // Column names match regardless of case and surrounding whitespace.
        let headers: csv::StringRecord = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        for &column in REQUIRED_COLUMNS.iter() {
            if !headers.iter().any(|h| h == column) {
                return Err(DataSourceError::MissingColumn(column));
            }
        }
        csv_reader.set_headers(headers);

        let mut questions = Vec::new();
        for row in csv_reader.deserialize() {
            let raw_question: RawQuestion = row?;
            questions.push(raw_question.into());
        }

        Ok(QuestionBank { questions })
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
