use serde::de;
use serde::{Deserialize, Deserializer};

fn bool_from_token<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match String::deserialize(deserializer)?
        .trim()
        .to_lowercase()
        .as_ref()
    {
        "true" | "t" | "yes" | "1" => Ok(true),
        "false" | "f" | "no" | "0" => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"one of true/t/yes/1 or false/f/no/0",
        )),
    }
}

#[derive(Debug, Deserialize)]
pub struct RawQuestion {
    pub statement: String,
    #[serde(deserialize_with = "bool_from_token")]
    pub outcome: bool,
    pub context: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Question {
    pub statement: String,
    pub outcome: bool,
    pub context: String,
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        Question {
            statement: raw_question.statement,
            outcome: raw_question.outcome,
            context: raw_question.context.unwrap_or_default(),
        }
    }
}
