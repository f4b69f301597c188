use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StringChoice {
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IntegerChoice {
    pub name: String,
    pub value: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NumberChoice {
    pub name: String,
    pub value: f64,
}

/// Results for an autocomplete interaction. All choices share one value type.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum AutocompleteChoices {
    String(Vec<StringChoice>),
    Integer(Vec<IntegerChoice>),
    Number(Vec<NumberChoice>),
}

impl AutocompleteChoices {
    pub(crate) fn len(&self) -> usize {
        match self {
            AutocompleteChoices::String(choices) => choices.len(),
            AutocompleteChoices::Integer(choices) => choices.len(),
            AutocompleteChoices::Number(choices) => choices.len(),
        }
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        match self {
            AutocompleteChoices::String(choices) => choices.truncate(len),
            AutocompleteChoices::Integer(choices) => choices.truncate(len),
            AutocompleteChoices::Number(choices) => choices.truncate(len),
        }
    }
}

impl From<Vec<StringChoice>> for AutocompleteChoices {
    fn from(choices: Vec<StringChoice>) -> Self {
        AutocompleteChoices::String(choices)
    }
}

impl From<Vec<IntegerChoice>> for AutocompleteChoices {
    fn from(choices: Vec<IntegerChoice>) -> Self {
        AutocompleteChoices::Integer(choices)
    }
}

impl From<Vec<NumberChoice>> for AutocompleteChoices {
    fn from(choices: Vec<NumberChoice>) -> Self {
        AutocompleteChoices::Number(choices)
    }
}
