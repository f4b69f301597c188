use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::models::{allowed_mentions::MentionError, embed::EmbedError};

#[derive(Debug)]
pub enum Error {
    /// The message would have no content, embeds or files.
    EmptyPayload,
    MentionPolicy(MentionError),
    EmbedValidation { index: usize, source: EmbedError },
    EmbedBudgetExceeded { count: usize, max: usize, label: &'static str },
    Encode(serde_json::Error),
    Decode(serde_json::Error),
    Transport(postman::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::EmptyPayload => f.write_str("message has no content, embeds or files"),
            Error::MentionPolicy(e) => write!(f, "allowed mentions error: {}", e),
            Error::EmbedValidation { index, source } => {
                write!(f, "embed error at {}: {}", index, source)
            }
            Error::EmbedBudgetExceeded { count, max, label } => {
                write!(f, "{} is {}, over the limit of {}", label, count, max)
            }
            Error::Encode(e) => write!(f, "failed to encode payload: {}", e),
            Error::Decode(e) => write!(f, "failed to decode response: {}", e),
            Error::Transport(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MentionPolicy(e) => Some(e),
            Error::EmbedValidation { source, .. } => Some(source),
            Error::Encode(e) | Error::Decode(e) => Some(e),
            Error::Transport(e) => Some(e),
            Error::EmptyPayload | Error::EmbedBudgetExceeded { .. } => None,
        }
    }
}

impl From<postman::Error> for Error {
    fn from(e: postman::Error) -> Self {
        Error::Transport(e)
    }
}
