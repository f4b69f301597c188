use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::models::{ApplicationId, InteractionId, MessageId};

/// Endpoint paths relative to the API base. Tokens and ids are inserted as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route<'a> {
    InteractionCallback { interaction_id: InteractionId, token: &'a str },
    OriginalResponse { application_id: ApplicationId, token: &'a str },
    Followups { application_id: ApplicationId, token: &'a str },
    Followup { application_id: ApplicationId, token: &'a str, message_id: MessageId },
}

impl Display for Route<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Route::InteractionCallback { interaction_id, token } => {
                write!(f, "interactions/{}/{}/callback", interaction_id, token)
            }
            Route::OriginalResponse { application_id, token } => {
                write!(f, "webhooks/{}/{}/messages/@original", application_id, token)
            }
            Route::Followups { application_id, token } => {
                write!(f, "webhooks/{}/{}", application_id, token)
            }
            Route::Followup { application_id, token, message_id } => {
                write!(f, "webhooks/{}/{}/messages/{}", application_id, token, message_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "aW50ZXJhY3Rpb246MTIzNDU2";

    #[test]
    fn renders_endpoint_paths() {
        let application_id = ApplicationId(796400057835700234);

        assert_eq!(
            Route::InteractionCallback { interaction_id: InteractionId(1100000000000000001), token: TOKEN }
                .to_string(),
            "interactions/1100000000000000001/aW50ZXJhY3Rpb246MTIzNDU2/callback"
        );
        assert_eq!(
            Route::OriginalResponse { application_id, token: TOKEN }.to_string(),
            "webhooks/796400057835700234/aW50ZXJhY3Rpb246MTIzNDU2/messages/@original"
        );
        assert_eq!(
            Route::Followups { application_id, token: TOKEN }.to_string(),
            "webhooks/796400057835700234/aW50ZXJhY3Rpb246MTIzNDU2"
        );
        assert_eq!(
            Route::Followup { application_id, token: TOKEN, message_id: MessageId(42) }.to_string(),
            "webhooks/796400057835700234/aW50ZXJhY3Rpb246MTIzNDU2/messages/42"
        );
    }
}
