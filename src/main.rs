use std::{
    env,
    error::Error as StdError,
    fmt::{Debug, Display, Formatter},
    path::Path,
};

use dotenv::dotenv;
use interaction_rs::{
    models::{
        ApplicationId, EditInteractionResponseData, InteractionId, InteractionResponse,
        InteractionResponseData, MessageId,
    },
    Client, File,
};
use log::{info, warn};

const USAGE: &str = "usage: interaction-rs <respond <content> | defer | original | edit <content> | \
                     delete | followup <content> [file...] | edit-followup <message_id> <content> | \
                     delete-followup <message_id>>";

struct Usage;

impl Debug for Usage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(USAGE)
    }
}

impl Display for Usage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(USAGE)
    }
}

impl StdError for Usage {}

type Error = Box<dyn StdError + Send + Sync>;

async fn read_file(path: &str) -> Result<File, Error> {
    let name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string());

    Ok(File::new(name, tokio::fs::read(path).await?))
}

fn env_id(name: &str) -> Result<u64, Error> {
    Ok(env::var(name)?.parse::<u64>()?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    if dotenv().is_err() {
        warn!("No .env file found, reading configuration from the environment only");
    }

    let mut args = env::args().skip(1);
    let command = args.next().ok_or(Usage)?;

    let client = Client::from_env()?;
    let token = env::var("INTERACTION_TOKEN")?;

    if command == "respond" || command == "defer" {
        let interaction_id = InteractionId(env_id("INTERACTION_ID")?);

        let mut response = if command == "respond" {
            let content = args.next().ok_or(Usage)?;

            InteractionResponse::message(InteractionResponseData::new().content(content))
        } else {
            InteractionResponse::deferred(false)
        };

        client.respond_interaction(interaction_id, &token, &mut response).await?;

        info!("Responded to interaction {}", interaction_id);

        return Ok(());
    }

    let application_id = ApplicationId(env_id("APPLICATION_ID")?);

    match command.as_str() {
        "original" => {
            let message = client.interaction_response(application_id, &token).await?;

            info!("Original response {}: {}", message.id, message.content);
        }

        "edit" => {
            let content = args.next().ok_or(Usage)?;
            let mut data = EditInteractionResponseData::new().content(content);

            let message =
                client.edit_interaction_response(application_id, &token, &mut data).await?;

            info!("Edited original response {}", message.id);
        }

        "delete" => {
            client.delete_interaction_response(application_id, &token).await?;

            info!("Deleted original response");
        }

        "followup" => {
            let content = args.next().ok_or(Usage)?;
            let mut data = InteractionResponseData::new().content(content);

            for path in args {
                data = data.file(read_file(&path).await?);
            }

            let message = client.follow_up_interaction(application_id, &token, &mut data).await?;

            info!("Sent follow-up {}", message.id);
        }

        "edit-followup" => {
            let message_id = MessageId(args.next().ok_or(Usage)?.parse::<u64>()?);
            let content = args.next().ok_or(Usage)?;
            let mut data = EditInteractionResponseData::new().content(content);

            let message = client
                .edit_interaction_followup(application_id, message_id, &token, &mut data)
                .await?;

            info!("Edited follow-up {}", message.id);
        }

        "delete-followup" => {
            let message_id = MessageId(args.next().ok_or(Usage)?.parse::<u64>()?);

            client.delete_interaction_followup(application_id, message_id, &token).await?;

            info!("Deleted follow-up {}", message_id);
        }

        _ => return Err(Box::new(Usage) as Error),
    }

    Ok(())
}
