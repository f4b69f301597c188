use log::debug;
use postman::File;

use crate::{
    consts::EMBED_TOTAL_MAX,
    errors::Error,
    models::{AllowedMentions, Embed, Nullable},
};

pub const EMBED_TOTAL_LABEL: &str = "sum of all text in embeds";

fn has_text(content: &Nullable<String>) -> bool {
    content.value().map_or(false, |content| !content.is_empty())
}

/// A new message needs content, an embed or a file.
pub fn check_new_message(
    content: &Nullable<String>,
    embeds: Option<&[Embed]>,
    files: &[File],
) -> Result<(), Error> {
    if !has_text(content) && embeds.map_or(true, |embeds| embeds.is_empty()) && files.is_empty() {
        debug!("rejecting new message with no content, embeds or files");

        Err(Error::EmptyPayload)
    } else {
        Ok(())
    }
}

/// An update only fails when it clears content and embeds and uploads nothing.
/// Omitted fields are untouched on the message and never count as empty.
pub fn check_update_message(
    content: &Nullable<String>,
    embeds: Option<&[Embed]>,
    files: &[File],
) -> Result<(), Error> {
    if content.is_null() && embeds.map_or(false, |embeds| embeds.is_empty()) && files.is_empty() {
        debug!("rejecting update that clears content and embeds");

        Err(Error::EmptyPayload)
    } else {
        Ok(())
    }
}

pub fn check_allowed_mentions(allowed_mentions: Option<&AllowedMentions>) -> Result<(), Error> {
    match allowed_mentions {
        Some(allowed_mentions) => allowed_mentions.validate().map_err(Error::MentionPolicy),
        None => Ok(()),
    }
}

/// Validates each embed in order and the combined length of all of them.
///
/// On success every entry is replaced with its normalized form. On failure the
/// list is left as it was.
pub fn validate_embeds(embeds: Option<&mut Vec<Embed>>) -> Result<(), Error> {
    let embeds = match embeds {
        Some(embeds) => embeds,
        None => return Ok(()),
    };

    let mut normalized = Vec::with_capacity(embeds.len());
    let mut sum = 0;

    for (index, embed) in embeds.iter().enumerate() {
        let embed = embed
            .clone()
            .validated()
            .map_err(|source| Error::EmbedValidation { index, source })?;

        sum += embed.length();
        if sum > EMBED_TOTAL_MAX {
            return Err(Error::EmbedBudgetExceeded {
                count: sum,
                max: EMBED_TOTAL_MAX,
                label: EMBED_TOTAL_LABEL,
            });
        }

        normalized.push(embed);
    }

    *embeds = normalized;

    Ok(())
}
