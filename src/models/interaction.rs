use log::debug;
use postman::File;
use serde::Serialize;
use serde_repr::*;

use crate::{
    consts::AUTOCOMPLETE_CHOICES_MAX,
    models::{
        allowed_mentions::AllowedMentions, choices::AutocompleteChoices, component::Component,
        embed::Embed, message::Attachment, nullable::Nullable, MessageFlags,
    },
};

#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
    DeferredUpdateMessage = 6,
    UpdateMessage = 7,
    AutocompleteResult = 8,
    Modal = 9,
}

/// The body of an interaction callback.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionResponseData>,
}

impl InteractionResponse {
    pub fn new(kind: InteractionResponseType, data: Option<InteractionResponseData>) -> Self {
        Self { kind, data }
    }

    pub fn pong() -> Self {
        Self::new(InteractionResponseType::Pong, None)
    }

    pub fn message(data: InteractionResponseData) -> Self {
        Self::new(InteractionResponseType::ChannelMessageWithSource, Some(data))
    }

    pub fn update(data: InteractionResponseData) -> Self {
        Self::new(InteractionResponseType::UpdateMessage, Some(data))
    }

    pub fn deferred(ephemeral: bool) -> Self {
        let data = if ephemeral {
            Some(InteractionResponseData::new().flags(MessageFlags::EPHEMERAL))
        } else {
            None
        };

        Self::new(InteractionResponseType::DeferredChannelMessageWithSource, data)
    }

    /// Discord shows at most 25 choices, so any beyond that are dropped.
    pub fn autocomplete(choices: impl Into<AutocompleteChoices>) -> Self {
        let mut choices = choices.into();

        if choices.len() > AUTOCOMPLETE_CHOICES_MAX {
            debug!("dropping {} autocomplete choices", choices.len() - AUTOCOMPLETE_CHOICES_MAX);

            choices.truncate(AUTOCOMPLETE_CHOICES_MAX);
        }

        let data = InteractionResponseData { choices: Some(choices), ..Default::default() };

        Self::new(InteractionResponseType::AutocompleteResult, Some(data))
    }

    pub fn modal(
        custom_id: impl Into<String>,
        title: impl Into<String>,
        components: Vec<Component>,
    ) -> Self {
        let data = InteractionResponseData {
            custom_id: Nullable::Value(custom_id.into()),
            title: Nullable::Value(title.into()),
            components: Some(components),
            ..Default::default()
        };

        Self::new(InteractionResponseType::Modal, Some(data))
    }

}

/// A request payload whose files travel as multipart parts next to the JSON.
pub trait Uploads: Serialize {
    fn files(&self) -> &[File];

    fn needs_multipart(&self) -> bool {
        !self.files().is_empty()
    }
}

impl Uploads for InteractionResponse {
    fn files(&self) -> &[File] {
        match &self.data {
            Some(data) => &data.files,
            None => &[],
        }
    }
}

impl Uploads for InteractionResponseData {
    fn files(&self) -> &[File] {
        &self.files
    }
}

impl Uploads for EditInteractionResponseData {
    fn files(&self) -> &[File] {
        &self.files
    }
}

/// Message data for an interaction callback or a follow-up message.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct InteractionResponseData {
    #[serde(skip_serializing_if = "Nullable::is_unset")]
    pub content: Nullable<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub tts: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Only `SUPPRESS_EMBEDS` and `EPHEMERAL` are accepted.
    #[serde(skip_serializing_if = "MessageFlags::is_empty")]
    pub flags: MessageFlags,
    /// Uploaded through multipart parts, never part of the JSON.
    #[serde(skip)]
    pub files: Vec<File>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<AutocompleteChoices>,
    #[serde(skip_serializing_if = "Nullable::is_unset")]
    pub custom_id: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_unset")]
    pub title: Nullable<String>,
}

impl InteractionResponseData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Nullable::Value(content.into());

        self
    }

    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = tts;

        self
    }

    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);

        self
    }

    pub fn components(mut self, components: Vec<Component>) -> Self {
        self.components = Some(components);

        self
    }

    pub fn allowed_mentions(mut self, allowed_mentions: AllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed_mentions);

        self
    }

    pub fn flags(mut self, flags: MessageFlags) -> Self {
        self.flags = flags;

        self
    }

    pub fn ephemeral(self) -> Self {
        let flags = self.flags | MessageFlags::EPHEMERAL;

        self.flags(flags)
    }

    pub fn file(mut self, file: File) -> Self {
        self.files.push(file);

        self
    }
}

/// A partial update to an interaction response or follow-up message.
///
/// Fields left unset keep their current value on the message.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct EditInteractionResponseData {
    #[serde(skip_serializing_if = "Nullable::is_unset")]
    pub content: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Attachments already on the message that should survive the edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(skip)]
    pub files: Vec<File>,
}

impl EditInteractionResponseData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<Nullable<String>>) -> Self {
        self.content = content.into();

        self
    }

    /// Removes the message content.
    pub fn clear_content(mut self) -> Self {
        self.content = Nullable::Null;

        self
    }

    pub fn embeds(mut self, embeds: Vec<Embed>) -> Self {
        self.embeds = Some(embeds);

        self
    }

    pub fn components(mut self, components: Vec<Component>) -> Self {
        self.components = Some(components);

        self
    }

    pub fn allowed_mentions(mut self, allowed_mentions: AllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed_mentions);

        self
    }

    pub fn attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments);

        self
    }

    pub fn file(mut self, file: File) -> Self {
        self.files.push(file);

        self
    }
}
