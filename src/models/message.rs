use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serenity::model::channel::MessageFlags;

use crate::models::{
    component::Component, embed::Embed, ApplicationId, AttachmentId, ChannelId, MessageId,
    WebhookId,
};

fn is_zero(size: &u64) -> bool {
    *size == 0
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub id: AttachmentId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub proxy_url: String,
}

impl Attachment {
    /// Refers to an attachment already on the message, for use in an edit's
    /// retention list.
    pub fn keep(id: impl Into<AttachmentId>) -> Self {
        Self {
            id: id.into(),
            filename: String::new(),
            description: None,
            content_type: None,
            size: 0,
            url: String::new(),
            proxy_url: String::new(),
        }
    }
}

/// The fields of a message object returned by the webhook endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub channel_id: ChannelId,
    #[serde(default)]
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub edited_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tts: bool,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub flags: MessageFlags,
    pub webhook_id: Option<WebhookId>,
    pub application_id: Option<ApplicationId>,
}
