pub mod allowed_mentions;
pub mod choices;
pub mod component;
pub mod embed;
pub mod interaction;
pub mod message;
pub mod nullable;

pub use serenity::model::application::interaction::MessageFlags;
pub use serenity::model::id::{
    ApplicationId, AttachmentId, ChannelId, InteractionId, MessageId, RoleId, UserId, WebhookId,
};

pub use allowed_mentions::{AllowedMentions, MentionError, MentionType};
pub use choices::{AutocompleteChoices, IntegerChoice, NumberChoice, StringChoice};
pub use component::{
    ButtonStyle, Component, ComponentStyle, ComponentType, InputTextStyle, SelectOption,
};
pub use embed::{Embed, EmbedAuthor, EmbedError, EmbedField, EmbedFooter, EmbedMedia};
pub use interaction::{
    EditInteractionResponseData, InteractionResponse, InteractionResponseData,
    InteractionResponseType, Uploads,
};
pub use message::{Attachment, Message};
pub use nullable::Nullable;
