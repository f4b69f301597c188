use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::{
    EMBED_AUTHOR_NAME_MAX, EMBED_DESCRIPTION_MAX, EMBED_FIELDS_MAX, EMBED_FIELD_NAME_MAX,
    EMBED_FIELD_VALUE_MAX, EMBED_FOOTER_TEXT_MAX, EMBED_KIND_RICH, EMBED_TITLE_MAX,
    EMBED_TOTAL_MAX,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedError {
    pub count: usize,
    pub max: usize,
    pub thing: String,
}

impl EmbedError {
    fn new(count: usize, max: usize, thing: impl Into<String>) -> Self {
        Self { count, max, thing: thing.into() }
    }
}

impl Display for EmbedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} has {}, over the limit of {}", self.thing, self.count, self.max)
    }
}

impl std::error::Error for EmbedError {}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "color", skip_serializing_if = "Option::is_none")]
    pub colour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedMedia {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

fn check_length(text: &str, max: usize, thing: impl Into<String>) -> Result<(), EmbedError> {
    let count = text.chars().count();

    if count > max {
        Err(EmbedError::new(count, max, thing))
    } else {
        Ok(())
    }
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());

        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());

        self
    }

    pub fn colour(mut self, colour: u32) -> Self {
        self.colour = Some(colour);

        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField { name: name.into(), value: value.into(), inline });

        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter { text: text.into(), icon_url: None });

        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(EmbedAuthor { name: name.into(), url: None, icon_url: None });

        self
    }

    /// Number of characters Discord counts towards the embed limits.
    pub fn length(&self) -> usize {
        let text = |s: &Option<String>| s.as_deref().map_or(0, |s| s.chars().count());

        text(&self.title)
            + text(&self.description)
            + self.footer.as_ref().map_or(0, |f| f.text.chars().count())
            + self.author.as_ref().map_or(0, |a| a.name.chars().count())
            + self
                .fields
                .iter()
                .map(|f| f.name.chars().count() + f.value.chars().count())
                .sum::<usize>()
    }

    /// Checks the embed against Discord's limits, returning it with defaults filled in.
    pub fn validated(mut self) -> Result<Self, EmbedError> {
        if self.kind.is_none() {
            self.kind = Some(EMBED_KIND_RICH.to_string());
        }

        if let Some(title) = &self.title {
            check_length(title, EMBED_TITLE_MAX, "title")?;
        }

        if let Some(description) = &self.description {
            check_length(description, EMBED_DESCRIPTION_MAX, "description")?;
        }

        if self.fields.len() > EMBED_FIELDS_MAX {
            return Err(EmbedError::new(self.fields.len(), EMBED_FIELDS_MAX, "fields"));
        }

        for (index, field) in self.fields.iter().enumerate() {
            check_length(&field.name, EMBED_FIELD_NAME_MAX, format!("field {} name", index))?;
            check_length(&field.value, EMBED_FIELD_VALUE_MAX, format!("field {} value", index))?;
        }

        if let Some(footer) = &self.footer {
            check_length(&footer.text, EMBED_FOOTER_TEXT_MAX, "footer text")?;
        }

        if let Some(author) = &self.author {
            check_length(&author.name, EMBED_AUTHOR_NAME_MAX, "author name")?;
        }

        let length = self.length();
        if length > EMBED_TOTAL_MAX {
            return Err(EmbedError::new(length, EMBED_TOTAL_MAX, "sum of all characters"));
        }

        Ok(self)
    }
}
