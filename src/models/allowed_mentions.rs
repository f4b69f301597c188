use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::{
    consts::ALLOWED_MENTIONS_MAX,
    models::{RoleId, UserId},
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MentionType {
    Roles,
    Users,
    Everyone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionError {
    TooManyRoles(usize),
    TooManyUsers(usize),
    /// `parse` allows all role mentions while `roles` lists specific ones.
    RolesConflict,
    UsersConflict,
}

impl Display for MentionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MentionError::TooManyRoles(count) => {
                write!(f, "roles list has {} entries, over the limit of {}", count, ALLOWED_MENTIONS_MAX)
            }
            MentionError::TooManyUsers(count) => {
                write!(f, "users list has {} entries, over the limit of {}", count, ALLOWED_MENTIONS_MAX)
            }
            MentionError::RolesConflict => f.write_str("parse contains roles and roles list is not empty"),
            MentionError::UsersConflict => f.write_str("parse contains users and users list is not empty"),
        }
    }
}

impl std::error::Error for MentionError {}

/// Which mentions in a message are allowed to ping.
///
/// An empty policy suppresses every ping.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedMentions {
    #[serde(default)]
    pub parse: Vec<MentionType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replied_user: Option<bool>,
}

impl AllowedMentions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn parse(mut self, mention_type: MentionType) -> Self {
        if !self.parse.contains(&mention_type) {
            self.parse.push(mention_type);
        }

        self
    }

    pub fn user(mut self, user_id: impl Into<UserId>) -> Self {
        self.users.push(user_id.into());

        self
    }

    pub fn role(mut self, role_id: impl Into<RoleId>) -> Self {
        self.roles.push(role_id.into());

        self
    }

    pub fn validate(&self) -> Result<(), MentionError> {
        if self.roles.len() > ALLOWED_MENTIONS_MAX {
            return Err(MentionError::TooManyRoles(self.roles.len()));
        }

        if self.users.len() > ALLOWED_MENTIONS_MAX {
            return Err(MentionError::TooManyUsers(self.users.len()));
        }

        for mention_type in &self.parse {
            match mention_type {
                MentionType::Roles if !self.roles.is_empty() => {
                    return Err(MentionError::RolesConflict);
                }
                MentionType::Users if !self.users.is_empty() => {
                    return Err(MentionError::UsersConflict);
                }
                _ => {}
            }
        }

        Ok(())
    }
}
