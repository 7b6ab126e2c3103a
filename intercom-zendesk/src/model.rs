//! Source and destination records handed to the differ.
//!
//! These mirror the shape of Intercom API objects after the fetch layer has
//! resolved nested ids. Unknown JSON fields are ignored.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DiffError;
use crate::timestamp::Timestamp;

/// Source entity kinds the differ knows how to migrate.
pub const SOURCE_KINDS: &[&str] = &["user", "admin", "conversation"];

/// Opaque identifier of a source record.
///
/// The caller records `reference -> destination id` once an action has been
/// applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference {
    value: String,
}

impl Reference {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Serializable string form of the reference.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Record id as issued by either system: numeric, or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

/// An Intercom user or admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntity {
    #[serde(alias = "id")]
    pub reference: Reference,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

/// Opening message of a conversation. Both fields hold HTML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversationMessage {
    #[serde(default, deserialize_with = "present")]
    pub subject: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub body: Option<Option<String>>,
}

impl ConversationMessage {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: Some(Some(subject.into())),
            body: Some(Some(body.into())),
        }
    }

    pub fn subject(&self) -> Result<&str, DiffError> {
        html_field(&self.subject, "conversation_message.subject")
    }

    pub fn body(&self) -> Result<&str, DiffError> {
        html_field(&self.body, "conversation_message.body")
    }
}

/// A reply, note or other event appended to a conversation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversationPart {
    #[serde(default)]
    pub author: Option<Id>,
    #[serde(default, deserialize_with = "present")]
    pub body: Option<Option<String>>,
    #[serde(default)]
    pub part_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl ConversationPart {
    pub fn new(
        author: Id,
        body: impl Into<String>,
        part_type: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            author: Some(author),
            body: Some(Some(body.into())),
            part_type: Some(part_type.into()),
            created_at: Some(created_at),
        }
    }

    pub fn author(&self) -> Result<&Id, DiffError> {
        self.author
            .as_ref()
            .ok_or(DiffError::MissingField("conversation_parts.author"))
    }

    pub fn body(&self) -> Result<&str, DiffError> {
        html_field(&self.body, "conversation_parts.body")
    }

    pub fn part_type(&self) -> Result<&str, DiffError> {
        self.part_type
            .as_deref()
            .ok_or(DiffError::MissingField("conversation_parts.part_type"))
    }

    pub fn created_at(&self) -> Result<Timestamp, DiffError> {
        self.created_at
            .ok_or(DiffError::MissingField("conversation_parts.created_at"))
    }

    /// Internal notes are hidden from the requester.
    pub fn is_note(&self) -> Result<bool, DiffError> {
        Ok(self.part_type()? == "note")
    }
}

/// An Intercom conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(alias = "id")]
    pub reference: Reference,
    #[serde(default)]
    pub tags: Vec<String>,
    pub open: bool,
    /// Requester id.
    pub user: Id,
    #[serde(default)]
    pub assignee: Option<Id>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub conversation_message: ConversationMessage,
    #[serde(default)]
    pub conversation_parts: Vec<ConversationPart>,
}

/// A record pulled from the source system, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceEntity {
    User(UserEntity),
    Admin(UserEntity),
    Conversation(Conversation),
}

impl SourceEntity {
    /// Decode a source entity, rejecting kinds the differ cannot migrate.
    pub fn from_json(value: Value) -> Result<Self, DiffError> {
        let kind = value.get("type").and_then(Value::as_str).unwrap_or("");
        if !SOURCE_KINDS.contains(&kind) {
            let kind = if kind.is_empty() { "<missing>" } else { kind };
            return Err(DiffError::UnsupportedEntityKind(kind.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self, DiffError> {
        Self::from_json(serde_json::from_str(input)?)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SourceEntity::User(_) => "user",
            SourceEntity::Admin(_) => "admin",
            SourceEntity::Conversation(_) => "conversation",
        }
    }

    pub fn reference(&self) -> &Reference {
        match self {
            SourceEntity::User(user) | SourceEntity::Admin(user) => &user.reference,
            SourceEntity::Conversation(conversation) => &conversation.reference,
        }
    }
}

/// Counterpart already present in the destination system. Only its id is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationEntity {
    pub id: Id,
}

impl DestinationEntity {
    pub fn new(id: Id) -> Self {
        Self { id }
    }

    pub fn from_json_str(input: &str) -> Result<Self, DiffError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Distinguish an absent key (`None`) from an explicit `null` (`Some(None)`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// HTML fields may be `null` (rendered as empty) but must be present.
fn html_field<'a>(
    field: &'a Option<Option<String>>,
    name: &'static str,
) -> Result<&'a str, DiffError> {
    match field {
        None => Err(DiffError::MissingField(name)),
        Some(value) => Ok(value.as_deref().unwrap_or("")),
    }
}
