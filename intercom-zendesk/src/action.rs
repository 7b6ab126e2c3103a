//! Declarative migration actions.
//!
//! Field names and value formats are consumed by the Zendesk import API and
//! must not change.

use serde::Serialize;

use crate::model::{Id, Reference};

/// A single instruction for the caller to carry out against the destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Action {
    /// The destination record already represents the source; record the mapping.
    Reference { details: Id, reference: Reference },
    /// Create the user in the destination.
    ImportUser {
        details: UserDetails,
        reference: Reference,
    },
    /// Create the ticket in the destination. The mapping must be taken from
    /// the import response, so no reference is carried.
    ImportTicket { details: TicketDetails },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Reference { .. } => "reference",
            Action::ImportUser { .. } => "import_user",
            Action::ImportTicket { .. } => "import_ticket",
        }
    }

    /// Source reference to map once the action is applied, if carried.
    pub fn reference(&self) -> Option<&Reference> {
        match self {
            Action::Reference { reference, .. } | Action::ImportUser { reference, .. } => {
                Some(reference)
            }
            Action::ImportTicket { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDetails {
    pub external_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketDetails {
    pub external_id: String,
    pub tags: Vec<String>,
    pub status: TicketStatus,
    pub requester_id: Id,
    pub assignee_id: Option<Id>,
    pub subject: String,
    pub comments: Vec<Comment>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Solved,
}

impl TicketStatus {
    /// Open conversations await a reply; closed ones are solved.
    pub fn from_open(open: bool) -> Self {
        if open {
            TicketStatus::Pending
        } else {
            TicketStatus::Solved
        }
    }
}

/// A ticket comment. The opening message keeps its HTML; replies are plain text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Comment {
    Html(HtmlComment),
    Plain(PlainComment),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlComment {
    pub author_id: Id,
    pub html_body: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlainComment {
    pub author_id: Id,
    pub value: String,
    pub public: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Action, TicketStatus, UserDetails};
    use crate::model::{Id, Reference};

    #[test]
    fn reference_action_serializes_flat() {
        let action = Action::Reference {
            details: Id::Number(77),
            reference: Reference::new("abc"),
        };
        assert_eq!(
            serde_json::to_value(&action).expect("serialize"),
            json!({"name": "reference", "details": 77, "reference": "abc"})
        );
    }

    #[test]
    fn import_user_carries_reference() {
        let action = Action::ImportUser {
            details: UserDetails {
                external_id: "abc".to_string(),
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
            },
            reference: Reference::new("abc"),
        };
        assert_eq!(action.name(), "import_user");
        assert_eq!(action.reference().map(Reference::value), Some("abc"));
    }

    #[test]
    fn status_strings_match_import_api() {
        assert_eq!(
            serde_json::to_value(TicketStatus::from_open(true)).expect("serialize"),
            json!("pending")
        );
        assert_eq!(
            serde_json::to_value(TicketStatus::from_open(false)).expect("serialize"),
            json!("solved")
        );
    }
}
