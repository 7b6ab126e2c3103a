//! Compare an Intercom record with its Zendesk counterpart and plan actions.

use html_text_core::{html_to_ascii, strip_html};
use tracing::debug;

use crate::action::{
    Action, Comment, HtmlComment, PlainComment, TicketDetails, TicketStatus, UserDetails,
};
use crate::error::DiffError;
use crate::model::{Conversation, ConversationPart, DestinationEntity, SourceEntity, UserEntity};
use crate::timestamp::iso_time;

/// Plan the actions that bring `destination` in line with `source`.
///
/// Returns at most one action. Inputs are never modified, so repeated calls
/// with the same inputs return equal plans.
pub fn diff(
    source: &SourceEntity,
    destination: Option<&DestinationEntity>,
) -> Result<Vec<Action>, DiffError> {
    debug!(
        kind = source.kind(),
        reference = %source.reference(),
        destination_present = destination.is_some(),
        "diffing source entity"
    );

    match source {
        SourceEntity::User(user) | SourceEntity::Admin(user) => Ok(diff_user(user, destination)),
        SourceEntity::Conversation(conversation) => diff_ticket(conversation, destination),
    }
}

fn diff_user(user: &UserEntity, destination: Option<&DestinationEntity>) -> Vec<Action> {
    match destination {
        Some(existing) => vec![reference(user, existing)],
        None => vec![import_user(user)],
    }
}

fn diff_ticket(
    conversation: &Conversation,
    destination: Option<&DestinationEntity>,
) -> Result<Vec<Action>, DiffError> {
    // Tickets are imported once and never updated.
    if destination.is_some() {
        debug!(reference = %conversation.reference, "ticket already imported");
        return Ok(Vec::new());
    }
    Ok(vec![import_ticket(conversation)?])
}

fn reference(user: &UserEntity, destination: &DestinationEntity) -> Action {
    Action::Reference {
        details: destination.id.clone(),
        reference: user.reference.clone(),
    }
}

fn import_user(user: &UserEntity) -> Action {
    let name = match user.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => user.email.as_str(),
    };

    Action::ImportUser {
        details: UserDetails {
            external_id: user.reference.value().to_string(),
            name: name.to_string(),
            email: user.email.clone(),
        },
        reference: user.reference.clone(),
    }
}

fn import_ticket(conversation: &Conversation) -> Result<Action, DiffError> {
    let message = &conversation.conversation_message;
    let created_at = iso_time(conversation.created_at)?;

    let mut comments = Vec::with_capacity(conversation.conversation_parts.len() + 1);
    comments.push(Comment::Html(HtmlComment {
        author_id: conversation.user.clone(),
        html_body: message.body()?.to_string(),
        created_at: created_at.clone(),
    }));
    for part in &conversation.conversation_parts {
        comments.push(Comment::Plain(plain_comment(part)?));
    }

    Ok(Action::ImportTicket {
        details: TicketDetails {
            external_id: conversation.reference.value().to_string(),
            tags: conversation.tags.clone(),
            status: TicketStatus::from_open(conversation.open),
            requester_id: conversation.user.clone(),
            assignee_id: conversation.assignee.clone(),
            subject: strip_html(message.subject()?),
            comments,
            created_at,
            updated_at: iso_time(conversation.updated_at)?,
        },
    })
}

fn plain_comment(part: &ConversationPart) -> Result<PlainComment, DiffError> {
    Ok(PlainComment {
        author_id: part.author()?.clone(),
        value: html_to_ascii(part.body()?),
        public: !part.is_note()?,
        created_at: iso_time(part.created_at()?)?,
    })
}
