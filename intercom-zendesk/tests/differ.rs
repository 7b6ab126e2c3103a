use std::fs;
use std::path::PathBuf;

use intercom_zendesk::action::{Comment, TicketDetails};
use intercom_zendesk::model::{
    Conversation, ConversationMessage, ConversationPart, DestinationEntity, Id, Reference,
    SourceEntity, UserEntity,
};
use intercom_zendesk::{diff, Action, DiffError, TicketStatus, Timestamp};
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn load_source(name: &str) -> SourceEntity {
    let raw = fs::read_to_string(fixture(name)).expect("fixture should be readable");
    SourceEntity::from_json_str(&raw).expect("fixture should decode")
}

fn conversation(open: bool, parts: Vec<ConversationPart>) -> Conversation {
    Conversation {
        reference: Reference::new("c-1"),
        tags: vec!["vip".to_string()],
        open,
        user: Id::Number(10),
        assignee: None,
        created_at: Timestamp::from_secs(0),
        updated_at: Timestamp::from_secs(60),
        conversation_message: ConversationMessage::new("<b>Help</b>", "<p>raw <i>html</i></p>"),
        conversation_parts: parts,
    }
}

fn ticket_details(actions: &[Action]) -> &TicketDetails {
    match actions {
        [Action::ImportTicket { details }] => details,
        other => panic!("expected one import_ticket action, got {other:?}"),
    }
}

#[test]
fn existing_user_is_referenced() {
    let source = load_source("fixtures/user.json");
    let destination = DestinationEntity::new(Id::Number(35436));

    let actions = diff(&source, Some(&destination)).expect("diff should succeed");

    assert_eq!(
        actions,
        vec![Action::Reference {
            details: Id::Number(35436),
            reference: Reference::new("530370b477ad7120001d"),
        }]
    );
}

#[test]
fn missing_user_is_imported() {
    let source = load_source("fixtures/user.json");

    let actions = diff(&source, None).expect("diff should succeed");

    assert_eq!(
        serde_json::to_value(&actions).expect("serialize"),
        json!([{
            "name": "import_user",
            "details": {
                "external_id": "530370b477ad7120001d",
                "name": "Ann Example",
                "email": "ann@example.com"
            },
            "reference": "530370b477ad7120001d"
        }])
    );
}

#[test]
fn nameless_admin_is_imported_under_email() {
    let source = load_source("fixtures/admin.json");

    let actions = diff(&source, None).expect("diff should succeed");

    let [Action::ImportUser { details, reference }] = actions.as_slice() else {
        panic!("expected one import_user action, got {actions:?}");
    };
    assert_eq!(details.name, "support@example.com");
    assert_eq!(reference.value(), "814860");
}

#[test]
fn existing_ticket_needs_nothing() {
    let source = load_source("fixtures/conversation.json");
    let destination = DestinationEntity::new(Id::Number(8812));

    assert_eq!(
        diff(&source, Some(&destination)).expect("diff"),
        Vec::<Action>::new()
    );
}

#[test]
fn missing_ticket_is_imported_with_full_history() {
    let source = load_source("fixtures/conversation.json");

    let actions = diff(&source, None).expect("diff should succeed");
    let value = serde_json::to_value(&actions).expect("serialize");
    let rule = "-".repeat(70);

    assert_eq!(
        value,
        json!([{
            "name": "import_ticket",
            "details": {
                "external_id": "147",
                "tags": ["billing", "vip"],
                "status": "pending",
                "requester_id": 1001,
                "assignee_id": 2002,
                "subject": "Refund & invoice",
                "comments": [
                    {
                        "author_id": 1001,
                        "html_body": "<p>Hi there,</p><p>I was charged twice.</p>",
                        "created_at": "2014-05-13T16:53:20Z"
                    },
                    {
                        "author_id": 2002,
                        "value": "Sorry about that!\nRefund issued.",
                        "public": true,
                        "created_at": "2014-05-13T17:10:00Z"
                    },
                    {
                        "author_id": 2002,
                        "value": format!("Checked the ledger\n\n\n{rule}\nok"),
                        "public": false,
                        "created_at": "2014-05-13T17:26:40Z"
                    }
                ],
                "created_at": "2014-05-13T16:53:20Z",
                "updated_at": "2014-05-13T17:53:20Z"
            }
        }])
    );
    assert!(actions[0].reference().is_none());
}

#[test]
fn status_tracks_open_flag() {
    let open = diff(&SourceEntity::Conversation(conversation(true, vec![])), None).expect("open");
    let closed =
        diff(&SourceEntity::Conversation(conversation(false, vec![])), None).expect("closed");

    assert_eq!(ticket_details(&open).status, TicketStatus::Pending);
    assert_eq!(ticket_details(&closed).status, TicketStatus::Solved);
}

#[test]
fn comments_follow_parts_in_order() {
    let parts = vec![
        ConversationPart::new(Id::Number(1), "<p>first</p>", "comment", Timestamp::from_secs(1)),
        ConversationPart::new(Id::Number(2), "second", "note", Timestamp::from_secs(2)),
        ConversationPart::new(Id::Number(3), "third", "assignment", Timestamp::from_secs(3)),
    ];
    let actions = diff(&SourceEntity::Conversation(conversation(true, parts)), None).expect("diff");
    let details = ticket_details(&actions);

    assert_eq!(details.comments.len(), 4);
    assert_eq!(details.subject, "Help");
    assert_eq!(details.assignee_id, None);

    let Comment::Html(opening) = &details.comments[0] else {
        panic!("opening comment should keep its HTML");
    };
    assert_eq!(opening.html_body, "<p>raw <i>html</i></p>");
    assert_eq!(opening.created_at, "1970-01-01T00:00:00Z");

    let replies: Vec<(String, bool)> = details.comments[1..]
        .iter()
        .map(|comment| match comment {
            Comment::Plain(plain) => (plain.value.clone(), plain.public),
            Comment::Html(_) => panic!("replies should be plain text"),
        })
        .collect();
    assert_eq!(
        replies,
        vec![
            ("first".to_string(), true),
            ("second".to_string(), false),
            ("third".to_string(), true),
        ]
    );
}

#[test]
fn diff_is_repeatable_and_leaves_inputs_alone() {
    let source = load_source("fixtures/conversation.json");
    let snapshot = source.clone();

    let first = diff(&source, None).expect("first");
    let second = diff(&source, None).expect("second");

    assert_eq!(first, second);
    assert_eq!(source, snapshot);
}

#[test]
fn missing_part_author_fails_the_whole_ticket() {
    let source = load_source("fixtures/conversation_missing_author.json");

    let err = diff(&source, None).expect_err("part without author");

    assert!(matches!(
        err,
        DiffError::MissingField("conversation_parts.author")
    ));
}

#[test]
fn missing_message_subject_is_reported() {
    let mut ticket = conversation(true, vec![]);
    ticket.conversation_message.subject = None;

    let err = diff(&SourceEntity::Conversation(ticket), None).expect_err("no subject");

    assert_eq!(
        err.to_string(),
        "missing required field 'conversation_message.subject'"
    );
}

#[test]
fn unsupported_kind_is_rejected_on_decode() {
    let raw = fs::read_to_string(fixture("fixtures/company.json")).expect("fixture");

    let err = SourceEntity::from_json_str(&raw).expect_err("companies are not migrated");

    assert!(matches!(err, DiffError::UnsupportedEntityKind(ref kind) if kind == "company"));
}

#[test]
fn user_entity_name_is_used_when_present() {
    let source = SourceEntity::User(UserEntity {
        reference: Reference::new("u"),
        name: Some("Zoe".to_string()),
        email: "zoe@example.com".to_string(),
    });

    let actions = diff(&source, None).expect("diff");

    let [Action::ImportUser { details, .. }] = actions.as_slice() else {
        panic!("expected one import_user action");
    };
    assert_eq!(details.name, "Zoe");
    assert_eq!(details.external_id, "u");
}
