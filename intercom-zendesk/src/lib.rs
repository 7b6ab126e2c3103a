//! Migration planning from Intercom to Zendesk.
//!
//! Given a record exported from Intercom and, when one exists, the matching
//! Zendesk record, [`differ::diff`] returns the declarative actions a caller
//! must apply: map an existing record, import a user, or import a ticket with
//! its comment history. Nothing here talks to either API or stores mappings.
//!
//! - [`model`] — source and destination records
//! - [`differ`] — action planning
//! - [`action`] — action payloads, serialized in the shape the Zendesk import
//!   API expects
//! - [`timestamp`] — POSIX time handling and ISO-8601 output
//! - [`report`] — terminal rendering of planned actions
//!
//! Comment bodies are converted to plain text by `html-text-core`.

pub mod action;
pub mod differ;
pub mod error;
pub mod model;
pub mod report;
pub mod timestamp;

pub use action::{Action, Comment, TicketStatus};
pub use differ::diff;
pub use error::DiffError;
pub use model::{DestinationEntity, Id, Reference, SourceEntity};
pub use timestamp::{iso_time, Timestamp};
