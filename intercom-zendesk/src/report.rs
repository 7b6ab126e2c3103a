use colored::Colorize;

use crate::action::{Action, Comment};

/// Format actions as one plain-text line each.
pub fn format_text(actions: &[Action]) -> String {
    if actions.is_empty() {
        return "= nothing to do".to_string();
    }

    let mut lines = Vec::with_capacity(actions.len());
    for action in actions {
        match action {
            Action::Reference { details, reference } => {
                lines.push(format!("= reference {reference} -> {details}"));
            }
            Action::ImportUser { details, reference } => {
                lines.push(format!(
                    "+ import_user {reference} name={:?} email={}",
                    details.name, details.email
                ));
            }
            Action::ImportTicket { details } => {
                let notes = details
                    .comments
                    .iter()
                    .filter(|c| matches!(c, Comment::Plain(p) if !p.public))
                    .count();
                lines.push(format!(
                    "+ import_ticket {} status={:?} subject={:?} comments={} notes={notes}",
                    details.external_id,
                    details.status,
                    details.subject,
                    details.comments.len()
                ));
            }
        }
    }
    lines.join("\n")
}

/// Format a count of actions by name.
pub fn format_summary(actions: &[Action]) -> String {
    let mut reference = 0;
    let mut import_user = 0;
    let mut import_ticket = 0;

    for action in actions {
        match action {
            Action::Reference { .. } => reference += 1,
            Action::ImportUser { .. } => import_user += 1,
            Action::ImportTicket { .. } => import_ticket += 1,
        }
    }

    format!("reference={reference} import_user={import_user} import_ticket={import_ticket}")
}

/// Render actions for terminal output.
pub fn render_text(actions: &[Action]) -> String {
    let raw = format_text(actions);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('=') {
            line.blue().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(actions: &[Action]) -> String {
    format_summary(actions).cyan().to_string()
}
