//! Maps client failures to the single message string the view displays.

use tabloid_client::{ClientError, ErrorKind};

use crate::state::Operation;

/// Base message for a failed operation.
#[must_use]
pub const fn base_message(operation: Operation) -> &'static str {
    match operation {
        Operation::List => "Failed to load articles. Make sure your backend is running.",
        Operation::Search => "Failed to search articles",
        Operation::Save => "Failed to save article",
        Operation::Delete => "Failed to delete article",
    }
}

/// Full message: the operation's base message plus a short hint derived from
/// the error kind.
#[must_use]
pub fn failure_message(operation: Operation, error: &ClientError) -> String {
    let status = error.status().unwrap_or_default();
    let hint = match error.kind() {
        ErrorKind::Transport => "could not reach the server".to_string(),
        ErrorKind::ClientRejected => format!("request rejected with status {status}"),
        ErrorKind::ServerRejected => format!("server returned status {status}"),
        ErrorKind::Decode => "unexpected response from the server".to_string(),
        ErrorKind::Config => "client is misconfigured".to_string(),
    };
    format!("{} ({hint})", base_message(operation))
}
