//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Recognize user-initiated cancellation (Ctrl+C/SIGINT) in an `anyhow` error chain.
//! - Centralize the cancellation message printed before exiting with code 130.
//!
//! Does NOT handle:
//! - Installing signal handlers (done in `main`).
//! - The token itself; waits use `cm_client::CancellationToken`, which ends a
//!   poll with `ClientError::Cancelled`.

use cm_client::ClientError;

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<ClientError>()
            .is_some_and(ClientError::is_cancelled)
    })
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
