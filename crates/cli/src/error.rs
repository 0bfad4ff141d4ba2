//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants and failed commands to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see `main` and `cancellation`).
//!
//! Invariants:
//! - Exit codes 1-10 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use cm_client::ClientError;
use thiserror::Error;

/// Structured exit codes for cmctl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - rejected or missing credentials.
    AuthenticationFailed = 2,

    /// Connection error - network, request timeout, or DNS failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Resource not found - cluster, service, command, etc.
    NotFound = 4,

    /// Validation error - bad parameters or an undecodable response.
    ValidationError = 5,

    /// Permission denied - insufficient privileges.
    PermissionDenied = 6,

    /// Service unavailable - HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// A waited-on command finished without success.
    CommandFailed = 9,

    /// A command did not finish within the maximum wait.
    WaitTimedOut = 10,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// A command the CLI waited on ended unsuccessfully.
#[derive(Debug, Error)]
#[error("Command {id} ({name}) failed: {message}")]
pub struct CommandFailed {
    pub id: u64,
    pub name: String,
    pub message: String,
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::MissingCredentials => ExitCode::AuthenticationFailed,
            ClientError::InvalidResponse(_) | ClientError::InvalidConfiguration(_) => {
                ExitCode::ValidationError
            }

            ClientError::OperationTimeout { .. } => ExitCode::WaitTimedOut,
            ClientError::Cancelled => ExitCode::Interrupted,

            // Batch context adds position only; classify by what went wrong
            ClientError::CommandWaitFailed { source, .. } => Self::from(source.as_ref()),
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if nothing in the chain is recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.is::<CommandFailed>() {
                return ExitCode::CommandFailed;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "http://cm:7180/api/v1/clusters/lab".to_string(),
            message: "error".to_string(),
            causes: Vec::new(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::CommandFailed.as_i32(), 9);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_api_status_mapping() {
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(503)), ExitCode::ServiceUnavailable);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_wait_errors() {
        let timeout = ClientError::OperationTimeout {
            operation: "command 42".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert_eq!(ExitCode::from(&timeout), ExitCode::WaitTimedOut);
        assert_eq!(ExitCode::from(&ClientError::Cancelled), ExitCode::Interrupted);
    }

    #[test]
    fn test_batch_failure_uses_inner_error() {
        let err = ClientError::CommandWaitFailed {
            index: 3,
            command_id: 44,
            source: Box::new(api_error(404)),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_anyhow_chain() {
        let failed = anyhow::Error::from(CommandFailed {
            id: 42,
            name: "Start".to_string(),
            message: "NameNode did not start".to_string(),
        });
        assert_eq!(failed.exit_code(), ExitCode::CommandFailed);

        let wrapped = anyhow::Error::from(api_error(401)).context("listing clusters");
        assert_eq!(wrapped.exit_code(), ExitCode::AuthenticationFailed);

        assert_eq!(anyhow::anyhow!("other").exit_code(), ExitCode::GeneralError);
    }
}
