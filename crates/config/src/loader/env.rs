//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `CM_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.
//! - `CM_MAX_WAIT=0` means "wait without bound".

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, value: &str, message: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("CM_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("CM_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("CM_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(timeout) = env_var_or_none("CM_TIMEOUT") {
        let secs: u64 = parse_env("CM_TIMEOUT", &timeout, "must be a number")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(timeout) = env_var_or_none("CM_CONNECT_TIMEOUT") {
        let secs: u64 = parse_env("CM_CONNECT_TIMEOUT", &timeout, "must be a number")?;
        loader.set_connect_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(version) = env_var_or_none("CM_API_VERSION") {
        loader.set_api_version(Some(version));
    }
    if let Some(interval) = env_var_or_none("CM_POLL_INTERVAL") {
        let secs: u64 = parse_env(
            "CM_POLL_INTERVAL",
            &interval,
            "must be a positive number of seconds",
        )?;
        loader.set_poll_interval(Some(Duration::from_secs(secs)));
    }
    if let Some(max_wait) = env_var_or_none("CM_MAX_WAIT") {
        let secs: u64 = parse_env(
            "CM_MAX_WAIT",
            &max_wait,
            "must be a number of seconds (0 disables the limit)",
        )?;
        loader.set_max_wait(Some(secs));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        temp_env::with_vars(
            [
                ("CM_TEST_EMPTY", Some("")),
                ("CM_TEST_SPACES", Some("   ")),
                ("CM_TEST_PADDED", Some("  value  ")),
            ],
            || {
                assert_eq!(env_var_or_none("CM_TEST_EMPTY"), None);
                assert_eq!(env_var_or_none("CM_TEST_SPACES"), None);
                assert_eq!(env_var_or_none("CM_TEST_PADDED"), Some("value".to_string()));
                assert_eq!(env_var_or_none("CM_TEST_NEVER_SET"), None);
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_poll_interval_reports_variable() {
        temp_env::with_vars([("CM_POLL_INTERVAL", Some("soon"))], || {
            let mut loader = ConfigLoader::new();
            let err = apply_env(&mut loader).unwrap_err();
            match err {
                ConfigError::InvalidValue { var, .. } => assert_eq!(var, "CM_POLL_INTERVAL"),
                other => panic!("unexpected error: {other:?}"),
            }
        });
    }
}
