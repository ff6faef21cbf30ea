//! Environment-driven configuration, read once at startup.

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the base API address.
pub const ENV_API_BASE: &str = "DUESDASH_API_BASE";
/// Environment variable overriding the state file location.
pub const ENV_STATE_FILE: &str = "DUESDASH_STATE_FILE";
/// Environment variable holding the session cookie attached to
/// credentialed requests.
pub const ENV_SESSION_COOKIE: &str = "DUESDASH_SESSION_COOKIE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DUESDASH_API_BASE is not set")]
    MissingApiBase,
    #[error("cannot locate a state file: set DUESDASH_STATE_FILE or HOME")]
    MissingStatePath,
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base API address, normalized to end with a slash since every
    /// call site appends its path directly.
    pub api_base: String,
    /// Where the dashboard snapshot lives.
    pub state_file: PathBuf,
    /// Cookie attached to credentialed requests, when configured.
    pub session_cookie: Option<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base = get(ENV_API_BASE)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingApiBase)?;
        let api_base = if api_base.ends_with('/') {
            api_base
        } else {
            format!("{}/", api_base)
        };

        let state_file = match get(ENV_STATE_FILE) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_state_file(&get)?,
        };

        let session_cookie = get(ENV_SESSION_COOKIE).filter(|value| !value.is_empty());

        Ok(Self {
            api_base,
            state_file,
            session_cookie,
        })
    }
}

fn default_state_file(get: &impl Fn(&str) -> Option<String>) -> Result<PathBuf, ConfigError> {
    let home = get("HOME")
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingStatePath)?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("duesdash")
        .join("state.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_requires_the_api_base() {
        let result = Config::from_lookup(lookup(&[("HOME", "/home/tester")]));
        assert!(matches!(result, Err(ConfigError::MissingApiBase)));
    }

    #[test]
    fn test_api_base_gains_a_trailing_slash() {
        let config = Config::from_lookup(lookup(&[
            (ENV_API_BASE, "https://pay.example.test"),
            ("HOME", "/home/tester"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "https://pay.example.test/");

        let already = Config::from_lookup(lookup(&[
            (ENV_API_BASE, "https://pay.example.test/"),
            ("HOME", "/home/tester"),
        ]))
        .unwrap();
        assert_eq!(already.api_base, "https://pay.example.test/");
    }

    #[test]
    fn test_state_file_defaults_under_home() {
        let config = Config::from_lookup(lookup(&[
            (ENV_API_BASE, "https://pay.example.test/"),
            ("HOME", "/home/tester"),
        ]))
        .unwrap();
        assert_eq!(
            config.state_file,
            PathBuf::from("/home/tester/.config/duesdash/state.json")
        );
    }

    #[test]
    fn test_state_file_override_wins() {
        let config = Config::from_lookup(lookup(&[
            (ENV_API_BASE, "https://pay.example.test/"),
            (ENV_STATE_FILE, "/tmp/dues.json"),
        ]))
        .unwrap();
        assert_eq!(config.state_file, PathBuf::from("/tmp/dues.json"));
    }

    #[test]
    fn test_session_cookie_is_optional() {
        let without = Config::from_lookup(lookup(&[
            (ENV_API_BASE, "https://pay.example.test/"),
            ("HOME", "/home/tester"),
        ]))
        .unwrap();
        assert_eq!(without.session_cookie, None);

        let with = Config::from_lookup(lookup(&[
            (ENV_API_BASE, "https://pay.example.test/"),
            (ENV_SESSION_COOKIE, "session=abc123"),
            ("HOME", "/home/tester"),
        ]))
        .unwrap();
        assert_eq!(with.session_cookie.as_deref(), Some("session=abc123"));
    }
}
