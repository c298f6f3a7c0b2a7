//! Environment and secret loading
//!
//! Process-level inputs for the preset builders: a dotenv file, the
//! account and API-key variables, and an optional TOML secret store. All of
//! it is loaded once at startup into an [`Environment`] that callers pass
//! by reference; nothing here is read lazily or held in globals.

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Variable naming the dotenv file to load instead of `./.env`.
pub const DOTENV_PATH_VAR: &str = "DOTENV_PATH";

/// Variable naming the TOML secret store; unset means no secret store.
pub const SECRETS_PATH_VAR: &str = "SECRETS_PATH";

/// Errors from environment or secret loading.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("failed to load env file {}: {message}", .path.display())]
    EnvFile { path: PathBuf, message: String },

    #[error("failed to read secrets file {}: {message}", .path.display())]
    SecretsRead { path: PathBuf, message: String },

    #[error("failed to parse secrets file {}: {message}", .path.display())]
    SecretsParse { path: PathBuf, message: String },
}

/// Flat key-value secret store parsed from a TOML file.
///
/// Values never appear in `Debug` output; only the key names do.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Secrets {
    values: BTreeMap<String, String>,
}

impl Secrets {
    /// Parse a TOML secret file into a flat string map.
    pub fn load(path: &Path) -> Result<Self, EnvError> {
        let contents = fs::read_to_string(path).map_err(|e| EnvError::SecretsRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&contents).map_err(|e| EnvError::SecretsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Look up a secret by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Process-level configuration inputs, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Deployer mnemonic (`MNEMONIC`).
    pub mnemonic: Option<String>,

    /// Funder mnemonic (`FUNDER_MNEMONIC`).
    pub funder_mnemonic: Option<String>,

    /// Deployer private key (`PRIVATE_KEY`), unprefixed hex.
    pub private_key: Option<String>,

    /// Alchemy API key (`ALCHEMY_API_KEY`); enables mainnet forking.
    pub alchemy_api_key: Option<String>,

    /// Infura API key (`INFURA_API_KEY`) for hosted network endpoints.
    pub infura_api_key: Option<String>,

    /// Block-explorer API key (`ETHERSCAN_API`).
    pub etherscan_api_key: Option<String>,

    /// Secret store named by `SECRETS_PATH`, when configured.
    pub secrets: Option<Secrets>,
}

impl Environment {
    /// Load the dotenv file, the account and API-key variables, and the
    /// optional secret store.
    ///
    /// A `DOTENV_PATH` naming a missing or unreadable file is an error; a
    /// missing default `.env` is not.
    pub fn load() -> Result<Self, EnvError> {
        match env::var(DOTENV_PATH_VAR) {
            Ok(path) => {
                tracing::info!(path = %path, "using custom .env path");
                let path = PathBuf::from(path);
                dotenvy::from_path(&path).map_err(|e| EnvError::EnvFile {
                    path,
                    message: e.to_string(),
                })?;
            }
            Err(_) => {
                // Only an explicitly named env file is required to exist.
                let _ = dotenvy::dotenv();
            }
        }

        let secrets = match env::var(SECRETS_PATH_VAR) {
            Ok(path) => {
                tracing::info!(path = %path, "using custom secrets path");
                Some(Secrets::load(Path::new(&path))?)
            }
            Err(_) => None,
        };

        Ok(Self {
            mnemonic: env::var("MNEMONIC").ok(),
            funder_mnemonic: env::var("FUNDER_MNEMONIC").ok(),
            private_key: env::var("PRIVATE_KEY").ok(),
            alchemy_api_key: env::var("ALCHEMY_API_KEY").ok(),
            infura_api_key: env::var("INFURA_API_KEY").ok(),
            etherscan_api_key: env::var("ETHERSCAN_API").ok(),
            secrets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Every variable `load` touches, for temp-env isolation.
    const MANAGED_VARS: &[&str] = &[
        DOTENV_PATH_VAR,
        SECRETS_PATH_VAR,
        "MNEMONIC",
        "FUNDER_MNEMONIC",
        "PRIVATE_KEY",
        "ALCHEMY_API_KEY",
        "INFURA_API_KEY",
        "ETHERSCAN_API",
    ];

    fn with_clean_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
        let vars: Vec<(&str, Option<&str>)> = MANAGED_VARS
            .iter()
            .map(|var| {
                let value = overrides
                    .iter()
                    .find(|(name, _)| name == var)
                    .map(|(_, value)| *value);
                (*var, value)
            })
            .collect();
        temp_env::with_vars(vars, f);
    }

    #[test]
    fn test_load_from_plain_variables() {
        with_clean_env(
            &[("MNEMONIC", "alpha beta"), ("INFURA_API_KEY", "infura-key")],
            || {
                let env = Environment::load().unwrap();
                assert_eq!(env.mnemonic.as_deref(), Some("alpha beta"));
                assert_eq!(env.infura_api_key.as_deref(), Some("infura-key"));
                assert!(env.private_key.is_none());
                assert!(env.secrets.is_none());
            },
        );
    }

    #[test]
    fn test_load_with_custom_dotenv_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ETHERSCAN_API=from-dotenv").unwrap();
        let path = file.path().to_string_lossy().to_string();

        with_clean_env(&[(DOTENV_PATH_VAR, path.as_str())], || {
            let env = Environment::load().unwrap();
            assert_eq!(env.etherscan_api_key.as_deref(), Some("from-dotenv"));
        });
    }

    #[test]
    fn test_missing_custom_dotenv_is_an_error() {
        with_clean_env(&[(DOTENV_PATH_VAR, "/nonexistent/.env")], || {
            let err = Environment::load().unwrap_err();
            assert!(matches!(err, EnvError::EnvFile { .. }));
            assert!(err.to_string().contains("/nonexistent/.env"));
        });
    }

    #[test]
    fn test_load_with_secrets_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "MAINNET_PRIVATE_KEY = \"abc123\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        with_clean_env(&[(SECRETS_PATH_VAR, path.as_str())], || {
            let env = Environment::load().unwrap();
            let secrets = env.secrets.expect("secret store should be loaded");
            assert_eq!(secrets.get("MAINNET_PRIVATE_KEY"), Some("abc123"));
            assert_eq!(secrets.get("UNKNOWN"), None);
        });
    }

    #[test]
    fn test_secrets_missing_file() {
        let err = Secrets::load(Path::new("/nonexistent/secrets.toml")).unwrap_err();
        assert!(matches!(err, EnvError::SecretsRead { .. }));
    }

    #[test]
    fn test_secrets_reject_non_string_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "MAINNET_PRIVATE_KEY = 42").unwrap();

        let err = Secrets::load(file.path()).unwrap_err();
        assert!(matches!(err, EnvError::SecretsParse { .. }));
    }

    #[test]
    fn test_secrets_debug_lists_keys_only() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "MAINNET_PRIVATE_KEY = \"topsecret\"").unwrap();

        let secrets = Secrets::load(file.path()).unwrap();
        let debug = format!("{:?}", secrets);
        assert!(debug.contains("MAINNET_PRIVATE_KEY"));
        assert!(!debug.contains("topsecret"));
    }

    #[test]
    fn test_empty_secrets() {
        let file = NamedTempFile::new().unwrap();
        let secrets = Secrets::load(file.path()).unwrap();
        assert!(secrets.is_empty());
    }
}
