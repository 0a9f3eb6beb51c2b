use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use serde::Deserialize;

/// Wrapper for sensitive strings with redacted Debug/Display.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Pluggable secret retrieval backend.
pub trait VaultProvider: Send + Sync {
    fn get_secret(
        &self,
        key: &str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Option<String>>> + Send + '_>>;
}

/// Vault backend that reads secrets from environment variables.
pub struct EnvVaultProvider;

impl VaultProvider for EnvVaultProvider {
    fn get_secret(
        &self,
        key: &str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Option<String>>> + Send + '_>> {
        let key = key.to_owned();
        Box::pin(async move { Ok(std::env::var(&key).ok()) })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SecretsFileError {
    #[error("failed to read secrets file: {0}")]
    Read(std::io::Error),
    #[error("malformed line {line} in secrets file (expected KEY=VALUE)")]
    Malformed { line: usize },
}

/// Vault backend that reads `KEY=VALUE` lines from a dotenv-style file.
///
/// A missing file yields an empty vault, matching the behavior users expect
/// from optional `secrets.env` files. `#` comments and blank lines are
/// ignored; values may be wrapped in single or double quotes.
pub struct DotenvVaultProvider {
    secrets: HashMap<String, String>,
}

impl fmt::Debug for DotenvVaultProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotenvVaultProvider")
            .field("secrets", &format_args!("[{} secrets]", self.secrets.len()))
            .finish()
    }
}

impl DotenvVaultProvider {
    /// Parse a dotenv-style secrets file.
    ///
    /// # Errors
    ///
    /// Returns [`SecretsFileError`] when the file exists but cannot be read,
    /// or when a non-comment line has no `=` separator.
    pub fn load(path: &Path) -> Result<Self, SecretsFileError> {
        if !path.exists() {
            return Ok(Self {
                secrets: HashMap::new(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(SecretsFileError::Read)?;
        let mut secrets = HashMap::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or(SecretsFileError::Malformed { line: idx + 1 })?;
            secrets.insert(key.trim().to_owned(), unquote(value.trim()).to_owned());
        }
        Ok(Self { secrets })
    }
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

impl VaultProvider for DotenvVaultProvider {
    fn get_secret(
        &self,
        key: &str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Option<String>>> + Send + '_>> {
        let value = self.secrets.get(key).cloned();
        Box::pin(async move { Ok(value) })
    }
}

/// Resolve a secret by name, trying each backend in order.
///
/// # Errors
///
/// Propagates the first backend failure.
pub async fn resolve_secret(
    key: &str,
    backends: &[&dyn VaultProvider],
) -> anyhow::Result<Option<Secret>> {
    for backend in backends {
        if let Some(value) = backend.get_secret(key).await? {
            return Ok(Some(Secret::new(value)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn secret_debug_is_redacted() {
        let s = Secret::new("super-secret");
        assert_eq!(format!("{s:?}"), "[REDACTED]");
        assert_eq!(format!("{s}"), "[REDACTED]");
    }

    #[test]
    fn missing_file_is_empty_vault() {
        let vault = DotenvVaultProvider::load(Path::new("/nonexistent/secrets.env")).unwrap();
        assert_eq!(vault.secrets.len(), 0);
    }

    #[test]
    fn parses_keys_comments_and_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.env");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            "# credentials\nOPENAI_API_KEY=sk-abc123\n\nOTHER = \"quoted value\"\nSINGLE='x'\n"
        )
        .unwrap();

        let vault = DotenvVaultProvider::load(&path).unwrap();
        assert_eq!(vault.secrets["OPENAI_API_KEY"], "sk-abc123");
        assert_eq!(vault.secrets["OTHER"], "quoted value");
        assert_eq!(vault.secrets["SINGLE"], "x");
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.env");
        std::fs::write(&path, "GOOD=1\nnot a pair\n").unwrap();

        let err = DotenvVaultProvider::load(&path).unwrap_err();
        assert!(matches!(err, SecretsFileError::Malformed { line: 2 }));
    }

    #[tokio::test]
    async fn resolve_prefers_earlier_backend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.env");
        std::fs::write(&path, "KEY=from-file\n").unwrap();
        let file_vault = DotenvVaultProvider::load(&path).unwrap();

        unsafe { std::env::set_var("PLANWRIGHT_TEST_KEY_ORDER", "from-env") };
        let env_vault = EnvVaultProvider;
        let got = resolve_secret("PLANWRIGHT_TEST_KEY_ORDER", &[&env_vault, &file_vault])
            .await
            .unwrap();
        unsafe { std::env::remove_var("PLANWRIGHT_TEST_KEY_ORDER") };
        assert_eq!(got.unwrap().expose(), "from-env");

        let got = resolve_secret("KEY", &[&env_vault, &file_vault])
            .await
            .unwrap();
        assert_eq!(got.unwrap().expose(), "from-file");
    }

    #[tokio::test]
    async fn resolve_none_when_absent_everywhere() {
        let got = resolve_secret("PLANWRIGHT_TEST_KEY_ABSENT", &[&EnvVaultProvider])
            .await
            .unwrap();
        assert!(got.is_none());
    }
}
