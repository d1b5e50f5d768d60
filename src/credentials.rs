use async_trait::async_trait;

use crate::error::{LumiereError, Result};

/// Capability for obtaining the Gemini API credential.
///
/// Supplied to the client at construction instead of being read from an
/// ambient global, so hosted-environment key pickers, fixed test keys, and
/// plain environment variables all plug in the same way.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Whether a usable credential is currently available.
    async fn has_credential(&self) -> bool;

    /// Produces the credential, interactively if the backing store supports
    /// it. Absence is a precondition failure, not something to retry.
    async fn request_credential(&self) -> Result<String>;
}

/// Reads the credential from the `GEMINI_API_KEY` environment variable.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn has_credential(&self) -> bool {
        std::env::var("GEMINI_API_KEY")
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }

    async fn request_credential(&self) -> Result<String> {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(LumiereError::CredentialError(
                "GEMINI_API_KEY is not set".to_string(),
            )),
        }
    }
}

/// Fixed credential, mainly for tests and embedding callers that manage
/// keys themselves.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    key: String,
}

impl StaticCredentialProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn has_credential(&self) -> bool {
        !self.key.trim().is_empty()
    }

    async fn request_credential(&self) -> Result<String> {
        if self.key.trim().is_empty() {
            return Err(LumiereError::CredentialError(
                "no API key configured".to_string(),
            ));
        }
        Ok(self.key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_round_trip() {
        let provider = StaticCredentialProvider::new("test-key");
        assert!(provider.has_credential().await);
        assert_eq!(provider.request_credential().await.unwrap(), "test-key");
    }

    #[tokio::test]
    async fn test_empty_static_provider_is_a_precondition_failure() {
        let provider = StaticCredentialProvider::new("  ");
        assert!(!provider.has_credential().await);
        let err = provider.request_credential().await.unwrap_err();
        assert!(matches!(err, LumiereError::CredentialError(_)));
    }
}
