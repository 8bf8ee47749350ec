use super::error::RequestError;
use crate::config::Config;
use crate::util;
use std::path::PathBuf;
use std::sync::Arc;

/* Supplies the bearer token for every request. The token itself is issued by the backend's login endpoint, which is
 * outside of this program. */
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Result<String, RequestError>;
}

pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token.filter(|t| !t.trim().is_empty()))
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Result<String, RequestError> {
        self.0.clone().ok_or(RequestError::TokenMissing)
    }
}

// Re-read on every request so that a token refreshed by some other program is picked up
pub struct TokenFile(PathBuf);

impl TokenFile {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }
}

impl CredentialProvider for TokenFile {
    fn bearer_token(&self) -> Result<String, RequestError> {
        let token = util::trim_newline(std::fs::read_to_string(&self.0)?);
        if token.trim().is_empty() {
            return Err(RequestError::TokenMissing);
        }
        Ok(token)
    }
}

pub fn from_config(config: &Config) -> Arc<dyn CredentialProvider> {
    match &config.token_file {
        Some(path) => Arc::new(TokenFile::new(path.clone())),
        None => Arc::new(StaticToken::new(config.token.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::{CredentialProvider, StaticToken, TokenFile};
    use crate::api::error::RequestError;
    use std::path::PathBuf;

    #[test]
    fn static_token() {
        assert_eq!(StaticToken::new(Some("abc".to_string())).bearer_token().unwrap(), "abc");
        assert!(matches!(StaticToken::new(None).bearer_token(), Err(RequestError::TokenMissing)));
        assert!(matches!(StaticToken::new(Some(" ".to_string())).bearer_token(), Err(RequestError::TokenMissing)));
    }

    #[test]
    fn token_file() {
        let path = PathBuf::from(format!("{}/test/config/folderaccess/token", env!("CARGO_MANIFEST_DIR")));
        assert_eq!(TokenFile::new(path).bearer_token().unwrap(), "1234");

        let missing = PathBuf::from(format!("{}/test/config/folderaccess/missing", env!("CARGO_MANIFEST_DIR")));
        assert!(matches!(TokenFile::new(missing).bearer_token(), Err(RequestError::IOError { .. })));
    }
}
