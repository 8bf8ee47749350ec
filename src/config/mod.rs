pub mod config_error;
pub mod paths;

pub use config_error::ConfigError;
pub use paths::DataPath;

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://file-system-black.vercel.app/";
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Default, Deserialize)]
pub struct ConfigBuilder {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub token_file: Option<String>,
    pub profile: Option<String>,
    pub data_dir: Option<String>,
}

impl ConfigBuilder {
    // A missing config file is not an error, everything has a default
    pub fn load() -> Result<Self, ConfigError> {
        match fs::read_to_string(paths::config_file()) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn api_url<S: Into<String>>(mut self, api_url: S) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn profile<S: Into<String>>(mut self, profile: S) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let mut api_url = self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        // Url::join() would otherwise replace the last path segment of the base
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        let api_url = Url::parse(&api_url)?;

        let data_dir = match self.data_dir {
            Some(dir) => PathBuf::from(expand(&dir)),
            None => paths::default_data_dir(),
        };

        Ok(Config {
            api_url,
            token: self.token,
            token_file: self.token_file.map(|f| PathBuf::from(expand(&f))),
            profile: self.profile.unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
            data_dir,
        })
    }
}

fn expand(path: &str) -> String {
    shellexpand::full(path).map(|p| p.into_owned()).unwrap_or_else(|_| path.to_string())
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: Url,
    pub token: Option<String>,
    pub token_file: Option<PathBuf>,
    pub profile: String,
    data_dir: PathBuf,
}

impl Config {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    pub fn profile_dir(&self) -> PathBuf {
        let mut path = self.data_dir();
        path.push(&self.profile);
        path
    }

    pub fn api_host(&self) -> &str {
        self.api_url.host_str().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigBuilder, ConfigError, DEFAULT_API_URL};

    #[test]
    fn read_token() -> Result<(), ConfigError> {
        let config = ConfigBuilder::load()?.build()?;
        assert_eq!(config.token, Some("1234".to_string()));
        assert_eq!(config.profile, "testprofile");
        assert_eq!(config.api_url.as_str(), "http://localhost:5000/");
        Ok(())
    }

    #[test]
    fn defaults() -> Result<(), ConfigError> {
        let config = ConfigBuilder::default().build()?;
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.profile, "default");
        assert!(config.token.is_none());
        assert!(config.token_file.is_none());
        Ok(())
    }

    #[test]
    fn api_url_gets_trailing_slash() -> Result<(), ConfigError> {
        let config = ConfigBuilder::default().api_url("https://files.example.com/api").build()?;
        assert_eq!(config.api_url.join("file/getAllFolders").unwrap().as_str(), "https://files.example.com/api/file/getAllFolders");
        assert_eq!(config.api_host(), "files.example.com");
        Ok(())
    }

    #[test]
    fn invalid_api_url() {
        let res = ConfigBuilder::default().api_url("not a url").build();
        assert!(matches!(res, Err(ConfigError::InvalidUrl { .. })));
    }
}
