use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_SHARES, DEFAULT_THRESHOLD, DEFAULT_WORD_COUNT, ENV_PREFIX,
};
use crate::error::Result;

/// Defaults for the command line front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScruxConfig {
    config_path: PathBuf,
    pub threshold: usize,
    pub shares: usize,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordlist: Option<PathBuf>,
}

impl ScruxConfig {
    /// Loads `<path>/conf.toml`, layered with `SCRUX_*` environment variables.
    ///
    /// The directory and a default `conf.toml` are created on first use.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref().to_path_buf();

        if !config_path.exists() {
            fs::create_dir_all(&config_path)?;
        }

        let config_path = config_path.canonicalize()?;
        let conf_file = config_path.join(CONFIG_FILE_NAME);
        if !conf_file.exists() {
            let defaults = ScruxConfig::defaults(config_path.clone());
            let toml = toml::to_string_pretty(&defaults)
                .map_err(|err| ConfigError::Foreign(Box::new(err)))?;
            fs::write(&conf_file, toml)?;
            debug!("📝 Wrote default config to {:#?}", conf_file);
        }

        let settings = Config::builder()
            .add_source(config::File::from(conf_file.as_path()))
            // Eg.. `SCRUX_THRESHOLD=3 ./target/scrux split ...`
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let mut loaded = ScruxConfig::try_from(settings)?;
        loaded.config_path = config_path;
        debug!("📝 Loaded config at path: {:#?}", loaded.config_path);
        Ok(loaded)
    }

    fn defaults(config_path: PathBuf) -> Self {
        ScruxConfig {
            config_path,
            threshold: DEFAULT_THRESHOLD,
            shares: DEFAULT_SHARES,
            word_count: DEFAULT_WORD_COUNT,
            wordlist: None,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

impl TryFrom<Config> for ScruxConfig {
    type Error = ConfigError;

    fn try_from(config: Config) -> std::result::Result<Self, Self::Error> {
        let wordlist = match config.get_string("wordlist") {
            Ok(path) => Some(PathBuf::from(path)),
            Err(ConfigError::NotFound(_)) => None,
            Err(err) => return Err(err),
        };
        let config_path = match config.get_string("config_path") {
            Ok(path) => PathBuf::from(path),
            Err(ConfigError::NotFound(_)) => PathBuf::new(),
            Err(err) => return Err(err),
        };

        Ok(ScruxConfig {
            config_path,
            threshold: get_count(&config, "threshold", DEFAULT_THRESHOLD)?,
            shares: get_count(&config, "shares", DEFAULT_SHARES)?,
            word_count: get_count(&config, "word_count", DEFAULT_WORD_COUNT)?,
            wordlist,
        })
    }
}

fn get_count(config: &Config, key: &str, default: usize) -> std::result::Result<usize, ConfigError> {
    match config.get_int(key) {
        Ok(value) => usize::try_from(value)
            .map_err(|_| ConfigError::Message(format!("{key} must not be negative, got {value}"))),
        Err(ConfigError::NotFound(_)) => Ok(default),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_creates_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(".scrux");

        let config = ScruxConfig::new(&path).unwrap();
        assert!(path.join(CONFIG_FILE_NAME).exists());
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.shares, DEFAULT_SHARES);
        assert_eq!(config.word_count, DEFAULT_WORD_COUNT);
        assert_eq!(config.wordlist, None);
        assert_eq!(config.config_path(), path.canonicalize().unwrap());
    }

    #[test]
    fn test_reads_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "threshold = 3\nshares = 5\nword_count = 24\nwordlist = \"/usr/share/bip39/english.txt\"\n",
        )
        .unwrap();

        let config = ScruxConfig::new(dir.path()).unwrap();
        assert_eq!(config.threshold, 3);
        assert_eq!(config.shares, 5);
        assert_eq!(config.word_count, 24);
        assert_eq!(
            config.wordlist,
            Some(PathBuf::from("/usr/share/bip39/english.txt"))
        );
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "shares = 7\n").unwrap();

        let config = ScruxConfig::new(dir.path()).unwrap();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.shares, 7);
    }

    #[test]
    fn test_negative_count_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "threshold = -1\n").unwrap();

        let err = ScruxConfig::new(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
