/// Directory holding `conf.toml`, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = ".scrux";

pub const CONFIG_FILE_NAME: &str = "conf.toml";

/// Prefix for environment overrides, e.g. `SCRUX_THRESHOLD=3`.
pub const ENV_PREFIX: &str = "SCRUX";

pub const DEFAULT_THRESHOLD: usize = 2;
pub const DEFAULT_SHARES: usize = 3;
pub const DEFAULT_WORD_COUNT: usize = 12;
