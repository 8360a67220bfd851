use std::path::PathBuf;

use crate::store::default_state_dir;

pub const ENV_LOGO: &str = "JAMBO_LOGO";
pub const ENV_OUTPUT_DIR: &str = "JAMBO_OUTPUT_DIR";
pub const ENV_SHARE_COMMAND: &str = "JAMBO_SHARE_COMMAND";
pub const ENV_STATE_DIR: &str = "JAMBO_STATE_DIR";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Logo path or `http(s)://` URL.
    pub logo: Option<String>,
    pub output_dir: PathBuf,
    pub share_command: Option<String>,
    /// `None` disables form-state persistence.
    pub state_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            logo: get(ENV_LOGO),
            output_dir: get(ENV_OUTPUT_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            share_command: get(ENV_SHARE_COMMAND),
            state_dir: get(ENV_STATE_DIR)
                .map(PathBuf::from)
                .or_else(default_state_dir),
        }
    }
}
