use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::{debug, warn};

static CONFIG: OnceLock<TaskConfig> = OnceLock::new();

/// How to reach the documentation build tool.
///
/// Every task runs `program args... <subcommand>` with `env` added to the
/// inherited environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    pub program: String,
    pub args: Vec<String>,
    pub env: IndexMap<String, String>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            program: "go".to_string(),
            args: vec![
                "run".to_string(),
                "github.com/jcbhmr/go-bikeshed/cmd/bikeshed".to_string(),
            ],
            env: IndexMap::new(),
        }
    }
}

impl TaskConfig {
    pub fn from_file(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path);
                return TaskConfig::default();
            }
            Err(err) => {
                warn!("Fail to read {}: {err}", path);
                warn!("Fall back to default config");
                return TaskConfig::default();
            }
        };

        Self::from_toml(&content).unwrap_or_else(|err| {
            warn!("Fail to deserialize config file {}: {err}", path);
            warn!("Fall back to default config");
            TaskConfig::default()
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<TaskConfig>(content)
    }
}

pub fn set_config(cfg: TaskConfig) {
    CONFIG.set(cfg).expect("Config already set");
}

pub fn config() -> &'static TaskConfig {
    CONFIG.get().expect("Config not initialized")
}
