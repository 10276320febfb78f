//! Loader for Sentalizer configuration with YAML + environment overlays.
//!
//! Precedence: `SENTALIZER_`-prefixed environment variables win over file
//! values, and `${VAR}` placeholders inside string values are expanded after
//! merging. Every field has a default, so running with no config file at all
//! is fine.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SentalizerConfig {
    pub fetch: FetchSettings,
    pub output: OutputSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retry budget for 429/5xx responses.
    pub retries: usize,
    pub user_agent: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            retries: 2,
            user_agent: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Report rendering format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log directory; `None` falls back to `SENTALIZER_LOG_DIR`, then the
    /// per-user data directory.
    pub dir: Option<String>,
    /// Duplicate log events to stderr.
    pub stderr: bool,
    /// `text` or `json`.
    pub format: LogEncoding,
    /// Default filter applied when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            dir: None,
            stderr: false,
            format: LogEncoding::Text,
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogEncoding {
    #[default]
    Text,
    Json,
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (YAML + env overrides).
pub struct SentalizerConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for SentalizerConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SentalizerConfigLoader {
    /// Start with the defaults: `SENTALIZER_` env overrides, nothing else.
    ///
    /// ```
    /// use sentalizer_config::{OutputFormat, SentalizerConfigLoader};
    ///
    /// let config = SentalizerConfigLoader::new().load().expect("defaults load");
    /// assert_eq!(config.fetch.timeout_secs, 15);
    /// assert_eq!(config.output.format, OutputFormat::Text);
    /// ```
    pub fn new() -> Self {
        let builder = Config::builder().add_source(
            Environment::with_prefix("SENTALIZER")
                .separator("__")
                .try_parsing(true),
        );
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use sentalizer_config::SentalizerConfigLoader;
    ///
    /// let config = SentalizerConfigLoader::new()
    ///     .with_yaml_str("fetch:\n  timeout_secs: 3\n  retries: 0")
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(config.fetch.timeout_secs, 3);
    /// assert_eq!(config.fetch.retries, 0);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// `${VAR}` placeholders are expanded (recursively, with a depth cap)
    /// before materialising the typed config.
    pub fn load(self) -> Result<SentalizerConfig, ConfigError> {
        let cfg = self.builder.build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: SentalizerConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}
