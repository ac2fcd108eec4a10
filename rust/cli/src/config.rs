//! Session configuration: defaults, optional `holdem.toml`, and
//! `HOLDEM_*` environment overrides, in that precedence order.

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Starting stack per seat
    pub starting_stack: u32,
    /// Number of bot opponents
    pub bots: usize,
    /// Big-blind size
    pub blind: u32,
    /// Session seed; `None` means a random seed per session
    pub seed: Option<u64>,
    /// Cosmetic delay between bot actions, milliseconds
    pub pace_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: 1_000,
            bots: 2,
            blind: 20,
            seed: None,
            pace_ms: 600,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: Vec<(&'static str, ValueSource)>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {}", e),
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

/// Partial file/env layer; unset fields fall through to the defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    starting_stack: Option<u32>,
    bots: Option<usize>,
    blind: Option<u32>,
    seed: Option<u64>,
    pace_ms: Option<u64>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut config = Config::default();
    let mut sources: Vec<(&'static str, ValueSource)> = vec![
        ("starting_stack", ValueSource::Default),
        ("bots", ValueSource::Default),
        ("blind", ValueSource::Default),
        ("seed", ValueSource::Default),
        ("pace_ms", ValueSource::Default),
    ];

    if let Ok(text) = fs::read_to_string("holdem.toml") {
        let overlay: ConfigOverlay = toml::from_str(&text)?;
        apply(&mut config, &mut sources, overlay, ValueSource::File)?;
    }

    let env_overlay = ConfigOverlay {
        starting_stack: env_u32("HOLDEM_STARTING_STACK")?,
        bots: env_u32("HOLDEM_BOTS")?.map(|v| v as usize),
        blind: env_u32("HOLDEM_BLIND")?,
        seed: env_u64("HOLDEM_SEED")?,
        pace_ms: env_u64("HOLDEM_PACE_MS")?,
    };
    apply(&mut config, &mut sources, env_overlay, ValueSource::Env)?;

    validate(&config)?;
    Ok(ConfigResolved { config, sources })
}

fn apply(
    config: &mut Config,
    sources: &mut [(&'static str, ValueSource)],
    overlay: ConfigOverlay,
    from: ValueSource,
) -> Result<(), ConfigError> {
    let mut mark = |name: &str, sources: &mut [(&'static str, ValueSource)]| {
        if let Some(entry) = sources.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = from;
        }
    };
    if let Some(v) = overlay.starting_stack {
        config.starting_stack = v;
        mark("starting_stack", sources);
    }
    if let Some(v) = overlay.bots {
        config.bots = v;
        mark("bots", sources);
    }
    if let Some(v) = overlay.blind {
        config.blind = v;
        mark("blind", sources);
    }
    if let Some(v) = overlay.seed {
        config.seed = Some(v);
        mark("seed", sources);
    }
    if let Some(v) = overlay.pace_ms {
        config.pace_ms = v;
        mark("pace_ms", sources);
    }
    Ok(())
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.bots < 1 || config.bots > 8 {
        return Err(ConfigError::Invalid("bots must be 1-8".to_string()));
    }
    if config.blind < 2 {
        return Err(ConfigError::Invalid("blind must be at least 2".to_string()));
    }
    if config.starting_stack < config.blind {
        return Err(ConfigError::Invalid(
            "starting_stack must cover the blind".to_string(),
        ));
    }
    Ok(())
}

fn env_u32(key: &str) -> Result<Option<u32>, ConfigError> {
    match std::env::var(key) {
        Ok(v) => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{} must be a number", key))),
        Err(_) => Ok(None),
    }
}

fn env_u64(key: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(key) {
        Ok(v) => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{} must be a number", key))),
        Err(_) => Ok(None),
    }
}
