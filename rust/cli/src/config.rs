use serde::{Deserialize, Serialize};
use std::fs;

use headsup_engine::config::TableConfig;

pub const CONFIG_ENV: &str = "HEADSUP_CONFIG";
pub const SEED_ENV: &str = "HEADSUP_SEED";
pub const STACK_ENV: &str = "HEADSUP_STARTING_STACK";
pub const TURN_ENV: &str = "HEADSUP_TURN_SECONDS";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub table: TableConfig,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub min_raise: ValueSource,
    pub starting_stack: ValueSource,
    pub turn_seconds: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            min_raise: ValueSource::Default,
            starting_stack: ValueSource::Default,
            turn_seconds: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `HEADSUP_CONFIG`, then the
/// `HEADSUP_*` environment overrides. Empty variables are ignored.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.small_blind {
            cfg.table.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.table.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.min_raise {
            cfg.table.min_raise = v;
            sources.min_raise = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.table.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.turn_seconds {
            cfg.table.turn_seconds = v;
            sources.turn_seconds = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", SEED_ENV, seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var(STACK_ENV)
        && !stack.is_empty()
    {
        cfg.table.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", STACK_ENV, stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(secs) = std::env::var(TURN_ENV)
        && !secs.is_empty()
    {
        cfg.table.turn_seconds = secs
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", TURN_ENV, secs)))?;
        sources.turn_seconds = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    min_raise: Option<u32>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    turn_seconds: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    let t = &cfg.table;
    if t.small_blind == 0 || t.big_blind == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: blinds must be >0".into(),
        ));
    }
    if t.small_blind > t.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: small_blind must not exceed big_blind".into(),
        ));
    }
    if t.min_raise == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_raise must be >0".into(),
        ));
    }
    if t.starting_stack < t.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must cover the big blind".into(),
        ));
    }
    Ok(())
}
