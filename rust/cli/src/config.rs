//! Layered configuration: defaults, then a TOML file named by `PARLOR_CONFIG`,
//! then `PARLOR_*` environment variables, then command-line flags.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

use parlor_ai::STRATEGY_NAMES;
use parlor_engine::yahtzee::GAME_ROUNDS;

pub const ENV_CONFIG: &str = "PARLOR_CONFIG";
pub const ENV_SEED: &str = "PARLOR_SEED";
pub const ENV_PLAYERS: &str = "PARLOR_PLAYERS";
pub const ENV_ROUNDS: &str = "PARLOR_ROUNDS";
pub const ENV_STRATEGY: &str = "PARLOR_STRATEGY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub players: Vec<String>,
    /// Yahtzee rounds per game
    pub rounds: usize,
    /// Reroll strategy name
    pub strategy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub players: ValueSource,
    pub rounds: ValueSource,
    pub strategy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            players: ValueSource::Default,
            rounds: ValueSource::Default,
            strategy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            players: vec!["Alice".into(), "Bob".into(), "Diana".into()],
            rounds: GAME_ROUNDS,
            strategy: "baseline".into(),
        }
    }
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub players: Option<Vec<String>>,
    pub rounds: Option<usize>,
    pub strategy: Option<String>,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load(overrides: &Overrides) -> Result<Config, ConfigError> {
    load_with_sources(overrides).map(|resolved| resolved.config)
}

pub fn load_with_sources(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var(ENV_PLAYERS)
        && !players.is_empty()
    {
        cfg.players = split_names(&players);
        sources.players = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var(ENV_ROUNDS)
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid rounds: {}", rounds)))?;
        sources.rounds = ValueSource::Env;
    }
    if let Ok(strategy) = std::env::var(ENV_STRATEGY)
        && !strategy.is_empty()
    {
        cfg.strategy = strategy;
        sources.strategy = ValueSource::Env;
    }

    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = &overrides.players {
        cfg.players = v.clone();
        sources.players = ValueSource::Cli;
    }
    if let Some(v) = overrides.rounds {
        cfg.rounds = v;
        sources.rounds = ValueSource::Cli;
    }
    if let Some(v) = &overrides.strategy {
        cfg.strategy = v.clone();
        sources.strategy = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    players: Option<Vec<String>>,
    #[serde(default)]
    rounds: Option<usize>,
    #[serde(default)]
    strategy: Option<String>,
}

/// Splits a comma-separated list of names, dropping blanks.
pub fn split_names(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect()
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: at least one player is required".into(),
        ));
    }
    if cfg.players.iter().any(|n| n.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player names must not be blank".into(),
        ));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = cfg.players.iter().find(|n| !seen.insert(n.as_str())) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: duplicate player name {}",
            dup
        )));
    }
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >=1".into(),
        ));
    }
    let strategy = cfg.strategy.trim().to_ascii_lowercase();
    if !STRATEGY_NAMES.contains(&strategy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown strategy {} (expected one of: {})",
            cfg.strategy,
            STRATEGY_NAMES.join(", ")
        )));
    }
    Ok(())
}
