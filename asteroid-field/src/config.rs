use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use thiserror::Error;
use crate::game_mode::Level;

pub const DEFAULT_CONFIG_PATH: &str = "asteroid-field.ron";

/// Upper bound for the number of large asteroids a level may start with.
pub const MAX_LEVEL_ASTEROIDS: usize = 40;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError
    },
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub assets_root: PathBuf,
    pub starting_health: i32,
    pub collision_damage: i32,
    pub level_asteroid_counts: [usize; 3],
    pub small_asteroid_capacity: usize,
    pub star_count: usize,
    pub seed: Option<u64>
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("GUI"),
            starting_health: 100,
            collision_damage: 1,
            level_asteroid_counts: [5, 10, 20],
            small_asteroid_capacity: 40,
            star_count: 1024,
            seed: None
        }
    }
}

impl GameConfig {
    /// Picks the config source: an explicit path must exist, the default file is optional.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit_path {
            Some(path) => Self::read_from_path(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::read_from_path(default_path)
                } else {
                    log::info!("no {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn read_from_path(path: &Path) -> Result<Self, ConfigError> {
        let mut bytes = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::parse(&bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source
        })?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ron::error::SpannedError> {
        ron::de::from_bytes(bytes)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for &count in &self.level_asteroid_counts {
            if !(1..=MAX_LEVEL_ASTEROIDS).contains(&count) {
                return Err(ConfigError::Invalid {
                    field: "level_asteroid_counts",
                    reason: format!("{} is outside 1..={}", count, MAX_LEVEL_ASTEROIDS)
                });
            }
        }
        if self.small_asteroid_capacity < 1 {
            return Err(invalid("small_asteroid_capacity", "must be at least 1"));
        }
        if self.star_count < 1 {
            return Err(invalid("star_count", "must be at least 1"));
        }
        if self.collision_damage < 1 {
            return Err(invalid("collision_damage", "must be at least 1"));
        }
        if self.starting_health < 1 {
            return Err(invalid("starting_health", "must be at least 1"));
        }
        Ok(())
    }

    pub fn asteroids_for(&self, level: Level) -> usize {
        self.level_asteroid_counts[level.index()]
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_string() }
}
