#[cfg(feature = "clap")]
use clap::Parser;
use rand::SeedableRng;
use rand_wyrand::WyRand;
use serde::{Deserialize, Serialize};

use crate::{Error, Grid, Pos};

/// Config for a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Config {
    /// Seed of the maze
    pub seed: u64,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Cell the carving starts from
    pub start: Pos,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 0,
            width: 10,
            height: 10,
            start: [0, 0],
        }
    }
}

impl Config {
    /// Generate the maze described by this config
    ///
    /// ```
    /// use maze_carver::Config;
    ///
    /// let config = Config { seed: 3, width: 4, height: 6, ..Default::default() };
    /// assert_eq!(config.generate().unwrap(), config.generate().unwrap());
    /// ```
    pub fn generate(&self) -> Result<Grid, Error> {
        let mut rng = WyRand::seed_from_u64(self.seed);
        crate::generate(self.width, self.height, &mut rng, self.start)
    }
}

/// Partial config for a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(Parser))]
pub struct PartialConfig {
    /// Seed of the maze
    #[cfg_attr(feature = "clap", clap(long))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of columns
    #[cfg_attr(feature = "clap", clap(long))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Number of rows
    #[cfg_attr(feature = "clap", clap(long))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    /// Cell the carving starts from
    #[cfg_attr(feature = "clap", clap(skip))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Pos>,
}
impl PartialConfig {
    pub fn merge(self, other: PartialConfig) -> Self {
        Self {
            seed: other.seed.or(self.seed),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            start: other.start.or(self.start),
        }
    }
    pub fn or_defaults(self) -> Config {
        let default = Config::default();
        Config {
            seed: self.seed.unwrap_or(default.seed),
            width: self.width.unwrap_or(default.width),
            height: self.height.unwrap_or(default.height),
            start: self.start.unwrap_or(default.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, PartialConfig};

    #[test]
    fn later_values_win() {
        let file = PartialConfig {
            seed: Some(1),
            width: Some(20),
            ..Default::default()
        };
        let args = PartialConfig {
            seed: Some(2),
            height: Some(15),
            ..Default::default()
        };
        assert_eq!(
            file.merge(args).or_defaults(),
            Config {
                seed: 2,
                width: 20,
                height: 15,
                start: [0, 0]
            }
        )
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(PartialConfig::default().or_defaults(), Config::default())
    }

    #[test]
    fn from_toml() {
        let config: PartialConfig = toml::from_str("seed = 9\nstart = [1, 2]\n").unwrap();
        assert_eq!(
            config,
            PartialConfig {
                seed: Some(9),
                start: Some([1, 2]),
                ..Default::default()
            }
        )
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = Config {
            width: 0,
            ..Default::default()
        };
        assert!(config.generate().is_err())
    }
}
