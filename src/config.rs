use std::path::Path;

use tracing::warn;

use crate::ai::DEFAULT_EASY_RANDOM_PROBABILITY;
use crate::error::ConfigError;
use crate::game::Difficulty;

/// Deepest search a difficulty may request.
pub const MAX_DEPTH: u32 = 8;

/// Search depth used for each difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DifficultyDepths {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl Default for DifficultyDepths {
    fn default() -> Self {
        DifficultyDepths {
            easy: 1,
            medium: 3,
            hard: 5,
        }
    }
}

/// Search behaviour shared by every difficulty.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Chance that a depth-1 search is replaced by a random column.
    pub easy_random_probability: f64,
    /// Score root columns on separate threads.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            easy_random_probability: DEFAULT_EASY_RANDOM_PROBABILITY,
            parallel: false,
        }
    }
}

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: DifficultyDepths,
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let depths = &self.difficulty;
        for (name, depth) in [
            ("easy", depths.easy),
            ("medium", depths.medium),
            ("hard", depths.hard),
        ] {
            if depth == 0 {
                return Err(ConfigError::Validation(format!(
                    "difficulty.{name} must be >= 1"
                )));
            }
            if depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "difficulty.{name} must be <= {MAX_DEPTH}"
                )));
            }
        }
        if depths.easy > depths.medium || depths.medium > depths.hard {
            return Err(ConfigError::Validation(
                "difficulty depths must satisfy easy <= medium <= hard".into(),
            ));
        }

        let p = self.search.easy_random_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Validation(
                "search.easy_random_probability must be in [0, 1]".into(),
            ));
        }

        Ok(())
    }

    /// Search depth for a difficulty tier.
    pub fn depth_for(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.difficulty.easy,
            Difficulty::Medium => self.difficulty.medium,
            Difficulty::Hard => self.difficulty.hard,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.depth_for(Difficulty::Easy), 1);
        assert_eq!(config.depth_for(Difficulty::Medium), 3);
        assert_eq!(config.depth_for(Difficulty::Hard), 5);
        assert_eq!(config.search.easy_random_probability, 0.5);
        assert!(!config.search.parallel);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[difficulty]
hard = 6
"#;
        let config: EngineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.difficulty.hard, 6);
        assert_eq!(config.difficulty.easy, 1);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = EngineConfig::default();
        config.difficulty.easy = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = EngineConfig::default();
        config.difficulty.hard = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unordered_depths() {
        let mut config = EngineConfig::default();
        config.difficulty.medium = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_probability() {
        let mut config = EngineConfig::default();
        config.search.easy_random_probability = 1.5;
        assert!(config.validate().is_err());
        config.search.easy_random_probability = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            EngineConfig::load_or_default(Path::new("nonexistent_engine_config.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[difficulty]
medium = 4

[search]
parallel = true
"#
        )
        .unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.depth_for(Difficulty::Medium), 4);
        assert!(config.search.parallel);
        assert_eq!(config.search.easy_random_probability, 0.5);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "[search]\neasy_random_probability = 2.0\n").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[difficulty\n").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = EngineConfig::default_toml();
        let config: EngineConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, EngineConfig::default());
    }
}
