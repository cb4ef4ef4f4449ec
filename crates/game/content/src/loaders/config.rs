//! Game configuration loader.

use std::path::Path;

use skirmish_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GameConfig`] from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use skirmish_core::Position;

    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("map_width = 13").unwrap();
        assert_eq!(config.map_width, 13);
        assert_eq!(config.map_height, GameConfig::DEFAULT_MAP_SIZE);
        assert_eq!(config.summon_range, GameConfig::DEFAULT_SUMMON_RANGE);
    }

    #[test]
    fn obstacles_are_parsed_as_positions() {
        let config = ConfigLoader::parse(
            r#"
            summon_range = 2
            obstacles = [{ x = 5, y = 4 }, { x = 5, y = 6 }]
            "#,
        )
        .unwrap();
        assert_eq!(config.obstacles, vec![Position::new(5, 4), Position::new(5, 6)]);
        assert_eq!(config.summon_range, 2);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(ConfigLoader::parse("map_width = \"wide\"").is_err());
    }
}
