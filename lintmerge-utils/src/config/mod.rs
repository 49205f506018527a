//! Configuration loading
//!
//! Configuration files may be written in TOML, JSON or YAML; the format is
//! picked from the file extension.

use serde::Deserialize;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let extension = path.extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yml" | "yaml" => Ok(Self::Yaml),
            _ => Err(crate::UtilError::Config(
                format!("Unsupported config format: '{}' ({})", extension, path.display())
            )),
        }
    }
}

/// Deserialize configuration text in the given format
pub fn parse_config_str<T>(content: &str, format: ConfigFormat) -> crate::Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    match format {
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| crate::UtilError::Config(format!("TOML parse error: {}", e))),
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| crate::UtilError::Config(format!("JSON parse error: {}", e))),
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| crate::UtilError::Config(format!("YAML parse error: {}", e))),
    }
}

/// Load configuration from file
pub fn load_config<T>(path: &Path) -> crate::Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let format = ConfigFormat::from_path(path)?;
    let content = crate::file::read_text_file(path)?;
    tracing::debug!("Loading {:?} configuration from {}", format, path.display());
    parse_config_str(&content, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct TestConfig {
        name: String,
        parallel: bool,
        items: Vec<String>,
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.JSON")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")).unwrap(), ConfigFormat::Yaml);
        assert!(ConfigFormat::from_path(Path::new("a.ini")).is_err());
    }

    #[test]
    fn test_load_toml() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("lintmerge.toml");

        std::fs::write(&config_path, r#"
name = "test"
parallel = true
items = ["x", "y"]
        "#)?;

        let config: TestConfig = load_config(&config_path)?;

        assert_eq!(config.name, "test");
        assert!(config.parallel);
        assert_eq!(config.items, vec!["x", "y"]);

        Ok(())
    }

    #[test]
    fn test_load_yaml_with_defaults() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("lintmerge.yaml");

        std::fs::write(&config_path, "name: partial\n")?;

        let config: TestConfig = load_config(&config_path)?;

        assert_eq!(config.name, "partial");
        assert!(!config.parallel);
        assert!(config.items.is_empty());

        Ok(())
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let result: crate::Result<TestConfig> = parse_config_str("{ not json", ConfigFormat::Json);
        assert!(matches!(result, Err(crate::UtilError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result: crate::Result<TestConfig> = load_config(Path::new("/nonexistent/lintmerge.toml"));
        assert!(result.unwrap_err().is_not_found());
    }
}
