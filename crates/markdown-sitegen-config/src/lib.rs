use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where a site's sources live and where output goes.
///
/// Keys missing from the config file fall back to [`SiteConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory of markdown pages.
    pub content_path: PathBuf,
    /// Directory mirrored verbatim into the output.
    pub static_path: PathBuf,
    /// Output directory, replaced on every build.
    pub public_path: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from("content"),
            static_path: PathBuf::from("static"),
            public_path: PathBuf::from("public"),
            template_path: PathBuf::from("template.html"),
        }
    }
}

impl SiteConfig {
    pub const FILE_NAME: &'static str = "markdown-sitegen.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config.expanded()))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// Config file in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }

    /// Expand shell variables and tilde in every path
    fn expanded(self) -> Self {
        let expand = |path: PathBuf| Self::expand_path(&path).unwrap_or(path);
        Self {
            content_path: expand(self.content_path),
            static_path: expand(self.static_path),
            public_path: expand(self.public_path),
            template_path: expand(self.template_path),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        assert_eq!(
            SiteConfig::config_path(),
            PathBuf::from("markdown-sitegen.toml")
        );
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.content_path, PathBuf::from("content"));
        assert_eq!(config.static_path, PathBuf::from("static"));
        assert_eq!(config.public_path, PathBuf::from("public"));
        assert_eq!(config.template_path, PathBuf::from("template.html"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = SiteConfig {
            content_path: PathBuf::from("/tmp/site/content"),
            ..SiteConfig::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: SiteConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: SiteConfig = toml::from_str(r#"public_path = "docs""#).unwrap();

        assert_eq!(config.public_path, PathBuf::from("docs"));
        assert_eq!(config.content_path, PathBuf::from("content"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = SiteConfig::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("SITEGEN_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$SITEGEN_TEST_VAR/subdir");
        let expanded = SiteConfig::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("SITEGEN_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = SiteConfig::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = SiteConfig::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("bad.toml");
        std::fs::write(&config_file, "content_path = [unclosed").unwrap();

        let result = SiteConfig::load_from_path(&config_file);

        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/markdown-sitegen.toml");
        let test_config = SiteConfig {
            public_path: PathBuf::from("/tmp/site/out"),
            template_path: PathBuf::from("/tmp/site/layout.html"),
            ..SiteConfig::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = SiteConfig::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("SITE_ROOT", "/custom/site");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("markdown-sitegen.toml");
        std::fs::write(&config_file, r#"content_path = "$SITE_ROOT/pages""#).unwrap();

        let config = SiteConfig::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.content_path, PathBuf::from("/custom/site/pages"));

        unsafe {
            env::remove_var("SITE_ROOT");
        }
    }
}
