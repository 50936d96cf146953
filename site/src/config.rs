//! Configuration file support for the prerender tool.
//!
//! `site.toml` in the working directory is optional; a file named with
//! `--config` must exist. Every key has a default.

use std::path::{Path, PathBuf};

use laswg_landing::RenderOptions;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory the rendered files are written to
    pub out_dir: PathBuf,
    /// Stylesheet href for the prerendered `<head>`; empty disables it
    pub stylesheet: String,
    /// Fixed copyright year; the current year when unset
    pub copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            stylesheet: "/tailwind.css".to_string(),
            copyright_year: None,
        }
    }
}

/// Config file picked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

impl SiteConfig {
    /// Load `path` if given, else `site.toml` when present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from `path`, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            year: self.copyright_year.unwrap_or(defaults.year),
            stylesheet: (!self.stylesheet.is_empty()).then(|| self.stylesheet.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.stylesheet, "/tailwind.css");
        assert_eq!(config.copyright_year, None);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("typo.toml");

        let err = SiteConfig::load_from_path(&path).expect_err("missing file");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("typo.toml"));

        let err = SiteConfig::load(Some(&path)).expect_err("named file must exist");
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("site.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
out_dir = "public"
copyright_year = 2031
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&path).expect("valid config");
        assert_eq!(config.out_dir, PathBuf::from("public"));
        assert_eq!(config.copyright_year, Some(2031));
        // unset keys keep their defaults
        assert_eq!(config.stylesheet, "/tailwind.css");
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("site.toml");
        std::fs::write(&path, "copyright_year = \"soon\"").expect("write config");

        let err = SiteConfig::load_from_path(&path).expect_err("type mismatch");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("site.toml"));
    }

    #[test]
    fn test_render_options() {
        let config = SiteConfig {
            copyright_year: Some(2030),
            ..Default::default()
        };
        let options = config.render_options();
        assert_eq!(options.year, 2030);
        assert_eq!(options.stylesheet.as_deref(), Some("/tailwind.css"));

        let bare = SiteConfig {
            stylesheet: String::new(),
            ..Default::default()
        };
        assert_eq!(bare.render_options().stylesheet, None);
        assert_eq!(bare.render_options().year, laswg_landing::current_year());
    }
}
