//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! framework: data/csf-2.0-framework.json
//! lenient: false
//! strict: false
//! log_level: info
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.
//! A relative `framework` path is resolved against the config file's
//! directory when it exists there.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use csf_framework::LoadMode;

/// Settings read from the config file, merged with global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Framework export to load when no path is given on the command line.
    pub framework: Option<PathBuf>,
    /// Skip invalid records instead of aborting the load.
    pub lenient: bool,
    /// Treat advisory integrity findings as failures in `validate`.
    pub strict: bool,
    /// Log filter used when no `-v` flag is given (e.g. `info`, `csf=debug`).
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config: CliConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.framework = config
                .framework
                .map(|framework| crate::resolve_path(&framework, base));
        }
        Ok(config)
    }

    /// Load `path` when given, otherwise defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Record handling for the bulk loader.
    pub fn load_mode(&self) -> LoadMode {
        if self.lenient {
            LoadMode::Lenient
        } else {
            LoadMode::Strict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert!(config.framework.is_none());
        assert_eq!(config.load_mode(), LoadMode::Strict);
        assert!(!config.strict);
    }

    #[test]
    fn load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("csf.json"), "{}").unwrap();
        let path = dir.path().join("csf.yaml");
        std::fs::write(
            &path,
            "framework: csf.json\nlenient: true\nstrict: true\nlog_level: debug\n",
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.framework, Some(dir.path().join("csf.json")));
        assert_eq!(config.load_mode(), LoadMode::Lenient);
        assert!(config.strict);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn missing_framework_relative_to_config_kept_as_given() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csf.yaml");
        std::fs::write(&path, "framework: elsewhere/csf.json\n").unwrap();
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.framework, Some(PathBuf::from("elsewhere/csf.json")));
    }

    #[test]
    fn empty_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csf.yaml");
        std::fs::write(&path, "{}\n").unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csf.yaml");
        std::fs::write(&path, "framwork: typo.json\n").unwrap();
        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"));
    }

    #[test]
    fn missing_file() {
        let err = CliConfig::load(Path::new("/tmp/csf-test-nonexistent-config.yaml")).unwrap_err();
        assert!(format!("{err}").contains("failed to read config file"));
    }

    #[test]
    fn optional_none_is_default() {
        assert_eq!(CliConfig::load_optional(None).unwrap(), CliConfig::default());
    }
}
