use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Root configuration structure, deserialized from `.cc-legalcode/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Which records get static routes.
    #[serde(default)]
    pub distill: DistillConfig,
    /// Header metadata for generated `.po` catalogs.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize)]
pub struct DistillConfig {
    /// License versions that are not published. Defaults to everything before 4.0.
    #[serde(default = "default_excluded_versions")]
    pub excluded_versions: Vec<String>,
}

fn default_excluded_versions() -> Vec<String> {
    ["1.0", "2.0", "2.1", "2.5", "3.0"]
        .iter()
        .map(|v| v.to_string())
        .collect()
}

impl Default for DistillConfig {
    fn default() -> Self {
        DistillConfig {
            excluded_versions: default_excluded_versions(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_project_id_version")]
    pub project_id_version: String,
    /// Language code written to the catalog header; empty for a template.
    #[serde(default)]
    pub language: String,
}

fn default_project_id_version() -> String {
    "cc-legalcode".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            project_id_version: default_project_id_version(),
            language: String::new(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<working_dir>/.cc-legalcode/config.toml`
/// 3. `~/.config/cc-legalcode/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = working_dir.join(".cc-legalcode").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("cc-legalcode").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Could not parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.distill.excluded_versions.len(), 5);
        assert!(cfg.distill.excluded_versions.contains(&"2.5".to_string()));
        assert_eq!(cfg.catalog.project_id_version, "cc-legalcode");
        assert!(cfg.catalog.language.is_empty());
    }

    #[test]
    fn test_override_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[distill]").unwrap();
        writeln!(f, "excluded_versions = [\"1.0\"]").unwrap();
        writeln!(f, "[catalog]").unwrap();
        writeln!(f, "language = \"nl\"").unwrap();

        let cfg = load_config(Path::new("."), Some(f.path())).unwrap();
        assert_eq!(cfg.distill.excluded_versions, vec!["1.0".to_string()]);
        assert_eq!(cfg.catalog.language, "nl");
        assert_eq!(cfg.catalog.project_id_version, "cc-legalcode");
    }

    #[test]
    fn test_project_config_is_found() {
        let dir = tempdir().unwrap();
        let cfg_dir = dir.path().join(".cc-legalcode");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(cfg_dir.join("config.toml"), "[distill]\nexcluded_versions = []\n").unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert!(cfg.distill.excluded_versions.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[distill").unwrap();
        assert!(load_config(Path::new("."), Some(f.path())).is_err());
    }
}
