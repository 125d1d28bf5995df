use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/memeslug/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemeConfig {
    /// Root of the image service, used when assembling full image URLs.
    pub base_url: String,
    /// Extension appended to generated image URLs (the service also serves
    /// jpeg/png/gif).
    pub image_extension: String,
    /// Template used by `link` when none is given on the command line.
    #[serde(default)]
    pub default_template: Option<String>,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://memegen.link".to_string(),
            image_extension: "jpg".to_string(),
            default_template: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("memeslug")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MemeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MemeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<MemeConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: MemeConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MemeConfig::default();
        assert_eq!(cfg.base_url, "https://memegen.link");
        assert_eq!(cfg.image_extension, "jpg");
        assert!(cfg.default_template.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MemeConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MemeConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.image_extension, cfg.image_extension);
        assert_eq!(parsed.default_template, cfg.default_template);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_url = "http://localhost:5000"
            image_extension = "png"
            default_template = "iw"
        "#;
        let cfg: MemeConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_url, "http://localhost:5000");
        assert_eq!(cfg.image_extension, "png");
        assert_eq!(cfg.default_template.as_deref(), Some("iw"));
    }

    #[test]
    fn config_toml_default_template_optional() {
        let toml = r#"
            base_url = "http://localhost:5000"
            image_extension = "jpg"
        "#;
        let cfg: MemeConfig = toml::from_str(toml).unwrap();
        assert!(cfg.default_template.is_none());
    }

    #[test]
    fn load_from_reads_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let toml = toml::to_string_pretty(&MemeConfig::default()).unwrap();
        fs::write(&path, toml).unwrap();

        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.base_url, "https://memegen.link");
    }

    #[test]
    fn load_from_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = 42").unwrap();

        assert!(load_from(&path).is_err());
    }
}
