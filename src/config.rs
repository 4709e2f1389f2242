use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::extractor::ExtractOptions;
use crate::models::MimeType;

/// Root configuration structure, deserialized from `.license-literals/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extraction behaviour.
    pub extract: ExtractOptions,
    /// File walking limits.
    pub scan: ScanConfig,
    /// Extension (without the dot) to MIME string, e.g. `h = "text/x-c++"`.
    /// Takes precedence over the built-in extension table.
    pub mime: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Files larger than this are skipped without being read.
    pub max_file_bytes: u64,
    /// Follow symbolic links while walking directories.
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            follow_links: false,
        }
    }
}

impl Config {
    /// MIME overrides resolved to [`MimeType`]; unknown MIME strings are kept
    /// as [`MimeType::Unknown`] so the extension is deliberately ignored.
    pub fn mime_overrides(&self) -> HashMap<String, MimeType> {
        self.mime
            .iter()
            .map(|(ext, mime)| {
                (
                    ext.trim_start_matches('.').to_ascii_lowercase(),
                    MimeType::from_mime(mime),
                )
            })
            .collect()
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<root>/.license-literals/config.toml`
/// 3. `~/.config/license-literals/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = root.join(".license-literals").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-literals")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}
