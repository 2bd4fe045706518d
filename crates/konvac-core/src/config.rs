use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KonvacError, KonvacResult};

/// Default CDN location of the Konva runtime used by generated host pages.
pub const DEFAULT_KONVA_URL: &str = "https://unpkg.com/konva@9/konva.min.js";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Wrap the compiled program in a standalone HTML page.
    pub html: bool,
    pub konva_url: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            html: false,
            konva_url: DEFAULT_KONVA_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject documents the emitted program could not express before compiling.
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String, // EnvFilter directive, e.g. "info" or "konvac_codegen=debug"
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct KonvacConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl KonvacConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load_from_file(path: &Path) -> KonvacResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents).map_err(|e| KonvacError::config(e.to_string(), path))
    }

    pub fn save_to_file(&self, path: &Path) -> KonvacResult<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| KonvacError::config(e.to_string(), path))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
