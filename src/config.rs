use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::ocr::DEFAULT_TESSERACT_CMD;

// Environment variable names
pub const CATALOG_ENV_VAR: &str = "RECIPE_CATALOG";
pub const HOST_ENV_VAR: &str = "HOST";
pub const PORT_ENV_VAR: &str = "PORT";
pub const TESSERACT_ENV_VAR: &str = "TESSERACT_CMD";
pub const OCR_LANG_ENV_VAR: &str = "OCR_LANG";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON or CSV catalog to load instead of the built-in recipes.
    pub catalog_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub tesseract_cmd: String,
    pub ocr_language: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            tesseract_cmd: DEFAULT_TESSERACT_CMD.to_string(),
            ocr_language: None,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty(PORT_ENV_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} must be a port number, got '{}'", PORT_ENV_VAR, raw))?,
            None => defaults.port,
        };

        Ok(Self {
            catalog_path: non_empty(CATALOG_ENV_VAR).map(PathBuf::from),
            host: non_empty(HOST_ENV_VAR).unwrap_or(defaults.host),
            port,
            tesseract_cmd: non_empty(TESSERACT_ENV_VAR).unwrap_or(defaults.tesseract_cmd),
            ocr_language: non_empty(OCR_LANG_ENV_VAR),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() -> Result<()> {
        let config = AppConfig::from_lookup(lookup_from(&[]))?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 5000);
        Ok(())
    }

    #[test]
    fn test_reads_values() -> Result<()> {
        let config = AppConfig::from_lookup(lookup_from(&[
            (CATALOG_ENV_VAR, "recipes.json"),
            (PORT_ENV_VAR, " 8080 "),
            (HOST_ENV_VAR, "127.0.0.1"),
            (OCR_LANG_ENV_VAR, "spa"),
            (TESSERACT_ENV_VAR, ""),
        ]))?;
        assert_eq!(config.catalog_path, Some(PathBuf::from("recipes.json")));
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.ocr_language.as_deref(), Some("spa"));
        assert_eq!(config.tesseract_cmd, DEFAULT_TESSERACT_CMD);
        Ok(())
    }

    #[test]
    fn test_invalid_port() {
        let result = AppConfig::from_lookup(lookup_from(&[(PORT_ENV_VAR, "eighty")]));
        assert!(result.unwrap_err().to_string().contains("PORT must be a port number"));
    }
}
