//! Settings file support.
//!
//! Every field has a default, so an empty or partial TOML file is valid.
//! Command-line flags are applied on top of the loaded values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pv_annotation::ClientConfig;
use pv_render::RenderConfig;
use pv_structure::ExtractOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `[annotation]`: EBI Proteins API connection.
    pub annotation: ClientConfig,
    /// `[genome]`: feature table layout.
    pub genome: ExtractOptions,
    /// `[render]`: script locations for HTML pages.
    pub render: RenderConfig,
}

impl Settings {
    /// Load settings from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let settings =
            Self::from_toml(&text).with_context(|| format!("parse config {}", path.display()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_annotation::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
    use pv_structure::{DEFAULT_FEATURES_PER_GROUP, GenomeLayout};

    #[test]
    fn empty_file_is_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.annotation.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.annotation.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(settings.annotation.user_agent.starts_with("proteinvista/"));
        assert_eq!(settings.genome.features_per_group, DEFAULT_FEATURES_PER_GROUP);
        assert_eq!(settings.genome.layout, GenomeLayout::Structure);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            [annotation]
            timeout_secs = 5

            [genome]
            layout = "demo"
            "#,
        )
        .unwrap();
        assert_eq!(settings.annotation.timeout_secs, 5);
        assert_eq!(settings.annotation.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.genome.layout, GenomeLayout::Demo);
        assert_eq!(settings.genome.features_per_group, DEFAULT_FEATURES_PER_GROUP);
        assert_eq!(settings.render, RenderConfig::default());
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(Settings::from_toml("[plot]\nwidth = 3\n").is_err());
    }

    #[test]
    fn bad_layout_is_rejected() {
        assert!(Settings::from_toml("[genome]\nlayout = \"spiral\"\n").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/proteinvista.toml"))).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }
}
