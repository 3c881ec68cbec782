use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use tracing::warn;

use crate::error::{PaletteError, Result};

/// Runtime settings for the palette.
///
/// Sources, later ones winning: built-in defaults, `notepalette.{toml,yaml,json}`
/// in the app root, then `NOTEPALETTE_*` environment variables (a `.env`
/// file is loaded into the environment first).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    /// 0.0 accepts only perfect fuzzy matches, 1.0 accepts anything.
    pub threshold: f64,

    /// Highlighted runs shorter than this are not reported.
    pub min_match_char_length: usize,

    /// Fuzzy terms are cut to this many characters.
    pub max_pattern_length: usize,

    pub max_results: Option<usize>,

    /// Pressed together with Ctrl/Cmd to show or hide the palette.
    pub toggle_key: char,

    /// Shown in the page footer next to the version.
    pub signature: Option<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            min_match_char_length: 2,
            max_pattern_length: 32,
            max_results: None,
            toggle_key: 'k',
            signature: None,
        }
    }
}

impl PaletteConfig {
    pub fn load() -> Result<Self> {
        // 1. Standard dotenv discovery from the current dir
        let cwd_env = dotenvy::dotenv();
        // A NOTEPALETTE_ROOT from that file decides where the rest is read from.
        let root = crate::path_utils::get_app_root();

        if let Err(e) = cwd_env {
            if !e.not_found() {
                warn!(error = %e, "failed to load .env from the current directory");
            }
            // 2. Fallback: the app root
            load_root_dotenv(&root);
        }

        let builder = Self::defaults()?
            .add_source(File::with_name(&root.join("notepalette").to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("NOTEPALETTE").try_parsing(true));

        Self::build(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let d = Self::default();
        Ok(Config::builder()
            .set_default("threshold", d.threshold)?
            .set_default("min_match_char_length", d.min_match_char_length as u64)?
            .set_default("max_pattern_length", d.max_pattern_length as u64)?
            .set_default("toggle_key", d.toggle_key.to_string())?)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(PaletteError::InvalidConfig(format!(
                "threshold must be between 0 and 1, got {}",
                self.threshold
            )));
        }
        if self.min_match_char_length == 0 {
            return Err(PaletteError::InvalidConfig(
                "min_match_char_length must be at least 1".to_string(),
            ));
        }
        if self.max_pattern_length == 0 {
            return Err(PaletteError::InvalidConfig(
                "max_pattern_length must be at least 1".to_string(),
            ));
        }
        if !self.toggle_key.is_alphanumeric() {
            return Err(PaletteError::InvalidConfig(format!(
                "toggle_key must be a letter or digit, got {:?}",
                self.toggle_key
            )));
        }
        // Ctrl+C always quits.
        if self.toggle_key.eq_ignore_ascii_case(&'c') {
            return Err(PaletteError::InvalidConfig("toggle_key 'c' is reserved".to_string()));
        }
        Ok(())
    }
}

/// Loads `<root>/.env` into the environment. Returns whether it was loaded.
fn load_root_dotenv(root: &Path) -> bool {
    let path = root.join(".env");
    if !path.exists() {
        return false;
    }
    match dotenvy::from_path(&path) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load .env");
            false
        }
    }
}
