use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ConfigError, PaletteError};
use crate::palette::Palette;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "PIXEL_PAINT_CONFIG";

/// Largest accepted `cell_size`, in points
pub const MAX_CELL_SIZE: f32 = 256.0;

const DEFAULT_PALETTE: &[&str] = &[
    "white", "black", "grey", "yellow", "red", "blue", "green", "brown", "pink", "orange", "purple",
];

/// Settings for a paint session and the desktop shell around it.
///
/// Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cells per side
    pub dimension: usize,
    /// Color of a blank cell; must be in the palette
    pub background: Color,
    pub palette: Vec<Color>,
    /// Color selected at startup; must be in the palette
    pub initial_color: Color,
    /// Key the canvas is persisted under
    pub storage_key: String,
    /// On-screen size of a cell in points
    pub cell_size: f32,
    /// Where "Export PNG" writes to
    pub export_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dimension: 25,
            background: Color::from("white"),
            palette: DEFAULT_PALETTE.iter().map(|name| Color::from(*name)).collect(),
            initial_color: Color::from("black"),
            storage_key: "pixel_paint.canvas".to_owned(),
            cell_size: 24.0,
            export_path: PathBuf::from("canvas.png"),
        }
    }
}

impl SessionConfig {
    /// Reads and validates a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let config: SessionConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by `PIXEL_PAINT_CONFIG`, or the defaults if it is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::Invalid("dimension must be at least 1".into()));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        if self.cell_size > MAX_CELL_SIZE {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be at most {}",
                MAX_CELL_SIZE
            )));
        }

        let palette = Palette::new(self.palette.clone())?;
        if !palette.contains(&self.background) {
            return Err(PaletteError::MissingBackground(self.background.clone()).into());
        }
        if !palette.contains(&self.initial_color) {
            return Err(PaletteError::MissingInitialColor(self.initial_color.clone()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config_file(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("pixel_paint.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dimension, 25);
        assert_eq!(config.palette.len(), 11);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"dimension": 8}"#).unwrap();
        assert_eq!(config.dimension, 8);
        assert_eq!(config.background, Color::from("white"));
    }

    #[test]
    fn test_background_must_be_in_palette() {
        let config = SessionConfig {
            palette: vec![Color::from("black")],
            ..SessionConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_dimension_invalid() {
        let config = SessionConfig {
            dimension: 0,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cell_size_is_capped() {
        let config = SessionConfig {
            cell_size: 1.0e9,
            ..SessionConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = SessionConfig {
            cell_size: MAX_CELL_SIZE,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_config_file(
            dir.path(),
            r#"{"dimension": 12, "initial_color": "red", "export_path": "out.png"}"#,
        );

        let config = SessionConfig::load(&path).unwrap();
        assert_eq!(config.dimension, 12);
        assert_eq!(config.initial_color, Color::from("red"));
        assert_eq!(config.export_path, PathBuf::from("out.png"));
        assert_eq!(config.background, Color::from("white"));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_config_file(dir.path(), r#"{"initial_color": "teal"}"#);
        assert!(matches!(
            SessionConfig::load(&path),
            Err(ConfigError::Invalid(_))
        ));

        let path = create_test_config_file(dir.path(), "{ not json");
        assert!(matches!(SessionConfig::load(&path), Err(ConfigError::Parse(_))));

        assert!(matches!(
            SessionConfig::load(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_from_env_reads_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_config_file(dir.path(), r#"{"dimension": 7}"#);

        // Only this test touches the variable
        unsafe { std::env::set_var(CONFIG_ENV_VAR, &path) };
        let loaded = SessionConfig::from_env();
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

        assert_eq!(loaded.unwrap().dimension, 7);
        assert_eq!(SessionConfig::from_env().unwrap(), SessionConfig::default());
    }
}
