use thiserror::Error;

use crate::color::Color;

/// Errors raised by the grid model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimension must be at least 1")]
    InvalidDimension,

    #[error("cell ({row}, {col}) is outside a {dimension}x{dimension} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("snapshot is {found}x{found} but the grid is {expected}x{expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised while building a palette
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,

    #[error("color `{0}` appears more than once in the palette")]
    Duplicate(Color),

    #[error("background color `{0}` is not in the palette")]
    MissingBackground(Color),

    #[error("initial color `{0}` is not in the palette")]
    MissingInitialColor(Color),
}

/// Errors surfaced by the paint session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("color `{0}` is not in the palette")]
    UnknownColor(Color),
}

/// Result type for paint session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Reasons a saved canvas could not be restored. The grid is untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("no saved canvas found")]
    Missing,

    #[error("saved canvas is {found}x{found} but the session is {expected}x{expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("saved canvas is unreadable: {0}")]
    Corrupt(String),

    #[error("failed to read saved canvas: {0}")]
    Storage(String),
}

impl From<GridError> for LoadError {
    fn from(error: GridError) -> Self {
        match error {
            GridError::DimensionMismatch { expected, found } => {
                LoadError::DimensionMismatch { expected, found }
            }
            other => LoadError::Corrupt(other.to_string()),
        }
    }
}

/// Errors that can occur while writing a snapshot
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key `{0}`")]
    InvalidKey(String),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<PaletteError> for ConfigError {
    fn from(error: PaletteError) -> Self {
        ConfigError::Invalid(error.to_string())
    }
}

/// Errors that can occur while exporting the canvas as an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("cell size must be at least one pixel")]
    InvalidCellSize,

    #[error("image would be {0} pixels wide, the limit is {max}", max = crate::export::MAX_EXPORT_SIDE)]
    TooLarge(u64),
}
