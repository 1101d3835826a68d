use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("'{}' is not a python module", .path.display())]
    NotAModule { path: PathBuf },

    #[error("'{}' directory is missing", .path.display())]
    MissingSubdirectory { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("{operation} failed on {}: {source}", .path.display())]
    FilesystemError {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn filesystem(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FilesystemError {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Errors raised before anything on disk was touched.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NotADirectory { .. }
                | Self::NotAModule { .. }
                | Self::MissingSubdirectory { .. }
                | Self::ConfigError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::TomlError(_)
        )
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_input_error() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
