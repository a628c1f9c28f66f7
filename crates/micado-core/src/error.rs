use std::path::PathBuf;

use crate::profile::NumericField;

/// Result type used across the settings crate
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors raised while loading, saving or committing settings
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Settings file does not match the expected format: {message}")]
    Deserialization { message: String },

    #[error("Settings could not be serialized: {message}")]
    Serialization { message: String },

    #[error("No per-user application data directory on this platform")]
    NoDataDir,

    #[error("Invalid settings: {}", describe_fields(.0))]
    InvalidFields(Vec<NumericField>),
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn deserialization(message: impl ToString) -> Self {
        SettingsError::Deserialization {
            message: message.to_string(),
        }
    }
}

fn describe_fields(fields: &[NumericField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fields_message_lists_labels() {
        let error = SettingsError::InvalidFields(vec![NumericField::PunchRadius, NumericField::Resolution]);
        let message = error.to_string();
        assert!(message.contains("Punch Radius"));
        assert!(message.contains("Minimum Distance between Lines"));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let error = SettingsError::io(
            "/nowhere/current-settings.xml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(error.to_string().contains("current-settings.xml"));
    }
}
