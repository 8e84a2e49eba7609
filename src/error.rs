//! Error types and handling for the `TripPlan` application
//!
//! The planning core itself is total and never returns these; they cover the
//! edges around it: configuration, loading the attraction catalog, and I/O.

use thiserror::Error;

/// Main error type for the `TripPlan` application
#[derive(Error, Debug)]
pub enum TripPlanError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Catalog loading errors (missing columns, unusable dataset)
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Malformed CSV data
    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripPlanError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripPlanError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            TripPlanError::Catalog { message } => {
                format!("Could not load the attraction catalog: {message}")
            }
            TripPlanError::Csv { .. } => {
                "The attraction dataset is not valid CSV. Please check the data file.".to_string()
            }
            TripPlanError::Io { .. } => {
                "File operation failed. Please check the data path and file permissions."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripPlanError::config("unknown month");
        assert!(matches!(config_err, TripPlanError::Config { .. }));

        let catalog_err = TripPlanError::catalog("missing City column");
        assert!(matches!(catalog_err, TripPlanError::Catalog { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TripPlanError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let catalog_err = TripPlanError::catalog("missing City column");
        assert!(catalog_err.user_message().contains("missing City column"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let plan_err: TripPlanError = io_err.into();
        assert!(matches!(plan_err, TripPlanError::Io { .. }));
        assert!(plan_err.to_string().contains("file not found"));
    }
}
