//! Error handling for the application
//!
//! The estimation engine itself never fails on user input: missing or
//! invalid selections are absences and clamped values, not errors. This type
//! covers the ambient failures around the engine (terminal I/O,
//! configuration, JSON export).

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_carries_its_message() {
        let err = AppError::Config("RENOCOST_CONTACT_URL must be an http(s) URL".to_string());
        assert!(err.to_string().contains("RENOCOST_CONTACT_URL"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
