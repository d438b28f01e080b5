use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("Query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Connection failures are recovered by skipping the rest of the run.
    pub fn is_connection(&self) -> bool {
        matches!(self, ReportError::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        assert_eq!(
            ReportError::Config("DB_NAME must be set".to_string()).to_string(),
            "Invalid configuration: DB_NAME must be set"
        );
    }

    #[test]
    fn connection_error_display_is_the_driver_message() {
        let err: ReportError =
            diesel::ConnectionError::BadConnection("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.is_connection());
    }

    #[test]
    fn query_error_maps_to_query_variant() {
        let err: ReportError = diesel::result::Error::NotFound.into();
        assert!(matches!(err, ReportError::Query(_)));
        assert!(!err.is_connection());
    }

    #[test]
    fn io_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ReportError = io.into();
        assert_eq!(err.to_string(), "Failed to write report: read-only");
    }
}
