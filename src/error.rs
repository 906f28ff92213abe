use http::StatusCode;

use crate::{ErrorStack, Kind};

/// Trait for domain errors that can be converted to HTTP responses
///
/// The server layer reads status, type, and client message through this
/// seam, keeping domain errors decoupled from the transport framework.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `Record not found`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

impl HttpError for ErrorStack {
    fn status_code(&self) -> StatusCode {
        Self::status_code(self)
    }

    fn error_type(&self) -> &str {
        self.kind().map_or("Internal", Kind::as_str)
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_consumable_through_the_trait() {
        let stack = ErrorStack::not_found("row 42 missing");
        let err: &dyn HttpError = &stack;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), "Record not found");
        assert_eq!(err.client_message(), "row 42 missing");
    }

    #[test]
    fn empty_stack_reports_internal_defaults() {
        let empty = ErrorStack::default();
        assert_eq!(HttpError::status_code(&empty), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(empty.error_type(), "Internal");
        assert_eq!(empty.client_message(), "");
    }
}
