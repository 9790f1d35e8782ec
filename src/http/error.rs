//! API error taxonomy.
//!
//! Two classes of failure reach clients: input validation (HTTP 400 with an
//! operation-specific message) and unexpected internal faults (HTTP 500 with
//! a generic message). Neither is ever fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::ops::{OpError, Operation};

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/non-numeric operand or domain violation.
    #[error("{}", .operation.rejection_message())]
    InvalidInput {
        operation: Operation,
        #[source]
        source: OpError,
    },

    /// Unexpected fault while handling a request.
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn invalid_input(operation: Operation, source: OpError) -> Self {
        Self::InvalidInput { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_a_400_with_the_operation_message() {
        let err = ApiError::invalid_input(Operation::Divide, OpError::ZeroDivisor);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid input parameters for division");
    }

    #[test]
    fn internal_fault_is_a_500_with_a_generic_message() {
        assert_eq!(ApiError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Internal.to_string(), "Internal Server Error");
    }
}
