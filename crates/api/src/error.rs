// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use haul_ledger_domain::DomainError;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed. This is the client-facing
        /// message, so it stays deliberately vague for credential and
        /// token failures.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "{reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// The `Display` rendering of each variant is the exact message sent to
/// clients; the server layer maps variants to HTTP status codes.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Authentication failed (401).
    AuthenticationFailed {
        /// The client-facing reason.
        reason: String,
    },
    /// A required field is missing, empty, or null (400).
    MissingField {
        /// The wire-level name of the missing field.
        field: String,
    },
    /// A required field is missing from a fuel-stop payload (400).
    ///
    /// Fuel-stop endpoints use a different message wording than load
    /// endpoints, so this is a distinct variant.
    MissingPayloadField {
        /// The wire-level name of the missing field.
        field: String,
    },
    /// Invalid input was provided (400).
    InvalidInput {
        /// The client-facing description of the error.
        message: String,
    },
    /// A requested resource was not found or is owned by another user (404).
    ResourceNotFound {
        /// The client-facing description of what was not found.
        message: String,
    },
    /// The request conflicts with existing state (409).
    Conflict {
        /// The client-facing description of the conflict.
        message: String,
    },
    /// Password policy violation (400).
    PasswordPolicyViolation {
        /// The client-facing description of the policy violation.
        message: String,
    },
    /// An internal error occurred (500).
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => write!(f, "{reason}"),
            Self::MissingField { field } => {
                write!(f, "Missing or invalid required field: {field}")
            }
            Self::MissingPayloadField { field } => {
                write!(f, "Missing required field from payload: {field}")
            }
            Self::InvalidInput { message }
            | Self::ResourceNotFound { message }
            | Self::Conflict { message }
            | Self::PasswordPolicyViolation { message }
            | Self::Internal { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly to clients.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingRequiredField { field } => ApiError::MissingField { field },
        DomainError::InvalidDriverPayType(_) => ApiError::InvalidInput {
            message: String::from("Invalid driverPayType"),
        },
        DomainError::InvalidPercentageRate { .. } => ApiError::InvalidInput {
            message: String::from(
                "Invalid percentageRate. Must be a decimal between 0 and 1, or null.",
            ),
        },
        DomainError::InvalidProNumber(message) => ApiError::InvalidInput { message },
    }
}
