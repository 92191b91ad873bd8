// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required field is missing, empty, or null.
    MissingRequiredField {
        /// The name of the missing field (wire-level camelCase name).
        field: String,
    },
    /// The driver pay type is not one of the recognized values.
    InvalidDriverPayType(String),
    /// The percentage rate is outside the valid range.
    InvalidPercentageRate {
        /// The rejected value.
        value: f64,
    },
    /// The PRO number is empty or invalid.
    InvalidProNumber(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField { field } => {
                write!(f, "Missing or invalid required field: {field}")
            }
            Self::InvalidDriverPayType(value) => {
                write!(f, "Invalid driverPayType: '{value}'")
            }
            Self::InvalidPercentageRate { value } => {
                write!(
                    f,
                    "Invalid percentageRate: {value}. Must be a decimal between 0 and 1, or null"
                )
            }
            Self::InvalidProNumber(msg) => write!(f, "Invalid PRO number: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
