// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a driver is paid for a load.
///
/// The pay type determines which pay-component fields a load carries:
/// percentage-pay loads carry `linehaul` and `fsc`, mileage-pay loads
/// carry `fscPerLoadedMile`. The fields of the unused branch are always
/// forced to null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DriverPayType {
    /// Driver is paid a percentage of linehaul plus fuel surcharge.
    #[default]
    Percentage,
    /// Driver is paid per loaded mile.
    Mileage,
}

impl FromStr for DriverPayType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(Self::Percentage),
            "mileage" => Ok(Self::Mileage),
            _ => Err(DomainError::InvalidDriverPayType(s.to_string())),
        }
    }
}

impl std::fmt::Display for DriverPayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DriverPayType {
    /// Converts this pay type to its wire/storage string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Mileage => "mileage",
        }
    }
}

/// A PRO number: the user-facing natural key for a load.
///
/// PRO numbers are carrier-assigned freight identifiers. They are treated
/// as opaque strings; the only domain rule is that they are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProNumber(String);

impl ProNumber {
    /// Creates a new PRO number.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw PRO number string; surrounding whitespace is trimmed
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed value is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidProNumber(String::from(
                "PRO number cannot be empty",
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the PRO number string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
