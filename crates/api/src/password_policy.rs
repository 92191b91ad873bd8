// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! This module enforces password requirements for account registration.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// No password was supplied.
    #[error("Password is required")]
    Missing,

    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },
}

/// Password policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Validates a password against the policy.
    ///
    /// # Arguments
    ///
    /// * `password` - The password to validate, if one was supplied
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password is absent, empty,
    /// or does not meet the minimum length.
    pub fn validate(&self, password: Option<&str>) -> Result<(), PasswordPolicyError> {
        let password: &str = match password {
            Some(value) if !value.is_empty() => value,
            _ => return Err(PasswordPolicyError::Missing),
        };

        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        Ok(())
    }
}
