// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation rules for per-user pay settings.

use crate::error::DomainError;

/// Validates a percentage pay rate.
///
/// Rates are stored as fractions: 0.68 means 68%. A rate outside the
/// closed interval [0, 1] (or a non-finite value) is rejected.
///
/// # Errors
///
/// Returns `DomainError::InvalidPercentageRate` if the rate is out of range.
pub fn validate_percentage_rate(value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(DomainError::InvalidPercentageRate { value });
    }
    Ok(())
}
