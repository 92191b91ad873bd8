// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, validate_percentage_rate};

#[test]
fn test_rate_within_range_accepted() {
    assert!(validate_percentage_rate(0.0).is_ok());
    assert!(validate_percentage_rate(0.68).is_ok());
    assert!(validate_percentage_rate(1.0).is_ok());
}

#[test]
fn test_rate_above_one_rejected() {
    let result: Result<(), DomainError> = validate_percentage_rate(1.5);
    assert!(matches!(
        result,
        Err(DomainError::InvalidPercentageRate { .. })
    ));
}

#[test]
fn test_negative_rate_rejected() {
    let result: Result<(), DomainError> = validate_percentage_rate(-0.1);
    assert!(matches!(
        result,
        Err(DomainError::InvalidPercentageRate { .. })
    ));
}

#[test]
fn test_non_finite_rate_rejected() {
    assert!(validate_percentage_rate(f64::NAN).is_err());
    assert!(validate_percentage_rate(f64::INFINITY).is_err());
}
