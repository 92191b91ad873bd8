// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay-field selection rules for loads.
//!
//! A load carries pay-component fields that are mutually exclusive by
//! driver pay type: percentage-pay loads carry `linehaul` and `fsc`,
//! mileage-pay loads carry `fscPerLoadedMile`. Selection on create is
//! strict (the active branch's fields are required); selection on update
//! merges requested values over stored values and only forces the
//! inactive branch to null.

use crate::error::DomainError;
use crate::types::DriverPayType;
use serde::{Deserialize, Serialize};

/// The resolved pay-component fields for a load.
///
/// Exactly one branch is populated: `linehaul`/`fsc` for percentage pay,
/// `fsc_per_loaded_mile` for mileage pay. The inactive branch is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaySelection {
    /// The effective driver pay type.
    pub driver_pay_type: DriverPayType,
    /// Base linehaul pay (percentage pay only).
    pub linehaul: Option<f64>,
    /// Fuel surcharge (percentage pay only).
    pub fsc: Option<f64>,
    /// Fuel surcharge per loaded mile (mileage pay only).
    pub fsc_per_loaded_mile: Option<f64>,
}

/// Selects pay fields for a new load.
///
/// The fields of the active branch are required; the inactive branch is
/// forced to null.
///
/// # Arguments
///
/// * `driver_pay_type` - The declared pay type
/// * `linehaul` - Base linehaul pay, required for percentage pay
/// * `fsc` - Fuel surcharge, required for percentage pay
/// * `fsc_per_loaded_mile` - Per-mile surcharge, required for mileage pay
///
/// # Errors
///
/// Returns `DomainError::MissingRequiredField` naming the first missing
/// field of the active branch.
pub fn select_pay_fields_for_create(
    driver_pay_type: DriverPayType,
    linehaul: Option<f64>,
    fsc: Option<f64>,
    fsc_per_loaded_mile: Option<f64>,
) -> Result<PaySelection, DomainError> {
    match driver_pay_type {
        DriverPayType::Percentage => {
            let linehaul: f64 = linehaul.ok_or_else(|| DomainError::MissingRequiredField {
                field: String::from("linehaul"),
            })?;
            let fsc: f64 = fsc.ok_or_else(|| DomainError::MissingRequiredField {
                field: String::from("fsc"),
            })?;
            Ok(PaySelection {
                driver_pay_type,
                linehaul: Some(linehaul),
                fsc: Some(fsc),
                fsc_per_loaded_mile: None,
            })
        }
        DriverPayType::Mileage => {
            let fsc_per_loaded_mile: f64 =
                fsc_per_loaded_mile.ok_or_else(|| DomainError::MissingRequiredField {
                    field: String::from("fscPerLoadedMile"),
                })?;
            Ok(PaySelection {
                driver_pay_type,
                linehaul: None,
                fsc: None,
                fsc_per_loaded_mile: Some(fsc_per_loaded_mile),
            })
        }
    }
}

/// Selects pay fields for a load update.
///
/// The effective pay type is the requested one when provided, otherwise
/// the stored one. Within the active branch, requested values override
/// stored values; absent values keep what is stored. The inactive
/// branch is forced to null. Unlike create, the active branch's fields
/// are not required to be present.
///
/// # Arguments
///
/// * `stored_type` - The pay type currently stored on the load
/// * `requested_type` - The pay type from the update request, if any
/// * `stored` - Stored `(linehaul, fsc, fsc_per_loaded_mile)`
/// * `requested` - Requested `(linehaul, fsc, fsc_per_loaded_mile)`
#[must_use]
pub fn select_pay_fields_for_update(
    stored_type: DriverPayType,
    requested_type: Option<DriverPayType>,
    stored: (Option<f64>, Option<f64>, Option<f64>),
    requested: (Option<f64>, Option<f64>, Option<f64>),
) -> PaySelection {
    let driver_pay_type: DriverPayType = requested_type.unwrap_or(stored_type);
    let (stored_linehaul, stored_fsc, stored_fpm) = stored;
    let (requested_linehaul, requested_fsc, requested_fpm) = requested;

    match driver_pay_type {
        DriverPayType::Percentage => PaySelection {
            driver_pay_type,
            linehaul: requested_linehaul.or(stored_linehaul),
            fsc: requested_fsc.or(stored_fsc),
            fsc_per_loaded_mile: None,
        },
        DriverPayType::Mileage => PaySelection {
            driver_pay_type,
            linehaul: None,
            fsc: None,
            fsc_per_loaded_mile: requested_fpm.or(stored_fpm),
        },
    }
}
