// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fuel-stop cost arithmetic.
//!
//! This module provides the pure, deterministic cost computation for a
//! fuel stop: diesel cost with an optional per-gallon discount, optional
//! DEF (diesel exhaust fluid) cost, and the stop total including the
//! fuel-card service charge. All derived figures are rounded to two
//! decimal places (currency cents).

use serde::{Deserialize, Serialize};

/// Per-gallon diesel discount applied when the purchase is discount-eligible.
pub const DIESEL_DISCOUNT_PER_GALLON: f64 = 0.05;

/// Flat service charge added when a fuel card was used for the purchase.
pub const FUEL_CARD_SERVICE_CHARGE: f64 = 1.00;

/// Inputs for a fuel-stop cost computation.
///
/// Quantities and prices are not range-checked here. Presence of required
/// fields is the API layer's concern; this calculator only encodes the
/// arithmetic rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelPurchase {
    /// Gallons of diesel purchased.
    pub gallons_diesel: f64,
    /// Pump price of diesel per gallon.
    pub price_diesel: f64,
    /// Gallons of DEF purchased, if any.
    pub gallons_def: Option<f64>,
    /// Pump price of DEF per gallon, if any.
    pub price_def: Option<f64>,
    /// Whether a fuel card was used (incurs the service charge).
    pub fuel_card_used: bool,
    /// Whether the purchase qualifies for the per-gallon diesel discount.
    pub discount_eligible: bool,
}

/// Derived costs for a fuel stop, each rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelStopCosts {
    /// Total diesel cost after any discount.
    pub total_diesel_cost: f64,
    /// Total DEF cost, or 0 when no DEF was purchased.
    pub total_def_cost: f64,
    /// Total cost of the stop including the fuel-card service charge.
    pub total_fuel_stop: f64,
}

/// Rounds a currency amount to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the derived costs for a fuel stop.
///
/// Rules:
///
/// 1. A per-gallon discount of [`DIESEL_DISCOUNT_PER_GALLON`] applies to
///    diesel when `discount_eligible` is set.
/// 2. `total_diesel_cost = round2((price_diesel - discount) * gallons_diesel)`.
/// 3. DEF cost applies only when both DEF gallons and DEF price are present
///    and strictly positive; otherwise it is 0.
/// 4. `total_fuel_stop` is the sum of the rounded diesel and DEF costs plus
///    the [`FUEL_CARD_SERVICE_CHARGE`] when a fuel card was used, rounded
///    again to two decimals.
#[must_use]
pub fn compute_fuel_stop_costs(purchase: &FuelPurchase) -> FuelStopCosts {
    let diesel_discount: f64 = if purchase.discount_eligible {
        DIESEL_DISCOUNT_PER_GALLON
    } else {
        0.0
    };

    let total_diesel_cost: f64 =
        round2((purchase.price_diesel - diesel_discount) * purchase.gallons_diesel);

    let total_def_cost: f64 = match (purchase.gallons_def, purchase.price_def) {
        (Some(gallons), Some(price)) if gallons > 0.0 && price > 0.0 => round2(price * gallons),
        _ => 0.0,
    };

    let service_charge: f64 = if purchase.fuel_card_used {
        FUEL_CARD_SERVICE_CHARGE
    } else {
        0.0
    };

    let total_fuel_stop: f64 = round2(total_diesel_cost + total_def_cost + service_charge);

    FuelStopCosts {
        total_diesel_cost,
        total_def_cost,
        total_fuel_stop,
    }
}
