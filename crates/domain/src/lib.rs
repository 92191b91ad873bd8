// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dates;
mod error;
mod fuel_math;
mod pay;
mod settings;
mod types;

#[cfg(test)]
mod tests;

pub use dates::{format_timestamp, now_utc_iso, resolve_delivered_date};
pub use error::DomainError;
pub use fuel_math::{
    DIESEL_DISCOUNT_PER_GALLON, FUEL_CARD_SERVICE_CHARGE, FuelPurchase, FuelStopCosts,
    compute_fuel_stop_costs, round2,
};
pub use pay::{PaySelection, select_pay_fields_for_create, select_pay_fields_for_update};
pub use settings::validate_percentage_rate;
pub use types::{DriverPayType, ProNumber};
