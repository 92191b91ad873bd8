// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! All DTOs use wire-level camelCase field names. Request fields are
//! optional so that presence validation (and its exact error messages)
//! stays in the handlers rather than in serde.
//!
//! Update requests distinguish "field absent" from "field explicitly
//! null" where the contract requires it, using `Option<Option<T>>`:
//! `None` means the key was absent, `Some(None)` means the key was
//! present with a null value.

use haul_ledger_persistence::{FuelStopData, LoadData, UserSettingsData};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a field into `Option<Option<T>>` so that an explicit
/// null is distinguishable from an absent key.
///
/// Used together with `#[serde(default)]`: absent keys take the default
/// `None`, present keys (null included) become `Some(...)`.
///
/// # Errors
///
/// Returns an error if the value is present but not deserializable as `T`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// API request to register a new account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// The display name for the account.
    pub username: Option<String>,
    /// The login email address.
    pub email: Option<String>,
    /// The plain-text password.
    pub password: Option<String>,
}

/// API response for a successful registration.
///
/// A session is created during registration so the new user is logged
/// in immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// A success message.
    pub message: String,
    /// The new account's user ID.
    pub user_id: i64,
    /// The session token for the new account.
    pub token: String,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The login email address.
    pub email: Option<String>,
    /// The plain-text password.
    pub password: Option<String>,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The session token.
    pub token: String,
}

/// API request to create a new load.
///
/// Which pay-component fields are required depends on `driverPayType`:
/// percentage pay requires `linehaul` and `fsc`, mileage pay requires
/// `fscPerLoadedMile`. The financial summary fields (`calculatedGross`,
/// `calculatedDeductions`, `projectedNet`, the deduction rates) are
/// client-computed and stored verbatim.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateLoadRequest {
    pub pro_number: Option<String>,
    pub date_dispatched: Option<String>,
    pub date_delivered: Option<String>,
    pub origin_city: Option<String>,
    pub origin_state: Option<String>,
    pub destination_city: Option<String>,
    pub destination_state: Option<String>,
    pub deadhead_miles: Option<f64>,
    pub loaded_miles: Option<f64>,
    pub weight: Option<f64>,
    pub driver_pay_type: Option<String>,
    pub linehaul: Option<f64>,
    pub fsc: Option<f64>,
    pub fsc_per_loaded_mile: Option<f64>,
    pub scale_cost: Option<f64>,
    pub calculated_gross: Option<f64>,
    pub calculated_deductions: Option<f64>,
    pub projected_net: Option<f64>,
    pub fuel_road_use_tax: Option<f64>,
    pub maintenance_reserve: Option<f64>,
    pub bond_deposit: Option<f64>,
    pub mrp_fee: Option<f64>,
}

/// API request to update an existing load.
///
/// Absent fields keep their stored values. `dateDelivered` uses
/// explicit-null semantics: sending null (or an unparseable date)
/// marks the load active again, while omitting the key leaves the
/// delivery state untouched.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateLoadRequest {
    pub date_dispatched: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub date_delivered: Option<Option<String>>,
    pub origin_city: Option<String>,
    pub origin_state: Option<String>,
    pub destination_city: Option<String>,
    pub destination_state: Option<String>,
    pub deadhead_miles: Option<f64>,
    pub loaded_miles: Option<f64>,
    pub weight: Option<f64>,
    pub driver_pay_type: Option<String>,
    pub linehaul: Option<f64>,
    pub fsc: Option<f64>,
    pub fsc_per_loaded_mile: Option<f64>,
    pub scale_cost: Option<f64>,
    pub calculated_gross: Option<f64>,
    pub calculated_deductions: Option<f64>,
    pub projected_net: Option<f64>,
    pub fuel_road_use_tax: Option<f64>,
    pub maintenance_reserve: Option<f64>,
    pub bond_deposit: Option<f64>,
    pub mrp_fee: Option<f64>,
}

/// A load as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadInfo {
    /// The load's numeric identifier.
    pub id: i64,
    /// The PRO number (user-facing natural key).
    pub pro_number: String,
    /// The owning user's ID.
    pub user_id: i64,
    pub date_dispatched: String,
    /// Delivery timestamp; null while the load is active.
    pub date_delivered: Option<String>,
    pub origin_city: String,
    pub origin_state: String,
    pub destination_city: String,
    pub destination_state: String,
    pub deadhead_miles: f64,
    pub loaded_miles: f64,
    pub weight: f64,
    pub driver_pay_type: String,
    pub linehaul: Option<f64>,
    pub fsc: Option<f64>,
    pub fsc_per_loaded_mile: Option<f64>,
    pub scale_cost: f64,
    pub calculated_gross: Option<f64>,
    pub total_deductions: Option<f64>,
    pub projected_net: Option<f64>,
    pub fuel_road_use_tax: Option<f64>,
    pub maintenance_reserve: Option<f64>,
    pub bond_deposit: Option<f64>,
    pub mrp_fee: Option<f64>,
    pub created_at: String,
}

impl From<LoadData> for LoadInfo {
    fn from(data: LoadData) -> Self {
        Self {
            id: data.load_id,
            pro_number: data.pro_number,
            user_id: data.user_id,
            date_dispatched: data.date_dispatched,
            date_delivered: data.date_delivered,
            origin_city: data.origin_city,
            origin_state: data.origin_state,
            destination_city: data.destination_city,
            destination_state: data.destination_state,
            deadhead_miles: data.deadhead_miles,
            loaded_miles: data.loaded_miles,
            weight: data.weight,
            driver_pay_type: data.driver_pay_type,
            linehaul: data.linehaul,
            fsc: data.fsc,
            fsc_per_loaded_mile: data.fsc_per_loaded_mile,
            scale_cost: data.scale_cost,
            calculated_gross: data.calculated_gross,
            total_deductions: data.total_deductions,
            projected_net: data.projected_net,
            fuel_road_use_tax: data.fuel_road_use_tax,
            maintenance_reserve: data.maintenance_reserve,
            bond_deposit: data.bond_deposit,
            mrp_fee: data.mrp_fee,
            created_at: data.created_at,
        }
    }
}

/// API request to record a new fuel stop.
///
/// The derived cost fields are never accepted from clients; they are
/// computed server-side from the purchase quantities and flags.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateFuelStopRequest {
    /// The PRO number of the associated load.
    pub pro_number: Option<String>,
    pub date_of_stop: Option<String>,
    pub vendor_name: Option<String>,
    pub location: Option<String>,
    pub gallons_diesel_purchased: Option<f64>,
    pub pump_price_diesel: Option<f64>,
    pub gallons_def_purchased: Option<f64>,
    pub pump_price_def: Option<f64>,
    pub fuel_card_used: Option<bool>,
    pub discount_eligible: Option<bool>,
}

/// API request to update an existing fuel stop.
///
/// Absent fields keep their stored values. The DEF fields use
/// explicit-null semantics so a client can clear a previously recorded
/// DEF purchase. The derived cost fields are always recomputed from the
/// merged inputs.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateFuelStopRequest {
    pub date_of_stop: Option<String>,
    pub vendor_name: Option<String>,
    pub location: Option<String>,
    pub gallons_diesel_purchased: Option<f64>,
    pub pump_price_diesel: Option<f64>,
    #[serde(deserialize_with = "double_option")]
    pub gallons_def_purchased: Option<Option<f64>>,
    #[serde(deserialize_with = "double_option")]
    pub pump_price_def: Option<Option<f64>>,
    pub fuel_card_used: Option<bool>,
    pub discount_eligible: Option<bool>,
}

/// A fuel stop as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStopInfo {
    /// The fuel stop's numeric identifier.
    pub id: i64,
    /// The PRO number of the associated load.
    pub pro_number: String,
    /// The owning user's ID.
    pub user_id: i64,
    pub date_of_stop: String,
    pub vendor: String,
    pub location: String,
    pub gallons_diesel_purchased: f64,
    pub diesel_price_per_gallon: f64,
    /// Diesel cost after any discount, rounded to cents.
    pub total_diesel_cost: f64,
    pub gallons_def_purchased: Option<f64>,
    pub def_price_per_gallon: Option<f64>,
    /// DEF cost, rounded to cents; 0 when no DEF was purchased.
    pub total_def_cost: f64,
    /// Total stop cost including the fuel-card service charge.
    pub total_fuel_stop: f64,
    pub fuel_card_used: bool,
    pub discount_eligible: bool,
    pub created_at: String,
}

impl From<FuelStopData> for FuelStopInfo {
    fn from(data: FuelStopData) -> Self {
        Self {
            id: data.fuel_stop_id,
            pro_number: data.pro_number,
            user_id: data.user_id,
            date_of_stop: data.date_of_stop,
            vendor: data.vendor,
            location: data.location,
            gallons_diesel_purchased: data.gallons_diesel_purchased,
            diesel_price_per_gallon: data.diesel_price_per_gallon,
            total_diesel_cost: data.total_diesel_cost,
            gallons_def_purchased: data.gallons_def_purchased,
            def_price_per_gallon: data.def_price_per_gallon,
            total_def_cost: data.total_def_cost,
            total_fuel_stop: data.total_fuel_stop,
            fuel_card_used: data.fuel_card_used,
            discount_eligible: data.discount_eligible,
            created_at: data.created_at,
        }
    }
}

/// API response for a successful fuel stop deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFuelStopResponse {
    /// A success message.
    pub message: String,
}

/// API request to update the user's pay settings.
///
/// Absent fields keep their stored values. The numeric fields use
/// explicit-null semantics so a client can clear a stored rate.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateSettingsRequest {
    /// The pay type: "percentage" or "mileage".
    pub driver_pay_type: Option<String>,
    /// The percentage rate as a fraction (0.68 means 68%).
    #[serde(deserialize_with = "double_option")]
    pub percentage_rate: Option<Option<f64>>,
    #[serde(deserialize_with = "double_option")]
    pub fuel_road_use_tax: Option<Option<f64>>,
    #[serde(deserialize_with = "double_option")]
    pub maintenance_reserve: Option<Option<f64>>,
    #[serde(deserialize_with = "double_option")]
    pub bond_deposit: Option<Option<f64>>,
    #[serde(deserialize_with = "double_option")]
    pub mrp_fee: Option<Option<f64>>,
}

/// A user's pay settings as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsInfo {
    /// The settings row's numeric identifier.
    pub id: i64,
    /// The owning user's ID.
    pub user_id: i64,
    pub driver_pay_type: String,
    /// The percentage rate as a fraction; null for mileage pay.
    pub percentage_rate: Option<f64>,
    pub fuel_road_use_tax: Option<f64>,
    pub maintenance_reserve: Option<f64>,
    pub bond_deposit: Option<f64>,
    pub mrp_fee: Option<f64>,
}

impl From<UserSettingsData> for SettingsInfo {
    fn from(data: UserSettingsData) -> Self {
        Self {
            id: data.settings_id,
            user_id: data.user_id,
            driver_pay_type: data.driver_pay_type,
            percentage_rate: data.percentage_rate,
            fuel_road_use_tax: data.fuel_road_use_tax,
            maintenance_reserve: data.maintenance_reserve,
            bond_deposit: data.bond_deposit,
            mrp_fee: data.mrp_fee,
        }
    }
}
