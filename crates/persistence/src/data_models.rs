// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::diesel_schema::{fuel_stops, loads, user_settings};

/// Serializable representation of a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

/// Serializable representation of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub user_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Serializable representation of per-user pay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettingsData {
    pub settings_id: i64,
    pub user_id: i64,
    pub driver_pay_type: String,
    pub percentage_rate: Option<f64>,
    pub fuel_road_use_tax: Option<f64>,
    pub maintenance_reserve: Option<f64>,
    pub bond_deposit: Option<f64>,
    pub mrp_fee: Option<f64>,
}

/// Serializable representation of a load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadData {
    pub load_id: i64,
    pub pro_number: String,
    pub user_id: i64,
    pub date_dispatched: String,
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

/// Serializable representation of a fuel stop.
///
/// The derived cost fields (`total_diesel_cost`, `total_def_cost`,
/// `total_fuel_stop`) are always written by the fuel cost calculator,
/// never taken directly from caller input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelStopData {
    pub fuel_stop_id: i64,
    pub pro_number: String,
    pub user_id: i64,
    pub date_of_stop: String,
    pub vendor: String,
    pub location: String,
    pub gallons_diesel_purchased: f64,
    pub diesel_price_per_gallon: f64,
    pub total_diesel_cost: f64,
    pub gallons_def_purchased: Option<f64>,
    pub def_price_per_gallon: Option<f64>,
    pub total_def_cost: f64,
    pub total_fuel_stop: f64,
    pub fuel_card_used: bool,
    pub discount_eligible: bool,
    pub created_at: String,
}

/// Insertable values for a new load row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = loads)]
pub struct NewLoad {
    pub pro_number: String,
    pub user_id: i64,
    pub date_dispatched: String,
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
}

/// Full replacement values for an existing load row.
///
/// Callers merge stored values with request input before building this,
/// so `None` always means "store NULL", not "leave unchanged".
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = loads, treat_none_as_null = true)]
pub struct LoadUpdate {
    pub date_dispatched: String,
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
}

/// Insertable values for a new fuel stop row.
///
/// Boolean flags are stored as integers for backend compatibility.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = fuel_stops)]
pub struct NewFuelStop {
    pub pro_number: String,
    pub user_id: i64,
    pub date_of_stop: String,
    pub vendor: String,
    pub location: String,
    pub gallons_diesel_purchased: f64,
    pub diesel_price_per_gallon: f64,
    pub total_diesel_cost: f64,
    pub gallons_def_purchased: Option<f64>,
    pub def_price_per_gallon: Option<f64>,
    pub total_def_cost: f64,
    pub total_fuel_stop: f64,
    pub fuel_card_used: i32,
    pub discount_eligible: i32,
}

/// Full replacement values for an existing fuel stop row.
///
/// Callers merge stored values with request input before building this,
/// so `None` always means "store NULL", not "leave unchanged".
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = fuel_stops, treat_none_as_null = true)]
pub struct FuelStopUpdate {
    pub pro_number: String,
    pub date_of_stop: String,
    pub vendor: String,
    pub location: String,
    pub gallons_diesel_purchased: f64,
    pub diesel_price_per_gallon: f64,
    pub total_diesel_cost: f64,
    pub gallons_def_purchased: Option<f64>,
    pub def_price_per_gallon: Option<f64>,
    pub total_def_cost: f64,
    pub total_fuel_stop: f64,
    pub fuel_card_used: i32,
    pub discount_eligible: i32,
}

/// Full replacement values for a user's pay settings row.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = user_settings, treat_none_as_null = true)]
pub struct SettingsUpdate {
    pub driver_pay_type: String,
    pub percentage_rate: Option<f64>,
    pub fuel_road_use_tax: Option<f64>,
    pub maintenance_reserve: Option<f64>,
    pub bond_deposit: Option<f64>,
    pub mrp_fee: Option<f64>,
}
