// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fuel stop queries.
//!
//! This module contains backend-agnostic queries for retrieving fuel
//! stops. Every query is scoped to an owning user.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::FuelStopData;
use crate::diesel_schema::fuel_stops;
use crate::error::PersistenceError;

/// Diesel Queryable struct for fuel stop rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = fuel_stops)]
struct FuelStopRow {
    fuel_stop_id: i64,
    pro_number: String,
    user_id: i64,
    date_of_stop: String,
    vendor: String,
    location: String,
    gallons_diesel_purchased: f64,
    diesel_price_per_gallon: f64,
    total_diesel_cost: f64,
    gallons_def_purchased: Option<f64>,
    def_price_per_gallon: Option<f64>,
    total_def_cost: f64,
    total_fuel_stop: f64,
    fuel_card_used: i32,
    discount_eligible: i32,
    created_at: String,
}

impl From<FuelStopRow> for FuelStopData {
    fn from(row: FuelStopRow) -> Self {
        Self {
            fuel_stop_id: row.fuel_stop_id,
            pro_number: row.pro_number,
            user_id: row.user_id,
            date_of_stop: row.date_of_stop,
            vendor: row.vendor,
            location: row.location,
            gallons_diesel_purchased: row.gallons_diesel_purchased,
            diesel_price_per_gallon: row.diesel_price_per_gallon,
            total_diesel_cost: row.total_diesel_cost,
            gallons_def_purchased: row.gallons_def_purchased,
            def_price_per_gallon: row.def_price_per_gallon,
            total_def_cost: row.total_def_cost,
            total_fuel_stop: row.total_fuel_stop,
            fuel_card_used: row.fuel_card_used != 0,
            discount_eligible: row.discount_eligible != 0,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Lists fuel stops owned by a user, most recent stop first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
/// * `pro_number` - Optional filter restricting results to one load
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_fuel_stops(
    conn: &mut _,
    user_id: i64,
    pro_number: Option<&str>,
) -> Result<Vec<FuelStopData>, PersistenceError> {
    debug!("Listing fuel stops for user ID: {}", user_id);

    let mut query = fuel_stops::table
        .filter(fuel_stops::user_id.eq(user_id))
        .select(FuelStopRow::as_select())
        .order_by(fuel_stops::date_of_stop.desc())
        .into_boxed();

    if let Some(pro_number) = pro_number {
        query = query.filter(fuel_stops::pro_number.eq(pro_number));
    }

    let rows: Vec<FuelStopRow> = query.load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
}

backend_fn! {
/// Retrieves a fuel stop by ID, scoped to its owner.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
/// * `fuel_stop_id` - The fuel stop ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no matching fuel stop exists for this user.
pub fn get_fuel_stop(
    conn: &mut _,
    user_id: i64,
    fuel_stop_id: i64,
) -> Result<Option<FuelStopData>, PersistenceError> {
    debug!(
        "Looking up fuel stop ID {} for user ID: {}",
        fuel_stop_id, user_id
    );

    let result: Result<FuelStopRow, diesel::result::Error> = fuel_stops::table
        .filter(fuel_stops::user_id.eq(user_id))
        .filter(fuel_stops::fuel_stop_id.eq(fuel_stop_id))
        .select(FuelStopRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
