// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Load queries.
//!
//! This module contains backend-agnostic queries for retrieving loads.
//! Every query is scoped to an owning user so one driver can never see
//! another driver's freight.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::LoadData;
use crate::diesel_schema::loads;
use crate::error::PersistenceError;

/// Diesel Queryable struct for load rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = loads)]
struct LoadRow {
    load_id: i64,
    pro_number: String,
    user_id: i64,
    date_dispatched: String,
    date_delivered: Option<String>,
    origin_city: String,
    origin_state: String,
    destination_city: String,
    destination_state: String,
    deadhead_miles: f64,
    loaded_miles: f64,
    weight: f64,
    driver_pay_type: String,
    linehaul: Option<f64>,
    fsc: Option<f64>,
    fsc_per_loaded_mile: Option<f64>,
    scale_cost: f64,
    calculated_gross: Option<f64>,
    total_deductions: Option<f64>,
    projected_net: Option<f64>,
    fuel_road_use_tax: Option<f64>,
    maintenance_reserve: Option<f64>,
    bond_deposit: Option<f64>,
    mrp_fee: Option<f64>,
    created_at: String,
}

impl From<LoadRow> for LoadData {
    fn from(row: LoadRow) -> Self {
        Self {
            load_id: row.load_id,
            pro_number: row.pro_number,
            user_id: row.user_id,
            date_dispatched: row.date_dispatched,
            date_delivered: row.date_delivered,
            origin_city: row.origin_city,
            origin_state: row.origin_state,
            destination_city: row.destination_city,
            destination_state: row.destination_state,
            deadhead_miles: row.deadhead_miles,
            loaded_miles: row.loaded_miles,
            weight: row.weight,
            driver_pay_type: row.driver_pay_type,
            linehaul: row.linehaul,
            fsc: row.fsc,
            fsc_per_loaded_mile: row.fsc_per_loaded_mile,
            scale_cost: row.scale_cost,
            calculated_gross: row.calculated_gross,
            total_deductions: row.total_deductions,
            projected_net: row.projected_net,
            fuel_road_use_tax: row.fuel_road_use_tax,
            maintenance_reserve: row.maintenance_reserve,
            bond_deposit: row.bond_deposit,
            mrp_fee: row.mrp_fee,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Lists all loads owned by a user in insertion order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_loads(conn: &mut _, user_id: i64) -> Result<Vec<LoadData>, PersistenceError> {
    debug!("Listing loads for user ID: {}", user_id);

    let rows: Vec<LoadRow> = loads::table
        .filter(loads::user_id.eq(user_id))
        .select(LoadRow::as_select())
        .order_by(loads::load_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
}

backend_fn! {
/// Retrieves a load by pro number, scoped to its owner.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
/// * `pro_number` - The pro number (natural key)
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no matching load exists for this user.
pub fn get_load_by_pro_number(
    conn: &mut _,
    user_id: i64,
    pro_number: &str,
) -> Result<Option<LoadData>, PersistenceError> {
    debug!("Looking up load {} for user ID: {}", pro_number, user_id);

    let result: Result<LoadRow, diesel::result::Error> = loads::table
        .filter(loads::user_id.eq(user_id))
        .filter(loads::pro_number.eq(pro_number))
        .select(LoadRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Checks whether a user already has an active (undelivered) load.
///
/// This is the read half of the read-then-write active load check.
/// It runs without a transaction or row lock, so two concurrent
/// requests can both observe "no active load" and both proceed.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
/// * `exclude_pro_number` - A pro number to exclude from the check
///   (used on updates so a load does not conflict with itself)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn active_load_exists(
    conn: &mut _,
    user_id: i64,
    exclude_pro_number: Option<&str>,
) -> Result<bool, PersistenceError> {
    debug!("Checking for active load for user ID: {}", user_id);

    let mut query = loads::table
        .filter(loads::user_id.eq(user_id))
        .filter(loads::date_delivered.is_null())
        .count()
        .into_boxed();

    if let Some(pro_number) = exclude_pro_number {
        query = query.filter(loads::pro_number.ne(pro_number));
    }

    let count: i64 = query.get_result(conn)?;

    Ok(count > 0)
}
}
