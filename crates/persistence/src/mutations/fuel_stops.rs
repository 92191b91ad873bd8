// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fuel stop mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{FuelStopUpdate, NewFuelStop};
use crate::diesel_schema::fuel_stops;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new fuel stop.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `fuel_stop` - The insertable fuel stop values
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_fuel_stop(conn: &mut _, fuel_stop: &NewFuelStop) -> Result<i64, PersistenceError> {
    info!(
        "Inserting fuel stop on load {} for user ID: {}",
        fuel_stop.pro_number, fuel_stop.user_id
    );

    diesel::insert_into(fuel_stops::table)
        .values(fuel_stop)
        .execute(conn)?;

    let fuel_stop_id: i64 = conn.get_last_insert_rowid()?;

    info!(fuel_stop_id, "Fuel stop inserted");
    Ok(fuel_stop_id)
}
}

backend_fn! {
/// Replaces the mutable columns of a fuel stop, scoped to its owner.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
/// * `fuel_stop_id` - The fuel stop ID
/// * `update` - The full replacement values
///
/// # Errors
///
/// Returns an error if the database update fails.
///
/// # Returns
///
/// The number of rows affected (0 if no matching fuel stop exists).
pub fn update_fuel_stop(
    conn: &mut _,
    user_id: i64,
    fuel_stop_id: i64,
    update: &FuelStopUpdate,
) -> Result<usize, PersistenceError> {
    debug!(
        "Updating fuel stop ID {} for user ID: {}",
        fuel_stop_id, user_id
    );

    let rows_affected: usize = diesel::update(fuel_stops::table)
        .filter(fuel_stops::user_id.eq(user_id))
        .filter(fuel_stops::fuel_stop_id.eq(fuel_stop_id))
        .set(update)
        .execute(conn)?;

    Ok(rows_affected)
}
}

backend_fn! {
/// Deletes a fuel stop, scoped to its owner.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
/// * `fuel_stop_id` - The fuel stop ID
///
/// # Errors
///
/// Returns an error if the database delete fails.
///
/// # Returns
///
/// The number of rows affected (0 if no matching fuel stop exists).
pub fn delete_fuel_stop(
    conn: &mut _,
    user_id: i64,
    fuel_stop_id: i64,
) -> Result<usize, PersistenceError> {
    info!(
        "Deleting fuel stop ID {} for user ID: {}",
        fuel_stop_id, user_id
    );

    let rows_affected: usize = diesel::delete(fuel_stops::table)
        .filter(fuel_stops::user_id.eq(user_id))
        .filter(fuel_stops::fuel_stop_id.eq(fuel_stop_id))
        .execute(conn)?;

    Ok(rows_affected)
}
}
