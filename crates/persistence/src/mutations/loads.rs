// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Load mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{LoadUpdate, NewLoad};
use crate::diesel_schema::loads;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new load.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `load` - The insertable load values
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the pro number is
/// already taken, or another error if the insert fails.
pub fn insert_load(conn: &mut _, load: &NewLoad) -> Result<i64, PersistenceError> {
    info!(
        "Inserting load {} for user ID: {}",
        load.pro_number, load.user_id
    );

    diesel::insert_into(loads::table)
        .values(load)
        .execute(conn)?;

    let load_id: i64 = conn.get_last_insert_rowid()?;

    info!(load_id, "Load inserted");
    Ok(load_id)
}
}

backend_fn! {
/// Replaces the mutable columns of a load, scoped to its owner.
///
/// The pro number itself is immutable; it is the natural key the row
/// is addressed by.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
/// * `pro_number` - The pro number of the load to update
/// * `update` - The full replacement values
///
/// # Errors
///
/// Returns an error if the database update fails.
///
/// # Returns
///
/// The number of rows affected (0 if no matching load exists).
pub fn update_load(
    conn: &mut _,
    user_id: i64,
    pro_number: &str,
    update: &LoadUpdate,
) -> Result<usize, PersistenceError> {
    debug!("Updating load {} for user ID: {}", pro_number, user_id);

    let rows_affected: usize = diesel::update(loads::table)
        .filter(loads::user_id.eq(user_id))
        .filter(loads::pro_number.eq(pro_number))
        .set(update)
        .execute(conn)?;

    Ok(rows_affected)
}
}

backend_fn! {
/// Marks a load as delivered, scoped to its owner.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
/// * `pro_number` - The pro number of the load to complete
/// * `date_delivered` - The delivery timestamp (ISO 8601 format)
///
/// # Errors
///
/// Returns an error if the database update fails.
///
/// # Returns
///
/// The number of rows affected (0 if no matching load exists).
pub fn set_load_delivered(
    conn: &mut _,
    user_id: i64,
    pro_number: &str,
    date_delivered: &str,
) -> Result<usize, PersistenceError> {
    info!("Completing load {} for user ID: {}", pro_number, user_id);

    let rows_affected: usize = diesel::update(loads::table)
        .filter(loads::user_id.eq(user_id))
        .filter(loads::pro_number.eq(pro_number))
        .set(loads::date_delivered.eq(Some(date_delivered)))
        .execute(conn)?;

    Ok(rows_affected)
}
}
