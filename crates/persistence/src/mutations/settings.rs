// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay settings mutations.
//!
//! Settings rows are created lazily: a user gets a defaulted row the
//! first time their settings are read or written.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::SettingsUpdate;
use crate::diesel_schema::user_settings;
use crate::error::PersistenceError;

/// Default pay type for a freshly created settings row.
pub const DEFAULT_DRIVER_PAY_TYPE: &str = "percentage";

backend_fn! {
/// Creates a defaulted settings row for a user.
///
/// Defaults: percentage pay with no rate configured, and all deduction
/// rates at zero.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
///
/// # Errors
///
/// Returns an error if the insert fails, including when a settings
/// row already exists for this user.
pub fn create_default_settings(conn: &mut _, user_id: i64) -> Result<i64, PersistenceError> {
    info!("Creating default settings for user ID: {}", user_id);

    diesel::insert_into(user_settings::table)
        .values((
            user_settings::user_id.eq(user_id),
            user_settings::driver_pay_type.eq(DEFAULT_DRIVER_PAY_TYPE),
            user_settings::percentage_rate.eq(None::<f64>),
            user_settings::fuel_road_use_tax.eq(Some(0.0)),
            user_settings::maintenance_reserve.eq(Some(0.0)),
            user_settings::bond_deposit.eq(Some(0.0)),
            user_settings::mrp_fee.eq(Some(0.0)),
        ))
        .execute(conn)?;

    let settings_id: i64 = conn.get_last_insert_rowid()?;

    info!(settings_id, "Default settings created");
    Ok(settings_id)
}
}

backend_fn! {
/// Replaces the pay settings row for a user.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
/// * `update` - The full replacement values
///
/// # Errors
///
/// Returns an error if the database update fails.
///
/// # Returns
///
/// The number of rows affected (0 if the user has no settings row).
pub fn update_settings(
    conn: &mut _,
    user_id: i64,
    update: &SettingsUpdate,
) -> Result<usize, PersistenceError> {
    debug!("Updating settings for user ID: {}", user_id);

    let rows_affected: usize = diesel::update(user_settings::table)
        .filter(user_settings::user_id.eq(user_id))
        .set(update)
        .execute(conn)?;

    Ok(rows_affected)
}
}
