// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay settings queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::UserSettingsData;
use crate::diesel_schema::user_settings;
use crate::error::PersistenceError;

/// Diesel Queryable struct for settings rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = user_settings)]
struct SettingsRow {
    settings_id: i64,
    user_id: i64,
    driver_pay_type: String,
    percentage_rate: Option<f64>,
    fuel_road_use_tax: Option<f64>,
    maintenance_reserve: Option<f64>,
    bond_deposit: Option<f64>,
    mrp_fee: Option<f64>,
}

backend_fn! {
/// Retrieves the pay settings row for a user.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owning user ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user has no settings row yet.
pub fn get_settings(
    conn: &mut _,
    user_id: i64,
) -> Result<Option<UserSettingsData>, PersistenceError> {
    debug!("Looking up settings for user ID: {}", user_id);

    let result: Result<SettingsRow, diesel::result::Error> = user_settings::table
        .filter(user_settings::user_id.eq(user_id))
        .select(SettingsRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(UserSettingsData {
            settings_id: row.settings_id,
            user_id: row.user_id,
            driver_pay_type: row.driver_pay_type,
            percentage_rate: row.percentage_rate,
            fuel_road_use_tax: row.fuel_road_use_tax,
            maintenance_reserve: row.maintenance_reserve,
            bond_deposit: row.bond_deposit,
            mrp_fee: row.mrp_fee,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
