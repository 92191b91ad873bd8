// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for multi-database support.
//!
//! These tests validate that the persistence layer works correctly
//! across different database backends (`SQLite`, MariaDB/MySQL).
//!
//! ## Test Execution
//!
//! - `SQLite` tests run normally via `cargo test`
//! - MariaDB/MySQL tests are marked `#[ignore]` and run only via
//!   `cargo xtask test-mariadb`
//!
//! ## Infrastructure Requirements
//!
//! `MariaDB` tests require:
//! - `DATABASE_URL` environment variable (set by xtask)
//! - `HAUL_LEDGER_TEST_BACKEND=mariadb` environment variable
//! - Running `MariaDB` instance (provisioned by xtask)
//!
//! Tests fail fast if required infrastructure is missing.
//!
//! ## What These Tests Validate
//!
//! These tests focus on infrastructure and schema compatibility, not
//! business logic: migration application, constraint enforcement
//! (FK, UNIQUE), and backend-specific SQL compatibility. Business
//! logic is validated by the standard test suite running on `SQLite`.

use diesel::MysqlConnection;
use diesel::prelude::*;
use std::env;

use crate::backend::mysql;

/// Helper to get the `MariaDB` connection URL from environment.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, indicating missing infrastructure.
fn get_mariadb_url() -> String {
    env::var("DATABASE_URL")
        .expect("DATABASE_URL not set - MariaDB tests must be run via `cargo xtask test-mariadb`")
}

/// Helper to verify we're running in the `MariaDB` test environment.
///
/// # Panics
///
/// Panics if `HAUL_LEDGER_TEST_BACKEND` is not set to `mariadb`.
fn verify_mariadb_test_environment() {
    let backend = env::var("HAUL_LEDGER_TEST_BACKEND").expect(
        "HAUL_LEDGER_TEST_BACKEND not set - MariaDB tests must be run via `cargo xtask test-mariadb`",
    );
    assert_eq!(
        backend, "mariadb",
        "HAUL_LEDGER_TEST_BACKEND must be 'mariadb'"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_connection() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = MysqlConnection::establish(&url);
    assert!(
        result.is_ok(),
        "Failed to connect to MariaDB: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_migrations_apply_cleanly() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = mysql::initialize_database(&url);
    assert!(
        result.is_ok(),
        "Failed to initialize MariaDB and run migrations: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_foreign_key_enforcement() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    let result = mysql::verify_foreign_key_enforcement(&mut conn);
    assert!(
        result.is_ok(),
        "Foreign key enforcement verification failed: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_user_email_unique_constraint() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    diesel::sql_query(
        "INSERT INTO users (username, email, password_hash)
         VALUES ('driver_a', 'unique_check@example.com', 'hash')",
    )
    .execute(&mut conn)
    .expect("Failed to insert test user");

    let duplicate_result = diesel::sql_query(
        "INSERT INTO users (username, email, password_hash)
         VALUES ('driver_b', 'unique_check@example.com', 'hash2')",
    )
    .execute(&mut conn);

    assert!(
        duplicate_result.is_err(),
        "Duplicate email should fail due to UNIQUE constraint"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_load_foreign_keys() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    // Load referencing a non-existent user must fail
    let result = diesel::sql_query(
        "INSERT INTO loads
         (pro_number, user_id, date_dispatched, origin_city, origin_state,
          destination_city, destination_state, deadhead_miles, loaded_miles,
          weight, driver_pay_type)
         VALUES ('FK-TEST', 99999, '2026-08-01', 'Tulsa', 'OK',
                 'Little Rock', 'AR', 10, 200, 40000, 'percentage')",
    )
    .execute(&mut conn);

    assert!(
        result.is_err(),
        "Load with non-existent user_id should fail due to foreign key constraint"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_fuel_stop_foreign_keys() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    // Fuel stop referencing a non-existent load must fail
    let result = diesel::sql_query(
        "INSERT INTO fuel_stops
         (pro_number, user_id, date_of_stop, vendor, location,
          gallons_diesel_purchased, diesel_price_per_gallon, total_diesel_cost,
          total_fuel_stop)
         VALUES ('NO-SUCH-LOAD', 99999, '2026-08-01', 'Petro', 'OKC',
                 100, 3.5, 350, 351)",
    )
    .execute(&mut conn);

    assert!(
        result.is_err(),
        "Fuel stop with non-existent load should fail due to foreign key constraint"
    );
}
