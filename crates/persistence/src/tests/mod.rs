// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod backend_validation_tests;

use crate::data_models::{NewFuelStop, NewLoad};
use crate::Persistence;

pub fn create_test_user(persistence: &mut Persistence, email: &str) -> i64 {
    persistence
        .create_user("testdriver", email, "hunter2hunter2")
        .unwrap()
}

pub fn create_test_load(user_id: i64, pro_number: &str) -> NewLoad {
    NewLoad {
        pro_number: pro_number.to_string(),
        user_id,
        date_dispatched: String::from("2026-08-01T08:00:00Z"),
        date_delivered: None,
        origin_city: String::from("Tulsa"),
        origin_state: String::from("OK"),
        destination_city: String::from("Little Rock"),
        destination_state: String::from("AR"),
        deadhead_miles: 35.0,
        loaded_miles: 280.0,
        weight: 42_500.0,
        driver_pay_type: String::from("percentage"),
        linehaul: Some(1850.0),
        fsc: Some(210.0),
        fsc_per_loaded_mile: None,
        scale_cost: 0.0,
        calculated_gross: None,
        total_deductions: None,
        projected_net: None,
        fuel_road_use_tax: None,
        maintenance_reserve: None,
        bond_deposit: None,
        mrp_fee: None,
    }
}

pub fn create_test_fuel_stop(user_id: i64, pro_number: &str, date_of_stop: &str) -> NewFuelStop {
    NewFuelStop {
        pro_number: pro_number.to_string(),
        user_id,
        date_of_stop: date_of_stop.to_string(),
        vendor: String::from("Petro"),
        location: String::from("Oklahoma City, OK"),
        gallons_diesel_purchased: 100.0,
        diesel_price_per_gallon: 3.50,
        total_diesel_cost: 345.0,
        gallons_def_purchased: None,
        def_price_per_gallon: None,
        total_def_cost: 0.0,
        total_fuel_stop: 346.0,
        fuel_card_used: 1,
        discount_eligible: 1,
    }
}
