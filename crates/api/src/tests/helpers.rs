// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use haul_ledger_persistence::Persistence;

use crate::auth::AuthenticationService;
use crate::request_response::{
    CreateFuelStopRequest, CreateLoadRequest, RegisterRequest, RegisterResponse,
};

pub const TEST_PASSWORD: &str = "hunter2hunter2";

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        username: Some(String::from("testdriver")),
        email: Some(email.to_string()),
        password: Some(String::from(TEST_PASSWORD)),
    }
}

pub fn register_test_user(persistence: &mut Persistence, email: &str) -> RegisterResponse {
    AuthenticationService::register(persistence, &register_request(email))
        .expect("Failed to register test user")
}

/// A valid percentage-pay load creation request. The load is active
/// (no delivery date).
pub fn active_load_request(pro_number: &str) -> CreateLoadRequest {
    CreateLoadRequest {
        pro_number: Some(pro_number.to_string()),
        date_dispatched: Some(String::from("2026-02-10T08:00:00Z")),
        origin_city: Some(String::from("Tulsa")),
        origin_state: Some(String::from("OK")),
        destination_city: Some(String::from("Little Rock")),
        destination_state: Some(String::from("AR")),
        deadhead_miles: Some(42.0),
        loaded_miles: Some(351.0),
        weight: Some(44500.0),
        driver_pay_type: Some(String::from("percentage")),
        linehaul: Some(1850.0),
        fsc: Some(210.0),
        calculated_gross: Some(2060.0),
        calculated_deductions: Some(412.0),
        projected_net: Some(1648.0),
        ..CreateLoadRequest::default()
    }
}

/// A valid load creation request that is already delivered.
pub fn delivered_load_request(pro_number: &str) -> CreateLoadRequest {
    CreateLoadRequest {
        date_delivered: Some(String::from("2026-02-12T16:30:00Z")),
        ..active_load_request(pro_number)
    }
}

/// A valid fuel stop request: 100 gallons at $3.50/gal, discount
/// eligible, paid with a fuel card. Expected derived costs are
/// 345.00 diesel, 0.00 DEF, 346.00 total.
pub fn fuel_stop_request(pro_number: &str) -> CreateFuelStopRequest {
    CreateFuelStopRequest {
        pro_number: Some(pro_number.to_string()),
        date_of_stop: Some(String::from("2026-02-11T09:15:00Z")),
        vendor_name: Some(String::from("Loves #214")),
        location: Some(String::from("Sallisaw, OK")),
        gallons_diesel_purchased: Some(100.0),
        pump_price_diesel: Some(3.50),
        fuel_card_used: Some(true),
        discount_eligible: Some(true),
        ..CreateFuelStopRequest::default()
    }
}
