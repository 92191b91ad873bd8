// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for fuel stop handlers and the derived-cost calculator wiring.

use haul_ledger_persistence::Persistence;

use crate::error::ApiError;
use crate::handlers::{
    create_fuel_stop, create_load, delete_fuel_stop, list_fuel_stops, update_fuel_stop,
};
use crate::request_response::{
    CreateFuelStopRequest, DeleteFuelStopResponse, FuelStopInfo, UpdateFuelStopRequest,
};
use crate::tests::helpers::{
    active_load_request, delivered_load_request, fuel_stop_request, register_test_user,
    test_persistence,
};

fn setup_user_with_load(persistence: &mut Persistence, email: &str, pro_number: &str) -> i64 {
    let user_id: i64 = register_test_user(persistence, email).user_id;
    create_load(persistence, user_id, &active_load_request(pro_number))
        .expect("Load creation should succeed");
    user_id
}

#[test]
fn test_create_fuel_stop_computes_derived_costs() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = setup_user_with_load(&mut persistence, "driver@example.com", "PRO-1001");

    // 100 gallons at $3.50 with the $0.05 discount and the $1.00 fuel
    // card charge: 345.00 diesel, 0.00 DEF, 346.00 total.
    let stop: FuelStopInfo =
        create_fuel_stop(&mut persistence, user_id, &fuel_stop_request("PRO-1001"))
            .expect("Fuel stop creation should succeed");

    assert!((stop.total_diesel_cost - 345.00).abs() < f64::EPSILON);
    assert!((stop.total_def_cost - 0.00).abs() < f64::EPSILON);
    assert!((stop.total_fuel_stop - 346.00).abs() < f64::EPSILON);
    assert!(stop.fuel_card_used);
    assert!(stop.discount_eligible);
    assert_eq!(stop.gallons_def_purchased, None);
}

#[test]
fn test_costs_are_rounded_to_cents() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = setup_user_with_load(&mut persistence, "driver@example.com", "PRO-1001");

    let request: CreateFuelStopRequest = CreateFuelStopRequest {
        gallons_diesel_purchased: Some(50.5),
        pump_price_diesel: Some(3.999),
        gallons_def_purchased: Some(2.5),
        pump_price_def: Some(3.199),
        ..fuel_stop_request("PRO-1001")
    };
    let stop: FuelStopInfo = create_fuel_stop(&mut persistence, user_id, &request)
        .expect("Fuel stop creation should succeed");

    // (3.999 - 0.05) * 50.5 = 199.4245, 2.5 * 3.199 = 7.9975.
    assert!((stop.total_diesel_cost - 199.42).abs() < f64::EPSILON);
    assert!((stop.total_def_cost - 8.00).abs() < f64::EPSILON);
    assert!((stop.total_fuel_stop - 208.42).abs() < f64::EPSILON);
}

#[test]
fn test_def_cost_requires_both_def_fields() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = setup_user_with_load(&mut persistence, "driver@example.com", "PRO-1001");

    let request: CreateFuelStopRequest = CreateFuelStopRequest {
        gallons_def_purchased: Some(10.0),
        pump_price_def: None,
        ..fuel_stop_request("PRO-1001")
    };
    let stop: FuelStopInfo = create_fuel_stop(&mut persistence, user_id, &request)
        .expect("Fuel stop creation should succeed");

    assert_eq!(stop.gallons_def_purchased, Some(10.0));
    assert_eq!(stop.def_price_per_gallon, None);
    assert!((stop.total_def_cost - 0.00).abs() < f64::EPSILON);
}

#[test]
fn test_zero_def_quantities_are_stored_as_null() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = setup_user_with_load(&mut persistence, "driver@example.com", "PRO-1001");

    let request: CreateFuelStopRequest = CreateFuelStopRequest {
        gallons_def_purchased: Some(0.0),
        pump_price_def: Some(0.0),
        ..fuel_stop_request("PRO-1001")
    };
    let stop: FuelStopInfo = create_fuel_stop(&mut persistence, user_id, &request)
        .expect("Fuel stop creation should succeed");

    assert_eq!(stop.gallons_def_purchased, None);
    assert_eq!(stop.def_price_per_gallon, None);
}

#[test]
fn test_create_requires_payload_fields() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = setup_user_with_load(&mut persistence, "driver@example.com", "PRO-1001");

    let request: CreateFuelStopRequest = CreateFuelStopRequest {
        vendor_name: None,
        ..fuel_stop_request("PRO-1001")
    };
    let err: ApiError = create_fuel_stop(&mut persistence, user_id, &request)
        .expect_err("Missing vendorName should be rejected");
    assert_eq!(err.to_string(), "Missing required field from payload: vendorName");

    let request: CreateFuelStopRequest = CreateFuelStopRequest {
        pump_price_diesel: None,
        ..fuel_stop_request("PRO-1001")
    };
    let err: ApiError = create_fuel_stop(&mut persistence, user_id, &request)
        .expect_err("Missing pumpPriceDiesel should be rejected");
    assert_eq!(
        err.to_string(),
        "Missing required field from payload: pumpPriceDiesel"
    );
}

#[test]
fn test_create_rejects_unknown_or_foreign_load() {
    let mut persistence: Persistence = test_persistence();
    let owner: i64 = setup_user_with_load(&mut persistence, "owner@example.com", "PRO-1001");
    let other: i64 = register_test_user(&mut persistence, "other@example.com").user_id;

    let err: ApiError =
        create_fuel_stop(&mut persistence, owner, &fuel_stop_request("PRO-9999"))
            .expect_err("Unknown load should be rejected");
    assert_eq!(err.to_string(), "Associated load not found or access denied.");

    let err: ApiError = create_fuel_stop(&mut persistence, other, &fuel_stop_request("PRO-1001"))
        .expect_err("Another user's load should be invisible");
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
    assert_eq!(err.to_string(), "Associated load not found or access denied.");
}

#[test]
fn test_update_recomputes_costs_from_merged_inputs() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = setup_user_with_load(&mut persistence, "driver@example.com", "PRO-1001");
    let stop: FuelStopInfo =
        create_fuel_stop(&mut persistence, user_id, &fuel_stop_request("PRO-1001"))
            .expect("Fuel stop creation should succeed");

    // Only the price changes; gallons, discount, and the fuel card come
    // from the stored row. (4.00 - 0.05) * 100 + 1.00 = 396.00.
    let request: UpdateFuelStopRequest = UpdateFuelStopRequest {
        pump_price_diesel: Some(4.00),
        ..UpdateFuelStopRequest::default()
    };
    let updated: FuelStopInfo = update_fuel_stop(&mut persistence, user_id, stop.id, request)
        .expect("Update should succeed");

    assert!((updated.total_diesel_cost - 395.00).abs() < f64::EPSILON);
    assert!((updated.total_fuel_stop - 396.00).abs() < f64::EPSILON);
    assert!((updated.gallons_diesel_purchased - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_update_can_clear_def_with_explicit_null() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = setup_user_with_load(&mut persistence, "driver@example.com", "PRO-1001");
    let request: CreateFuelStopRequest = CreateFuelStopRequest {
        gallons_def_purchased: Some(5.0),
        pump_price_def: Some(3.20),
        ..fuel_stop_request("PRO-1001")
    };
    let stop: FuelStopInfo = create_fuel_stop(&mut persistence, user_id, &request)
        .expect("Fuel stop creation should succeed");
    assert!((stop.total_def_cost - 16.00).abs() < f64::EPSILON);

    let request: UpdateFuelStopRequest = UpdateFuelStopRequest {
        gallons_def_purchased: Some(None),
        pump_price_def: Some(None),
        ..UpdateFuelStopRequest::default()
    };
    let updated: FuelStopInfo = update_fuel_stop(&mut persistence, user_id, stop.id, request)
        .expect("Update should succeed");

    assert_eq!(updated.gallons_def_purchased, None);
    assert_eq!(updated.def_price_per_gallon, None);
    assert!((updated.total_def_cost - 0.00).abs() < f64::EPSILON);
    assert!((updated.total_fuel_stop - 346.00).abs() < f64::EPSILON);
}

#[test]
fn test_update_keeps_def_when_fields_are_absent() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = setup_user_with_load(&mut persistence, "driver@example.com", "PRO-1001");
    let request: CreateFuelStopRequest = CreateFuelStopRequest {
        gallons_def_purchased: Some(5.0),
        pump_price_def: Some(3.20),
        ..fuel_stop_request("PRO-1001")
    };
    let stop: FuelStopInfo = create_fuel_stop(&mut persistence, user_id, &request)
        .expect("Fuel stop creation should succeed");

    let request: UpdateFuelStopRequest = UpdateFuelStopRequest {
        vendor_name: Some(String::from("Pilot #88")),
        ..UpdateFuelStopRequest::default()
    };
    let updated: FuelStopInfo = update_fuel_stop(&mut persistence, user_id, stop.id, request)
        .expect("Update should succeed");

    assert_eq!(updated.vendor, "Pilot #88");
    assert_eq!(updated.gallons_def_purchased, Some(5.0));
    assert!((updated.total_def_cost - 16.00).abs() < f64::EPSILON);
}

#[test]
fn test_update_unknown_fuel_stop_is_not_found() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = register_test_user(&mut persistence, "driver@example.com").user_id;

    let err: ApiError =
        update_fuel_stop(&mut persistence, user_id, 999, UpdateFuelStopRequest::default())
            .expect_err("Unknown fuel stop should be rejected");
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
    assert_eq!(err.to_string(), "Fuel stop not found or access denied");
}

#[test]
fn test_delete_is_scoped_to_the_owner() {
    let mut persistence: Persistence = test_persistence();
    let owner: i64 = setup_user_with_load(&mut persistence, "owner@example.com", "PRO-1001");
    let other: i64 = register_test_user(&mut persistence, "other@example.com").user_id;
    let stop: FuelStopInfo =
        create_fuel_stop(&mut persistence, owner, &fuel_stop_request("PRO-1001"))
            .expect("Fuel stop creation should succeed");

    let err: ApiError = delete_fuel_stop(&mut persistence, other, stop.id)
        .expect_err("Another user's fuel stop should be invisible");
    assert_eq!(err.to_string(), "Fuel stop not found or access denied");

    let response: DeleteFuelStopResponse = delete_fuel_stop(&mut persistence, owner, stop.id)
        .expect("Owner's delete should succeed");
    assert_eq!(response.message, "Fuel stop deleted successfully");

    let err: ApiError = delete_fuel_stop(&mut persistence, owner, stop.id)
        .expect_err("Repeated delete should be rejected");
    assert_eq!(err.to_string(), "Fuel stop not found or access denied");
}

#[test]
fn test_list_orders_newest_first_and_filters_by_pro_number() {
    let mut persistence: Persistence = test_persistence();
    let user_id: i64 = register_test_user(&mut persistence, "driver@example.com").user_id;
    create_load(&mut persistence, user_id, &delivered_load_request("PRO-1001"))
        .expect("Load creation should succeed");
    create_load(&mut persistence, user_id, &active_load_request("PRO-1002"))
        .expect("Load creation should succeed");

    let earlier: CreateFuelStopRequest = CreateFuelStopRequest {
        date_of_stop: Some(String::from("2026-02-10T07:00:00Z")),
        ..fuel_stop_request("PRO-1001")
    };
    create_fuel_stop(&mut persistence, user_id, &earlier).expect("Creation should succeed");
    let later: CreateFuelStopRequest = CreateFuelStopRequest {
        date_of_stop: Some(String::from("2026-02-14T18:00:00Z")),
        ..fuel_stop_request("PRO-1002")
    };
    create_fuel_stop(&mut persistence, user_id, &later).expect("Creation should succeed");

    let all: Vec<FuelStopInfo> =
        list_fuel_stops(&mut persistence, user_id, None).expect("Listing should succeed");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].pro_number, "PRO-1002");
    assert_eq!(all[1].pro_number, "PRO-1001");

    let filtered: Vec<FuelStopInfo> =
        list_fuel_stops(&mut persistence, user_id, Some("PRO-1001"))
            .expect("Filtered listing should succeed");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].pro_number, "PRO-1001");
}
