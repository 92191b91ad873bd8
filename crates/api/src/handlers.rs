// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for load, fuel-stop, and settings operations.
//!
//! Handlers validate requests, enforce ownership scoping, and translate
//! persistence results into wire DTOs. Every handler takes the caller's
//! resolved user ID; session validation happens in the server layer.

use std::str::FromStr;

use haul_ledger_domain::{
    DriverPayType, FuelPurchase, FuelStopCosts, PaySelection, ProNumber, compute_fuel_stop_costs,
    now_utc_iso, resolve_delivered_date, select_pay_fields_for_create,
    select_pay_fields_for_update, validate_percentage_rate,
};
use haul_ledger_persistence::{
    FuelStopData, FuelStopUpdate, LoadData, LoadUpdate, NewFuelStop, NewLoad, Persistence,
    PersistenceError, SettingsUpdate, UserSettingsData,
};

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    CreateFuelStopRequest, CreateLoadRequest, DeleteFuelStopResponse, FuelStopInfo, LoadInfo,
    SettingsInfo, UpdateFuelStopRequest, UpdateLoadRequest, UpdateSettingsRequest,
};

fn internal(context: &str, err: &PersistenceError) -> ApiError {
    ApiError::Internal {
        message: format!("{context}: {err}"),
    }
}

/// Checks that a required string field is present and non-empty.
fn require_string(value: Option<&str>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ApiError::MissingField {
            field: field.to_string(),
        }),
    }
}

/// Checks that a required numeric field is present. Zero is a valid value.
fn require_number(value: Option<f64>, field: &str) -> Result<f64, ApiError> {
    value.ok_or_else(|| ApiError::MissingField {
        field: field.to_string(),
    })
}

/// Lists all loads owned by a user.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_loads(persistence: &mut Persistence, user_id: i64) -> Result<Vec<LoadInfo>, ApiError> {
    let loads: Vec<LoadData> = persistence
        .list_loads(user_id)
        .map_err(|e| internal("Failed to list loads", &e))?;
    Ok(loads.into_iter().map(LoadInfo::from).collect())
}

/// Creates a new load.
///
/// This function:
/// - Resolves the delivery date (unparseable values mean "active")
/// - Rejects the request if the load would be active while the user
///   already has an active load
/// - Validates the required fields and the pay-type branch
/// - Stores the load and returns the created row
///
/// The active-load check and the insert are separate statements with no
/// transaction around them, so two concurrent creates can both pass the
/// check. Single-owner usage makes that window acceptable.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
/// * `request` - The load creation request
///
/// # Errors
///
/// Returns an error if validation fails, the user already has an active
/// load, or the PRO number is already taken.
pub fn create_load(
    persistence: &mut Persistence,
    user_id: i64,
    request: &CreateLoadRequest,
) -> Result<LoadInfo, ApiError> {
    let date_delivered: Option<String> = resolve_delivered_date(request.date_delivered.as_deref());

    if date_delivered.is_none() {
        let active: bool = persistence
            .active_load_exists(user_id, None)
            .map_err(|e| internal("Failed to check for an active load", &e))?;
        if active {
            return Err(ApiError::Conflict {
                message: String::from(
                    "An active load already exists. Please complete it before adding a new active load.",
                ),
            });
        }
    }

    let driver_pay_type: DriverPayType = request
        .driver_pay_type
        .as_deref()
        .and_then(|s| DriverPayType::from_str(s).ok())
        .ok_or_else(|| ApiError::InvalidInput {
            message: String::from("Invalid driverPayType specified."),
        })?;

    let pro_number: String = require_string(request.pro_number.as_deref(), "proNumber")?;
    let pro_number: ProNumber = ProNumber::new(&pro_number).map_err(translate_domain_error)?;
    let date_dispatched: String =
        require_string(request.date_dispatched.as_deref(), "dateDispatched")?;
    let origin_city: String = require_string(request.origin_city.as_deref(), "originCity")?;
    let origin_state: String = require_string(request.origin_state.as_deref(), "originState")?;
    let destination_city: String =
        require_string(request.destination_city.as_deref(), "destinationCity")?;
    let destination_state: String =
        require_string(request.destination_state.as_deref(), "destinationState")?;
    let deadhead_miles: f64 = require_number(request.deadhead_miles, "deadheadMiles")?;
    let loaded_miles: f64 = require_number(request.loaded_miles, "loadedMiles")?;
    let weight: f64 = require_number(request.weight, "weight")?;

    let pay: PaySelection = select_pay_fields_for_create(
        driver_pay_type,
        request.linehaul,
        request.fsc,
        request.fsc_per_loaded_mile,
    )
    .map_err(translate_domain_error)?;

    let new_load: NewLoad = NewLoad {
        pro_number: pro_number.value().to_string(),
        user_id,
        date_dispatched,
        date_delivered,
        origin_city,
        origin_state,
        destination_city,
        destination_state,
        deadhead_miles,
        loaded_miles,
        weight,
        driver_pay_type: pay.driver_pay_type.to_string(),
        linehaul: pay.linehaul,
        fsc: pay.fsc,
        fsc_per_loaded_mile: pay.fsc_per_loaded_mile,
        scale_cost: request.scale_cost.unwrap_or(0.0),
        calculated_gross: request.calculated_gross,
        total_deductions: request.calculated_deductions,
        projected_net: request.projected_net,
        fuel_road_use_tax: request.fuel_road_use_tax,
        maintenance_reserve: request.maintenance_reserve,
        bond_deposit: request.bond_deposit,
        mrp_fee: request.mrp_fee,
    };

    persistence.insert_load(&new_load).map_err(|e| match e {
        PersistenceError::UniqueViolation(_) => ApiError::Conflict {
            message: String::from("Load with this Pro Number already exists."),
        },
        _ => internal("Failed to create load", &e),
    })?;

    tracing::info!(user_id, pro_number = pro_number.value(), "created load");
    fetch_load(persistence, user_id, pro_number.value())
}

/// Updates an existing load, identified by PRO number.
///
/// Absent request fields keep their stored values. Reactivating a
/// delivered load (explicit null `dateDelivered`) is rejected while
/// another load is active. The pay-component fields of the inactive
/// pay branch are forced to null.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
/// * `pro_number` - The PRO number of the load to update
/// * `request` - The update request
///
/// # Errors
///
/// Returns an error if the load does not exist (or belongs to another
/// user), the pay type is invalid, or reactivation conflicts with
/// another active load.
pub fn update_load(
    persistence: &mut Persistence,
    user_id: i64,
    pro_number: &str,
    request: UpdateLoadRequest,
) -> Result<LoadInfo, ApiError> {
    let stored: LoadData = persistence
        .get_load_by_pro_number(user_id, pro_number)
        .map_err(|e| internal("Failed to look up load", &e))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            message: String::from("Load not found"),
        })?;

    // Only a request that carries the dateDelivered key can change the
    // delivery state; an absent key keeps what is stored.
    let date_delivered: Option<String> = request.date_delivered.as_ref().map_or_else(
        || stored.date_delivered.clone(),
        |raw| resolve_delivered_date(raw.as_deref()),
    );

    if request.date_delivered.is_some() && date_delivered.is_none() {
        let other_active: bool = persistence
            .active_load_exists(user_id, Some(pro_number))
            .map_err(|e| internal("Failed to check for an active load", &e))?;
        if other_active {
            return Err(ApiError::Conflict {
                message: String::from(
                    "Another load is already active. Cannot set this load as active.",
                ),
            });
        }
    }

    let stored_pay_type: DriverPayType = DriverPayType::from_str(&stored.driver_pay_type)
        .map_err(|_| ApiError::Internal {
            message: format!(
                "Load '{pro_number}' has unrecognized pay type '{}'",
                stored.driver_pay_type
            ),
        })?;
    let requested_pay_type: Option<DriverPayType> = request
        .driver_pay_type
        .as_deref()
        .map(|value| {
            DriverPayType::from_str(value).map_err(|_| ApiError::InvalidInput {
                message: String::from("Invalid driverPayType specified for update."),
            })
        })
        .transpose()?;

    let pay: PaySelection = select_pay_fields_for_update(
        stored_pay_type,
        requested_pay_type,
        (stored.linehaul, stored.fsc, stored.fsc_per_loaded_mile),
        (request.linehaul, request.fsc, request.fsc_per_loaded_mile),
    );

    let update: LoadUpdate = LoadUpdate {
        date_dispatched: request.date_dispatched.unwrap_or(stored.date_dispatched),
        date_delivered,
        origin_city: request.origin_city.unwrap_or(stored.origin_city),
        origin_state: request.origin_state.unwrap_or(stored.origin_state),
        destination_city: request.destination_city.unwrap_or(stored.destination_city),
        destination_state: request
            .destination_state
            .unwrap_or(stored.destination_state),
        deadhead_miles: request.deadhead_miles.unwrap_or(stored.deadhead_miles),
        loaded_miles: request.loaded_miles.unwrap_or(stored.loaded_miles),
        weight: request.weight.unwrap_or(stored.weight),
        driver_pay_type: pay.driver_pay_type.to_string(),
        linehaul: pay.linehaul,
        fsc: pay.fsc,
        fsc_per_loaded_mile: pay.fsc_per_loaded_mile,
        scale_cost: request.scale_cost.unwrap_or(stored.scale_cost),
        calculated_gross: request.calculated_gross.or(stored.calculated_gross),
        total_deductions: request.calculated_deductions.or(stored.total_deductions),
        projected_net: request.projected_net.or(stored.projected_net),
        fuel_road_use_tax: request.fuel_road_use_tax.or(stored.fuel_road_use_tax),
        maintenance_reserve: request.maintenance_reserve.or(stored.maintenance_reserve),
        bond_deposit: request.bond_deposit.or(stored.bond_deposit),
        mrp_fee: request.mrp_fee.or(stored.mrp_fee),
    };

    persistence
        .update_load(user_id, pro_number, &update)
        .map_err(|e| internal("Failed to update load", &e))?;

    tracing::info!(user_id, pro_number, "updated load");
    fetch_load(persistence, user_id, pro_number)
}

/// Marks a load as delivered at the current time.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
/// * `pro_number` - The PRO number of the load to complete
///
/// # Errors
///
/// Returns an error if the load does not exist (or belongs to another
/// user) or is already delivered.
pub fn complete_load(
    persistence: &mut Persistence,
    user_id: i64,
    pro_number: &str,
) -> Result<LoadInfo, ApiError> {
    let stored: LoadData = persistence
        .get_load_by_pro_number(user_id, pro_number)
        .map_err(|e| internal("Failed to look up load", &e))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            message: String::from("Load not found"),
        })?;

    if stored.date_delivered.is_some() {
        return Err(ApiError::InvalidInput {
            message: String::from("Load already completed"),
        });
    }

    let delivered_at: String = now_utc_iso();
    persistence
        .set_load_delivered(user_id, pro_number, &delivered_at)
        .map_err(|e| internal("Failed to complete load", &e))?;

    tracing::info!(user_id, pro_number, "completed load");
    fetch_load(persistence, user_id, pro_number)
}

/// Lists fuel stops owned by a user, newest first.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
/// * `pro_number` - Optional filter restricting results to one load
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_fuel_stops(
    persistence: &mut Persistence,
    user_id: i64,
    pro_number: Option<&str>,
) -> Result<Vec<FuelStopInfo>, ApiError> {
    let fuel_stops: Vec<FuelStopData> = persistence
        .list_fuel_stops(user_id, pro_number)
        .map_err(|e| internal("Failed to list fuel stops", &e))?;
    Ok(fuel_stops.into_iter().map(FuelStopInfo::from).collect())
}

/// Records a new fuel stop against one of the user's loads.
///
/// The derived cost fields are computed server-side: diesel cost with
/// the per-gallon discount when eligible, DEF cost when both DEF fields
/// are present and positive, and the stop total including the fuel-card
/// service charge. Zero-valued DEF quantities are stored as null.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
/// * `request` - The fuel stop creation request
///
/// # Errors
///
/// Returns an error if a required payload field is missing or the
/// referenced load does not exist (or belongs to another user).
pub fn create_fuel_stop(
    persistence: &mut Persistence,
    user_id: i64,
    request: &CreateFuelStopRequest,
) -> Result<FuelStopInfo, ApiError> {
    let require_payload_string = |value: Option<&str>, field: &str| match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ApiError::MissingPayloadField {
            field: field.to_string(),
        }),
    };
    let require_payload_number = |value: Option<f64>, field: &str| {
        value.ok_or_else(|| ApiError::MissingPayloadField {
            field: field.to_string(),
        })
    };

    let pro_number: String = require_payload_string(request.pro_number.as_deref(), "proNumber")?;
    let date_of_stop: String = require_payload_string(request.date_of_stop.as_deref(), "dateOfStop")?;
    let vendor: String = require_payload_string(request.vendor_name.as_deref(), "vendorName")?;
    let location: String = require_payload_string(request.location.as_deref(), "location")?;
    let gallons_diesel: f64 =
        require_payload_number(request.gallons_diesel_purchased, "gallonsDieselPurchased")?;
    let price_diesel: f64 = require_payload_number(request.pump_price_diesel, "pumpPriceDiesel")?;

    persistence
        .get_load_by_pro_number(user_id, &pro_number)
        .map_err(|e| internal("Failed to look up load", &e))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            message: String::from("Associated load not found or access denied."),
        })?;

    let fuel_card_used: bool = request.fuel_card_used.unwrap_or(false);
    let discount_eligible: bool = request.discount_eligible.unwrap_or(false);
    // A zero-gallon or zero-price DEF entry means no DEF was purchased.
    let gallons_def: Option<f64> = request.gallons_def_purchased.filter(|v| *v > 0.0);
    let price_def: Option<f64> = request.pump_price_def.filter(|v| *v > 0.0);

    let costs: FuelStopCosts = compute_fuel_stop_costs(&FuelPurchase {
        gallons_diesel,
        price_diesel,
        gallons_def,
        price_def,
        fuel_card_used,
        discount_eligible,
    });

    let new_fuel_stop: NewFuelStop = NewFuelStop {
        pro_number,
        user_id,
        date_of_stop,
        vendor,
        location,
        gallons_diesel_purchased: gallons_diesel,
        diesel_price_per_gallon: price_diesel,
        total_diesel_cost: costs.total_diesel_cost,
        gallons_def_purchased: gallons_def,
        def_price_per_gallon: price_def,
        total_def_cost: costs.total_def_cost,
        total_fuel_stop: costs.total_fuel_stop,
        fuel_card_used: i32::from(fuel_card_used),
        discount_eligible: i32::from(discount_eligible),
    };

    let fuel_stop_id: i64 = persistence
        .insert_fuel_stop(&new_fuel_stop)
        .map_err(|e| internal("Failed to create fuel stop", &e))?;

    tracing::info!(user_id, fuel_stop_id, "created fuel stop");
    fetch_fuel_stop(persistence, user_id, fuel_stop_id)
}

/// Updates an existing fuel stop.
///
/// Absent request fields keep their stored values; the DEF fields can
/// be cleared with an explicit null. All three derived cost fields are
/// recomputed from the merged inputs, so a change to any quantity,
/// price, or flag reprices the whole stop.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
/// * `fuel_stop_id` - The fuel stop's numeric identifier
/// * `request` - The update request
///
/// # Errors
///
/// Returns an error if the fuel stop does not exist or belongs to
/// another user.
pub fn update_fuel_stop(
    persistence: &mut Persistence,
    user_id: i64,
    fuel_stop_id: i64,
    request: UpdateFuelStopRequest,
) -> Result<FuelStopInfo, ApiError> {
    let stored: FuelStopData = persistence
        .get_fuel_stop(user_id, fuel_stop_id)
        .map_err(|e| internal("Failed to look up fuel stop", &e))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            message: String::from("Fuel stop not found or access denied"),
        })?;

    let gallons_diesel: f64 = request
        .gallons_diesel_purchased
        .unwrap_or(stored.gallons_diesel_purchased);
    let price_diesel: f64 = request
        .pump_price_diesel
        .unwrap_or(stored.diesel_price_per_gallon);
    let gallons_def: Option<f64> = request
        .gallons_def_purchased
        .unwrap_or(stored.gallons_def_purchased);
    let price_def: Option<f64> = request.pump_price_def.unwrap_or(stored.def_price_per_gallon);
    let fuel_card_used: bool = request.fuel_card_used.unwrap_or(stored.fuel_card_used);
    let discount_eligible: bool = request.discount_eligible.unwrap_or(stored.discount_eligible);

    let costs: FuelStopCosts = compute_fuel_stop_costs(&FuelPurchase {
        gallons_diesel,
        price_diesel,
        gallons_def,
        price_def,
        fuel_card_used,
        discount_eligible,
    });

    let update: FuelStopUpdate = FuelStopUpdate {
        pro_number: stored.pro_number,
        date_of_stop: request.date_of_stop.unwrap_or(stored.date_of_stop),
        vendor: request.vendor_name.unwrap_or(stored.vendor),
        location: request.location.unwrap_or(stored.location),
        gallons_diesel_purchased: gallons_diesel,
        diesel_price_per_gallon: price_diesel,
        total_diesel_cost: costs.total_diesel_cost,
        gallons_def_purchased: gallons_def,
        def_price_per_gallon: price_def,
        total_def_cost: costs.total_def_cost,
        total_fuel_stop: costs.total_fuel_stop,
        fuel_card_used: i32::from(fuel_card_used),
        discount_eligible: i32::from(discount_eligible),
    };

    persistence
        .update_fuel_stop(user_id, fuel_stop_id, &update)
        .map_err(|e| internal("Failed to update fuel stop", &e))?;

    tracing::info!(user_id, fuel_stop_id, "updated fuel stop");
    fetch_fuel_stop(persistence, user_id, fuel_stop_id)
}

/// Deletes a fuel stop.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
/// * `fuel_stop_id` - The fuel stop's numeric identifier
///
/// # Errors
///
/// Returns an error if the fuel stop does not exist or belongs to
/// another user.
pub fn delete_fuel_stop(
    persistence: &mut Persistence,
    user_id: i64,
    fuel_stop_id: i64,
) -> Result<DeleteFuelStopResponse, ApiError> {
    let rows_deleted: usize = persistence
        .delete_fuel_stop(user_id, fuel_stop_id)
        .map_err(|e| internal("Failed to delete fuel stop", &e))?;

    if rows_deleted == 0 {
        return Err(ApiError::ResourceNotFound {
            message: String::from("Fuel stop not found or access denied"),
        });
    }

    tracing::info!(user_id, fuel_stop_id, "deleted fuel stop");
    Ok(DeleteFuelStopResponse {
        message: String::from("Fuel stop deleted successfully"),
    })
}

/// Retrieves the user's pay settings, creating a defaulted row on first
/// access.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_settings(persistence: &mut Persistence, user_id: i64) -> Result<SettingsInfo, ApiError> {
    let settings: UserSettingsData = persistence
        .get_or_create_settings(user_id)
        .map_err(|e| internal("Failed to fetch settings", &e))?;
    Ok(SettingsInfo::from(settings))
}

/// Updates the user's pay settings.
///
/// Absent request fields keep their stored values. Switching to mileage
/// pay nullifies the stored percentage rate unless the request also
/// carries an explicit `percentageRate`. Rates are fractions in [0, 1].
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated user's ID
/// * `request` - The settings update request
///
/// # Errors
///
/// Returns an error if the pay type or percentage rate is invalid.
pub fn update_settings(
    persistence: &mut Persistence,
    user_id: i64,
    request: UpdateSettingsRequest,
) -> Result<SettingsInfo, ApiError> {
    let stored: UserSettingsData = persistence
        .get_or_create_settings(user_id)
        .map_err(|e| internal("Failed to fetch settings", &e))?;

    let driver_pay_type: DriverPayType = request.driver_pay_type.as_deref().map_or_else(
        || {
            DriverPayType::from_str(&stored.driver_pay_type).map_err(|_| ApiError::Internal {
                message: format!(
                    "Settings for user {user_id} have unrecognized pay type '{}'",
                    stored.driver_pay_type
                ),
            })
        },
        |value| {
            DriverPayType::from_str(value).map_err(|_| ApiError::InvalidInput {
                message: String::from("Invalid driverPayType"),
            })
        },
    )?;

    let mut percentage_rate: Option<f64> = stored.percentage_rate;
    if matches!(request.driver_pay_type.as_deref(), Some("mileage")) {
        percentage_rate = None;
    }
    // An explicit percentageRate wins, even over a simultaneous switch
    // to mileage pay.
    match request.percentage_rate {
        None => {}
        Some(None) => percentage_rate = None,
        Some(Some(rate)) => {
            validate_percentage_rate(rate).map_err(translate_domain_error)?;
            percentage_rate = Some(rate);
        }
    }

    let update: SettingsUpdate = SettingsUpdate {
        driver_pay_type: driver_pay_type.to_string(),
        percentage_rate,
        fuel_road_use_tax: request
            .fuel_road_use_tax
            .unwrap_or(stored.fuel_road_use_tax),
        maintenance_reserve: request
            .maintenance_reserve
            .unwrap_or(stored.maintenance_reserve),
        bond_deposit: request.bond_deposit.unwrap_or(stored.bond_deposit),
        mrp_fee: request.mrp_fee.unwrap_or(stored.mrp_fee),
    };

    persistence
        .update_settings(user_id, &update)
        .map_err(|e| internal("Failed to update settings", &e))?;

    tracing::info!(user_id, "updated settings");
    let settings: UserSettingsData = persistence
        .get_settings(user_id)
        .map_err(|e| internal("Failed to fetch settings", &e))?
        .ok_or_else(|| ApiError::Internal {
            message: format!("Settings row missing after update for user {user_id}"),
        })?;
    Ok(SettingsInfo::from(settings))
}

/// Re-fetches a load after a mutation so the response reflects the
/// stored row.
fn fetch_load(
    persistence: &mut Persistence,
    user_id: i64,
    pro_number: &str,
) -> Result<LoadInfo, ApiError> {
    persistence
        .get_load_by_pro_number(user_id, pro_number)
        .map_err(|e| internal("Failed to fetch load", &e))?
        .map(LoadInfo::from)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Load '{pro_number}' missing after write"),
        })
}

/// Re-fetches a fuel stop after a mutation so the response reflects the
/// stored row.
fn fetch_fuel_stop(
    persistence: &mut Persistence,
    user_id: i64,
    fuel_stop_id: i64,
) -> Result<FuelStopInfo, ApiError> {
    persistence
        .get_fuel_stop(user_id, fuel_stop_id)
        .map_err(|e| internal("Failed to fetch fuel stop", &e))?
        .map(FuelStopInfo::from)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Fuel stop {fuel_stop_id} missing after write"),
        })
}
