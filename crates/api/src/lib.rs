// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for Haul Ledger.
//!
//! This crate holds everything between the HTTP surface and storage:
//! session-based authentication, request/response DTOs, handler
//! functions for loads, fuel stops, and pay settings, and the API error
//! taxonomy. Handlers are plain functions over [`Persistence`] so the
//! server layer stays a thin routing shell.
//!
//! [`Persistence`]: haul_ledger_persistence::Persistence

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedUser, AuthenticationService};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use handlers::{
    complete_load, create_fuel_stop, create_load, delete_fuel_stop, get_settings, list_fuel_stops,
    list_loads, update_fuel_stop, update_load, update_settings,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    CreateFuelStopRequest, CreateLoadRequest, DeleteFuelStopResponse, FuelStopInfo, LoadInfo,
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, SettingsInfo,
    UpdateFuelStopRequest, UpdateLoadRequest, UpdateSettingsRequest,
};
