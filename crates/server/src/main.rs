// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use haul_ledger_api::{
    ApiError, AuthError, AuthenticationService, CreateFuelStopRequest, CreateLoadRequest,
    DeleteFuelStopResponse, FuelStopInfo, LoadInfo, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, SettingsInfo, UpdateFuelStopRequest, UpdateLoadRequest,
    UpdateSettingsRequest, complete_load, create_fuel_stop, create_load, delete_fuel_stop,
    get_settings, list_fuel_stops, list_loads, update_fuel_stop, update_load, update_settings,
};
use haul_ledger_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::session::SessionUser;

mod session;

/// Haul Ledger Server - HTTP server for the trucking business tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3001)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for users, sessions, loads, and fuel stops.
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error message.
    message: String,
}

/// Response for operations that only return a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageResponse {
    /// The message.
    message: String,
}

/// Query parameters for listing fuel stops.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FuelStopsQuery {
    /// Optional PRO number to filter by.
    pro_number: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::MissingField { .. }
            | ApiError::MissingPayloadField { .. }
            | ApiError::InvalidInput { .. }
            | ApiError::PasswordPolicyViolation { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal API error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<AuthError> for HttpError {
    fn from(err: AuthError) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: err.to_string(),
        }
    }
}

/// Handler for POST /api/register endpoint.
///
/// Creates a new user account and opens a session for it.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), HttpError> {
    info!(email = ?req.email, "Handling register request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterResponse = AuthenticationService::register(&mut persistence, &req)?;
    drop(persistence);

    info!(user_id = response.user_id, "Successfully registered user");

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST /api/login endpoint.
///
/// Verifies credentials and opens a new session.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(email = ?req.email, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let token: String = AuthenticationService::login(
        &mut persistence,
        req.email.as_deref(),
        req.password.as_deref(),
    )?;
    drop(persistence);

    Ok(Json(LoginResponse { token }))
}

/// Handler for POST /api/logout endpoint.
///
/// Invalidates the session the request was authenticated with.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, token): SessionUser,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(user_id = user.user_id, "Handling logout request");

    let mut persistence = app_state.persistence.lock().await;
    AuthenticationService::logout(&mut persistence, &token)?;
    drop(persistence);

    Ok(Json(MessageResponse {
        message: String::from("Logged out"),
    }))
}

/// Handler for GET /api/loads endpoint.
///
/// Returns all of the authenticated user's loads.
async fn handle_list_loads(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
) -> Result<Json<Vec<LoadInfo>>, HttpError> {
    info!(user_id = user.user_id, "Handling list loads request");

    let mut persistence = app_state.persistence.lock().await;
    let loads: Vec<LoadInfo> = list_loads(&mut persistence, user.user_id)?;
    drop(persistence);

    Ok(Json(loads))
}

/// Handler for POST /api/loads endpoint.
///
/// Creates a new load for the authenticated user.
async fn handle_create_load(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Json(req): Json<CreateLoadRequest>,
) -> Result<(StatusCode, Json<LoadInfo>), HttpError> {
    info!(
        user_id = user.user_id,
        pro_number = ?req.pro_number,
        "Handling create load request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let load: LoadInfo = create_load(&mut persistence, user.user_id, &req)?;
    drop(persistence);

    info!(
        user_id = user.user_id,
        pro_number = %load.pro_number,
        "Successfully created load"
    );

    Ok((StatusCode::CREATED, Json(load)))
}

/// Handler for PUT `/api/loads/{proNumber}` endpoint.
///
/// Updates an existing load owned by the authenticated user.
async fn handle_update_load(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(pro_number): Path<String>,
    Json(req): Json<UpdateLoadRequest>,
) -> Result<Json<LoadInfo>, HttpError> {
    info!(
        user_id = user.user_id,
        pro_number = %pro_number,
        "Handling update load request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let load: LoadInfo = update_load(&mut persistence, user.user_id, &pro_number, req)?;
    drop(persistence);

    Ok(Json(load))
}

/// Handler for PUT `/api/loads/{proNumber}/complete` endpoint.
///
/// Marks a load as delivered with the current timestamp.
async fn handle_complete_load(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(pro_number): Path<String>,
) -> Result<Json<LoadInfo>, HttpError> {
    info!(
        user_id = user.user_id,
        pro_number = %pro_number,
        "Handling complete load request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let load: LoadInfo = complete_load(&mut persistence, user.user_id, &pro_number)?;
    drop(persistence);

    info!(
        user_id = user.user_id,
        pro_number = %load.pro_number,
        "Successfully completed load"
    );

    Ok(Json(load))
}

/// Handler for GET /api/fuelstops endpoint.
///
/// Returns the authenticated user's fuel stops, optionally filtered by
/// PRO number, newest first.
async fn handle_list_fuel_stops(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Query(params): Query<FuelStopsQuery>,
) -> Result<Json<Vec<FuelStopInfo>>, HttpError> {
    info!(
        user_id = user.user_id,
        pro_number = ?params.pro_number,
        "Handling list fuel stops request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let fuel_stops: Vec<FuelStopInfo> =
        list_fuel_stops(&mut persistence, user.user_id, params.pro_number.as_deref())?;
    drop(persistence);

    Ok(Json(fuel_stops))
}

/// Handler for POST /api/fuelstops endpoint.
///
/// Records a new fuel stop against one of the user's loads.
async fn handle_create_fuel_stop(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Json(req): Json<CreateFuelStopRequest>,
) -> Result<(StatusCode, Json<FuelStopInfo>), HttpError> {
    info!(
        user_id = user.user_id,
        pro_number = ?req.pro_number,
        "Handling create fuel stop request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let fuel_stop: FuelStopInfo = create_fuel_stop(&mut persistence, user.user_id, &req)?;
    drop(persistence);

    info!(
        user_id = user.user_id,
        fuel_stop_id = fuel_stop.id,
        "Successfully created fuel stop"
    );

    Ok((StatusCode::CREATED, Json(fuel_stop)))
}

/// Handler for PUT `/api/fuelstops/{id}` endpoint.
///
/// Updates an existing fuel stop and recomputes its derived costs.
async fn handle_update_fuel_stop(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(fuel_stop_id): Path<i64>,
    Json(req): Json<UpdateFuelStopRequest>,
) -> Result<Json<FuelStopInfo>, HttpError> {
    info!(
        user_id = user.user_id,
        fuel_stop_id = fuel_stop_id,
        "Handling update fuel stop request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let fuel_stop: FuelStopInfo =
        update_fuel_stop(&mut persistence, user.user_id, fuel_stop_id, req)?;
    drop(persistence);

    Ok(Json(fuel_stop))
}

/// Handler for DELETE `/api/fuelstops/{id}` endpoint.
///
/// Deletes a fuel stop owned by the authenticated user.
async fn handle_delete_fuel_stop(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(fuel_stop_id): Path<i64>,
) -> Result<Json<DeleteFuelStopResponse>, HttpError> {
    info!(
        user_id = user.user_id,
        fuel_stop_id = fuel_stop_id,
        "Handling delete fuel stop request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteFuelStopResponse =
        delete_fuel_stop(&mut persistence, user.user_id, fuel_stop_id)?;
    drop(persistence);

    info!(
        user_id = user.user_id,
        fuel_stop_id = fuel_stop_id,
        "Successfully deleted fuel stop"
    );

    Ok(Json(response))
}

/// Handler for GET /api/users/settings endpoint.
///
/// Returns the user's pay settings, creating the default row on first
/// access.
async fn handle_get_settings(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
) -> Result<Json<SettingsInfo>, HttpError> {
    info!(user_id = user.user_id, "Handling get settings request");

    let mut persistence = app_state.persistence.lock().await;
    let settings: SettingsInfo = get_settings(&mut persistence, user.user_id)?;
    drop(persistence);

    Ok(Json(settings))
}

/// Handler for PUT /api/users/settings endpoint.
///
/// Updates the user's pay settings.
async fn handle_update_settings(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsInfo>, HttpError> {
    info!(user_id = user.user_id, "Handling update settings request");

    let mut persistence = app_state.persistence.lock().await;
    let settings: SettingsInfo = update_settings(&mut persistence, user.user_id, req)?;
    drop(persistence);

    info!(
        user_id = user.user_id,
        driver_pay_type = %settings.driver_pay_type,
        "Successfully updated settings"
    );

    Ok(Json(settings))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/register", post(handle_register))
        .route("/api/login", post(handle_login))
        .route("/api/logout", post(handle_logout))
        .route("/api/loads", get(handle_list_loads))
        .route("/api/loads", post(handle_create_load))
        .route("/api/loads/{proNumber}", put(handle_update_load))
        .route("/api/loads/{proNumber}/complete", put(handle_complete_load))
        .route("/api/fuelstops", get(handle_list_fuel_stops))
        .route("/api/fuelstops", post(handle_create_fuel_stop))
        .route("/api/fuelstops/{id}", put(handle_update_fuel_stop))
        .route("/api/fuelstops/{id}", delete(handle_delete_fuel_stop))
        .route("/api/users/settings", get(handle_get_settings))
        .route("/api/users/settings", put(handle_update_settings))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Haul Ledger Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    // Sweep sessions that expired while the server was down
    let expired: usize = persistence.delete_expired_sessions()?;
    if expired > 0 {
        info!(count = expired, "Deleted expired sessions");
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
