// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction and authentication middleware for the server.
//!
//! This module provides an Axum extractor for validating session tokens
//! and enforcing authentication at the server boundary.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use haul_ledger_api::{AuthenticatedUser, AuthenticationService};
use tracing::{debug, warn};

use crate::{AppState, ErrorResponse};

/// Extractor for authenticated users.
///
/// This extractor validates the session token from the Authorization header
/// and returns the authenticated user context along with the raw token.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionUser(user, token): SessionUser,
/// ) -> Result<Json<Response>, HttpError> {
///     // user: AuthenticatedUser
///     // token: the bearer token that opened this session
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Authentication Flow
///
/// 1. Extract `Authorization: Bearer <token>` header
/// 2. Validate session token via `AuthenticationService::validate_session`
/// 3. Check session expiration
/// 4. Return `AuthenticatedUser` and the token
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if:
/// - Authorization header is missing
/// - Authorization header format is invalid
/// - Session token is unknown
/// - Session is expired
pub struct SessionUser(pub AuthenticatedUser, pub String);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingToken
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidToken
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidToken
        })?;

        let mut persistence = state.persistence.lock().await;
        let user = AuthenticationService::validate_session(&mut persistence, token).map_err(
            |e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidToken
            },
        )?;
        drop(persistence);

        debug!(
            user_id = user.user_id,
            username = %user.username,
            "Session validated successfully"
        );

        Ok(Self(user, token.to_string()))
    }
}

/// Session extraction errors.
///
/// These errors are returned when session validation fails and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingToken,
    /// Authorization header is malformed or the session is invalid.
    InvalidToken,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::MissingToken => String::from("No token provided"),
            Self::InvalidToken => String::from("Invalid token"),
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorResponse { message })).into_response()
    }
}
