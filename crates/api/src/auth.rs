// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session-based authentication.
//!
//! Sessions are server-side rows keyed by an opaque token. Clients send
//! the token as `Authorization: Bearer <token>` and every validated
//! request touches the session's last-activity timestamp.

use time::{Duration, OffsetDateTime};

use haul_ledger_persistence::{Persistence, PersistenceError, SessionData, UserData};

use crate::error::{ApiError, AuthError};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{RegisterRequest, RegisterResponse};

/// An authenticated user resolved from a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user's numeric identifier.
    pub user_id: i64,
    /// The user's display name.
    pub username: String,
    /// The user's login email.
    pub email: String,
}

/// Authentication service for account and session management.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Session expiration duration (8 hours).
    const SESSION_EXPIRATION: Duration = Duration::hours(8);

    /// Registers a new account and logs it in.
    ///
    /// The password is validated against the policy before the account
    /// is created; the stored hash is produced by the persistence layer.
    /// A session is created so the new user is authenticated immediately.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `request` - The registration request
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the password
    /// violates policy, or the email is already in use.
    pub fn register(
        persistence: &mut Persistence,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, ApiError> {
        PasswordPolicy::default().validate(request.password.as_deref())?;

        let username: &str = match request.username.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(ApiError::MissingField {
                    field: String::from("username"),
                });
            }
        };
        let email: &str = match request.email.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(ApiError::MissingField {
                    field: String::from("email"),
                });
            }
        };
        let password: &str = request.password.as_deref().unwrap_or_default();

        if persistence
            .get_user_by_email(email)
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to check for existing account: {e}"),
            })?
            .is_some()
        {
            return Err(ApiError::Conflict {
                message: String::from("Email already in use."),
            });
        }

        let user_id: i64 = persistence
            .create_user(username, email, password)
            .map_err(|e| match e {
                PersistenceError::UniqueViolation(_) => ApiError::Conflict {
                    message: String::from("Email already in use."),
                },
                _ => ApiError::Internal {
                    message: format!("Failed to create account: {e}"),
                },
            })?;

        let token: String = Self::open_session(persistence, user_id).map_err(ApiError::from)?;
        tracing::info!(user_id, "registered new account");

        Ok(RegisterResponse {
            message: String::from("User registered"),
            user_id,
            token,
        })
    }

    /// Authenticates a user by email and password and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The login email, if supplied
    /// * `password` - The plain-text password, if supplied
    ///
    /// # Returns
    ///
    /// The session token.
    ///
    /// # Errors
    ///
    /// Returns `Invalid credentials` for an unknown email or a wrong
    /// password; the two cases are deliberately indistinguishable.
    pub fn login(
        persistence: &mut Persistence,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, AuthError> {
        let (Some(email), Some(password)) = (email, password) else {
            return Err(Self::invalid_credentials());
        };

        let user: UserData = persistence
            .get_user_by_email(email)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(Self::invalid_credentials)?;

        let verified: bool = persistence
            .verify_password(password, &user.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !verified {
            return Err(Self::invalid_credentials());
        }

        let token: String = Self::open_session(persistence, user.user_id)?;
        tracing::debug!(user_id = user.user_id, "login succeeded");
        Ok(token)
    }

    /// Validates a session token and returns the authenticated user.
    ///
    /// Touches the session's last-activity timestamp on success.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The token from the `Authorization` header
    ///
    /// # Errors
    ///
    /// Returns `Invalid token` for an unknown, expired, or orphaned
    /// session.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(Self::invalid_token)?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|_| Self::invalid_token())?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(Self::invalid_token());
        }

        let user: UserData = persistence
            .get_user_by_id(session.user_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(Self::invalid_token)?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        Ok(AuthenticatedUser {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
        })
    }

    /// Logs out by deleting the session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be deleted.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)
    }

    /// Creates a session row for a user and returns its token.
    fn open_session(persistence: &mut Persistence, user_id: i64) -> Result<String, AuthError> {
        let session_token: String = Self::generate_session_token();

        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + Self::SESSION_EXPIRATION;
        let expires_at_str: String = expires_at
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, user_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        Ok(session_token)
    }

    /// Generates an opaque session token.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid credentials"),
        }
    }

    fn invalid_token() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid token"),
        }
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        match err {
            PersistenceError::SessionNotFound(msg) => AuthError::AuthenticationFailed {
                reason: msg,
            },
            _ => AuthError::AuthenticationFailed {
                reason: format!("Database error: {err}"),
            },
        }
    }
}
