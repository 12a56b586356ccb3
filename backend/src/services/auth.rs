//! Authentication service
//!
//! Pure credential lookup: exact match on email, password and role against
//! the users collection. No hashing and no session tokens; clients hold the
//! returned user and resend no credential on later requests.

use std::sync::Arc;

use shared::models::{AuthenticatedUser, User};
use shared::types::Role;

use crate::error::{AppError, AppResult};
use crate::storage::{collections, JsonStore};

/// Auth service for role-scoped logins
#[derive(Clone)]
pub struct AuthService {
    store: Arc<JsonStore>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Authenticate a user by email, password and role
    ///
    /// Read-only; the password never leaves this function.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> AppResult<AuthenticatedUser> {
        tracing::debug!(role = role.as_str(), "login attempt");

        let users: Vec<User> = self.store.load(collections::USERS).await;

        users
            .into_iter()
            .find(|u| u.email == email && u.password == password && u.role == role)
            .map(AuthenticatedUser::from)
            .ok_or(AppError::InvalidCredentials)
    }
}
