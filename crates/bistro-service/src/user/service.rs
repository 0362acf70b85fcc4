//! Registration, login and profile self-service.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use bistro_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use bistro_auth::password::{PasswordHasher, PasswordValidator};
use bistro_core::error::AppError;
use bistro_core::traits::{Clock, IdGenerator};
use bistro_database::repositories::UserRepository;
use bistro_entity::user::{CreateUser, UpdateUser, User, UserRole};

use super::normalize_email;
use crate::context::RequestContext;

/// Sign-up data.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Login email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
}

/// Profile fields a user may change on their own account.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Default party size offered when booking.
    pub guest_number: Option<i64>,
    pub allergy: Option<String>,
    /// New plain-text password.
    pub password: Option<String>,
}

/// A signed-in user and their tokens.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: User,
    pub tokens: TokenPair,
}

/// Handles account self-service.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl UserService {
    /// Creates a new user service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
            decoder,
            clock,
            ids,
        }
    }

    /// Register a regular account and sign it in.
    pub async fn register(&self, registration: Registration) -> Result<AuthSession, AppError> {
        let email = normalize_email(&registration.email)?;
        self.validator.validate(&registration.password)?;
        let password_hash = self.hasher.hash_password(&registration.password)?;

        let user = self
            .user_repo
            .create(
                self.ids.next_id(),
                &CreateUser {
                    email,
                    password_hash,
                    first_name: registration.first_name,
                    last_name: registration.last_name,
                    role: UserRole::User,
                },
            )
            .await?;

        info!(user_id = %user.id, email = %user.email, "User registered");

        let tokens = self.encoder.generate_token_pair(&user)?;
        Ok(AuthSession { user, tokens })
    }

    /// Exchange credentials for a token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let invalid = || AppError::authentication("Invalid email or password");

        let email = email.trim().to_lowercase();
        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            warn!(email = %email, "Login attempt for unknown email");
            return Err(invalid());
        };

        if !self
            .hasher
            .verify_password(password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(invalid());
        }

        info!(user_id = %user.id, "User logged in");
        let tokens = self.encoder.generate_token_pair(&user)?;
        Ok(AuthSession { user, tokens })
    }

    /// Issue a fresh pair from a refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;
        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        self.encoder.generate_token_pair(&user)
    }

    /// The caller's profile.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Update the caller's own profile.
    pub async fn edit_profile(
        &self,
        ctx: &RequestContext,
        changes: ProfileChanges,
    ) -> Result<User, AppError> {
        let guest_number = changes
            .guest_number
            .map(|n| {
                i16::try_from(n)
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| AppError::validation("guestNumber must be a positive integer"))
            })
            .transpose()?;

        let password_hash = match &changes.password {
            Some(password) => {
                self.validator.validate(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            None => None,
        };
        let password_changed = password_hash.is_some();

        let update = UpdateUser {
            first_name: changes.first_name,
            last_name: changes.last_name,
            guest_number,
            allergy: changes.allergy,
            password_hash,
        };

        let user = self
            .user_repo
            .update(ctx.user_id, &update, self.clock.now())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %ctx.user_id, password_changed, "Profile updated");
        Ok(user)
    }
}
