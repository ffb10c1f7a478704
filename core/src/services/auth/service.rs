//! Account registration and password login

use std::sync::Arc;
use std::time::Duration;

use aging_shared::utils::{is_valid_email, normalize_email};
use uuid::Uuid;

use crate::domain::entities::{Document, User, UserFields};
use crate::domain::value_objects::HashedCredential;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{EntityRepository, UserRepository};
use crate::services::deadline::within_deadline;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Account service for user creation and login
pub struct AccountService {
    /// User repository for account lookups and inserts
    users: Arc<dyn UserRepository>,
    /// Credential hasher
    hasher: PasswordHasher,
    /// Token service for issuing bearer tokens
    token_service: Arc<TokenService>,
    /// Upper bound on each store call
    deadline: Duration,
}

impl AccountService {
    /// Create a new account service
    ///
    /// # Arguments
    ///
    /// * `users` - Store holding user accounts
    /// * `hasher` - Credential hasher (bcrypt)
    /// * `token_service` - Issues tokens on successful login
    /// * `deadline` - Upper bound on each store call
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: PasswordHasher,
        token_service: Arc<TokenService>,
        deadline: Duration,
    ) -> Self {
        Self {
            users,
            hasher,
            token_service,
            deadline,
        }
    }

    /// Register a new account
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - id of the inserted user
    /// * `Err(DomainError)` - invalid input, duplicate email, or store/hash failure
    pub async fn register(&self, email: &str, password: &str) -> Result<Uuid, DomainError> {
        if !is_valid_email(email) {
            return Err(DomainError::validation("email is not a valid address"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password must not be empty"));
        }

        let email = normalize_email(email);

        let existing = within_deadline(self.deadline, self.users.find_by_email(&email)).await?;
        if existing.is_some() {
            tracing::warn!(event = "duplicate_account", "Registration rejected for existing email");
            return Err(AuthError::AccountAlreadyExists.into());
        }

        let password_hash = self.hash_password(password).await?;
        let user = User::new(email, password_hash);

        // the store enforces uniqueness again in case a concurrent
        // registration won the race since the lookup above
        let id = within_deadline(self.deadline, self.users.insert(user))
            .await
            .map_err(duplicate_account)?;
        tracing::info!(user_id = %id, event = "account_created", "Registered new user account");

        Ok(id)
    }

    /// Log in with email and password, returning a bearer token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - signed token for the user's id
    /// * `Err(DomainError)` - unknown email (NotFound), wrong password
    ///   (Unauthorized), or signing/store failure
    pub async fn login(&self, email: &str, password: &str) -> Result<String, DomainError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation("email and password are required"));
        }

        let email = normalize_email(email);
        let user = within_deadline(self.deadline, self.users.find_by_email(&email))
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if !self.verify_password(password, &user.password_hash).await? {
            tracing::warn!(user_id = %user.id, event = "login_failed", "Password mismatch");
            return Err(AuthError::IncorrectPassword.into());
        }

        let token = self.token_service.issue(&user.id.to_string())?;
        tracing::info!(user_id = %user.id, event = "login_succeeded", "Issued bearer token");

        Ok(token)
    }

    /// Change a user's email, then re-read the stored account
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - the account after the update
    /// * `Err(DomainError)` - invalid email, email owned by another account,
    ///   no account with `id`, or store failure
    pub async fn update_email(&self, id: Uuid, email: &str) -> Result<User, DomainError> {
        if !is_valid_email(email) {
            return Err(DomainError::validation("email is not a valid address"));
        }

        let email = normalize_email(email);
        let owner = within_deadline(self.deadline, self.users.find_by_email(&email)).await?;
        if owner.is_some_and(|user| user.id != id) {
            return Err(AuthError::AccountAlreadyExists.into());
        }

        let matched = within_deadline(
            self.deadline,
            self.users.update(id, UserFields { email }),
        )
        .await
        .map_err(duplicate_account)?;
        if matched == 0 {
            return Err(DomainError::not_found(User::NAME));
        }

        within_deadline(self.deadline, self.users.find_by_id(id))
            .await?
            .ok_or_else(|| DomainError::not_found(User::NAME))
    }

    // bcrypt is CPU bound; keep it off the async workers
    async fn hash_password(&self, password: &str) -> Result<HashedCredential, DomainError> {
        let hasher = self.hasher;
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::HashingFailed(e.to_string()))?
    }

    async fn verify_password(
        &self,
        password: &str,
        hash: &HashedCredential,
    ) -> Result<bool, DomainError> {
        let hasher = self.hasher;
        let password = password.to_owned();
        let hash = hash.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::HashingFailed(e.to_string()).into())
    }
}

/// A store-level uniqueness conflict on users is a duplicate account
fn duplicate_account(err: DomainError) -> DomainError {
    match err {
        DomainError::Conflict { .. } => AuthError::AccountAlreadyExists.into(),
        other => other,
    }
}
