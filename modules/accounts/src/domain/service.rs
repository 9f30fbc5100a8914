use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::{Account, Credentials, NewAccount};
use crate::domain::ports::PasswordHasher;
use crate::domain::repo::{AccountsRepository, NewAccountRecord, RepoError};

/// Field constraints enforced on registration payloads.
pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;

/// Domain service with business rules for account management.
/// Depends only on the repository and hasher ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn AccountsRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl Service {
    pub fn new(repo: Arc<dyn AccountsRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    #[instrument(
        name = "accounts.service.register",
        skip(self, new),
        fields(username = %new.username)
    )]
    pub async fn register(&self, new: NewAccount) -> Result<Account, DomainError> {
        info!("Registering new account");

        self.validate_new_account(&new)?;

        let password_hash = self
            .hasher
            .hash(&new.password)
            .map_err(|e| DomainError::database(e.to_string()))?;

        let record = NewAccountRecord {
            username: new.username,
            email: new.email,
            password_hash,
            created_at: Utc::now(),
        };

        let account = self.repo.insert(record).await.map_err(|e| match e {
            RepoError::UniqueViolation => DomainError::Conflict,
            RepoError::Other(e) => DomainError::database(e.to_string()),
        })?;

        info!("Successfully registered account with id={}", account.id);
        Ok(account)
    }

    /// Authenticate credentials against the stored hash.
    ///
    /// An unknown username and a wrong password produce the same error, so
    /// the response never reveals whether the username exists.
    #[instrument(
        name = "accounts.service.authenticate",
        skip(self, creds),
        fields(username = %creds.username)
    )]
    pub async fn authenticate(&self, creds: Credentials) -> Result<Account, DomainError> {
        debug!("Authenticating account");

        let account = self
            .repo
            .find_by_username(&creds.username)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or(DomainError::InvalidCredentials)?;

        if !self.hasher.verify(&creds.password, &account.password_hash) {
            return Err(DomainError::InvalidCredentials);
        }

        debug!("Successfully authenticated account id={}", account.id);
        Ok(account)
    }

    #[instrument(name = "accounts.service.get_account", skip(self), fields(account_id = %id))]
    pub async fn get_account(&self, id: i32) -> Result<Account, DomainError> {
        debug!("Getting account by id");

        let account = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::not_found(id))?;

        debug!("Successfully retrieved account");
        Ok(account)
    }

    // --- validation helpers ---

    fn validate_new_account(&self, new: &NewAccount) -> Result<(), DomainError> {
        let len = new.username.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
            return Err(DomainError::validation(
                "username",
                format!("must be {USERNAME_MIN}-{USERNAME_MAX} characters"),
            ));
        }
        if new.email.is_empty() || !new.email.contains('@') || !new.email.contains('.') {
            return Err(DomainError::validation("email", "must be a valid email"));
        }
        if new.password.chars().count() < PASSWORD_MIN {
            return Err(DomainError::validation(
                "password",
                format!("must be at least {PASSWORD_MIN} characters"),
            ));
        }
        Ok(())
    }
}
