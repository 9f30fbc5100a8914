use crate::domain::model::Account;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Row data for inserting a new account.
///
/// The service computes the hash and timestamp; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccountRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Storage errors the domain needs to tell apart.
///
/// Uniqueness is enforced by the store, not pre-checked: the adapter maps a
/// unique-constraint violation (username or email) to `UniqueViolation`
/// after rolling the transaction back.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("unique constraint violated")]
    UniqueViolation,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Port for the domain layer: persistence operations the domain needs.
#[async_trait]
pub trait AccountsRepository: Send + Sync {
    /// Insert a new account inside a single transaction and return the stored row.
    async fn insert(&self, new: NewAccountRecord) -> Result<Account, RepoError>;
    /// Load an account by id.
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Account>>;
    /// Load an account by username.
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Account>>;
}
