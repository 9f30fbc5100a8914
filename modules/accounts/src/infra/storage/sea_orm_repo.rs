//! SeaORM-backed repository implementation for the accounts port.
//!
//! Generic over `C`, so it can be constructed with a `DatabaseConnection`
//! or anything else implementing the connection and transaction traits.
//! Every mutating call runs inside its own transaction.

use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};

use crate::domain::model::Account;
use crate::domain::repo::{AccountsRepository, NewAccountRecord, RepoError};
use crate::infra::storage::entity::{ActiveModel as AccountAM, Column, Entity as AccountEntity};
use crate::infra::storage::mapper::row_to_domain;

pub struct SeaOrmAccountsRepository<C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmAccountsRepository<C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> AccountsRepository for SeaOrmAccountsRepository<C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync + 'static,
{
    async fn insert(&self, new: NewAccountRecord) -> Result<Account, RepoError> {
        let txn = self
            .conn
            .begin()
            .await
            .context("begin insert transaction failed")?;

        let m = AccountAM {
            username: Set(new.username),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            created_at: Set(new.created_at),
            ..Default::default()
        };

        match m.insert(&txn).await {
            Ok(row) => {
                txn.commit().await.context("commit insert failed")?;
                Ok(row_to_domain(row))
            }
            Err(err) => {
                let unique = matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)));
                // Roll back before reporting; a failed rollback is not
                // actionable for the caller.
                let _ = txn.rollback().await;
                if unique {
                    Err(RepoError::UniqueViolation)
                } else {
                    Err(RepoError::Other(
                        anyhow::Error::new(err).context("insert account failed"),
                    ))
                }
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Account>> {
        let found = AccountEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(row_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Account>> {
        let found = AccountEntity::find()
            .filter(Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("find_by_username failed")?;
        Ok(found.map(row_to_domain))
    }
}
