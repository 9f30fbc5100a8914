//! SeaORM-backed repository implementation for the calculations port.
//!
//! Generic over `C` like the accounts adapter; every mutating call runs in
//! its own transaction, committed before returning. A transaction dropped on
//! the error path rolls back.

use anyhow::Context;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, TransactionTrait};

use crate::domain::model::Calculation;
use crate::domain::repo::{CalculationsRepository, NewCalculationRecord};
use crate::infra::storage::entity::{ActiveModel as CalcAM, Entity as CalcEntity};
use crate::infra::storage::mapper::row_to_domain;

pub struct SeaOrmCalculationsRepository<C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmCalculationsRepository<C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> CalculationsRepository for SeaOrmCalculationsRepository<C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync + 'static,
{
    async fn insert(&self, new: NewCalculationRecord) -> anyhow::Result<Calculation> {
        let txn = self
            .conn
            .begin()
            .await
            .context("begin insert transaction failed")?;

        let m = CalcAM {
            op: Set(new.op.as_str().to_owned()),
            operand_a: Set(new.operand_a),
            operand_b: Set(new.operand_b),
            result: Set(new.result),
            created_at: Set(new.created_at),
            updated_at: Set(new.updated_at),
            ..Default::default()
        };

        let row = m.insert(&txn).await.context("insert calculation failed")?;
        txn.commit().await.context("commit insert failed")?;
        row_to_domain(row)
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Calculation>> {
        let found = CalcEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        found.map(row_to_domain).transpose()
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Calculation>> {
        let rows = CalcEntity::find()
            .all(&self.conn)
            .await
            .context("list_all failed")?;
        rows.into_iter().map(row_to_domain).collect()
    }

    async fn update(&self, c: Calculation) -> anyhow::Result<()> {
        let txn = self
            .conn
            .begin()
            .await
            .context("begin update transaction failed")?;

        let m = CalcAM {
            id: Set(c.id),
            op: Set(c.op.as_str().to_owned()),
            operand_a: Set(c.operand_a),
            operand_b: Set(c.operand_b),
            result: Set(c.result),
            created_at: Set(c.created_at),
            updated_at: Set(c.updated_at),
        };

        let _ = m.update(&txn).await.context("update calculation failed")?;
        txn.commit().await.context("commit update failed")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let txn = self
            .conn
            .begin()
            .await
            .context("begin delete transaction failed")?;

        let res = CalcEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .context("delete calculation failed")?;
        txn.commit().await.context("commit delete failed")?;
        Ok(res.rows_affected > 0)
    }
}
