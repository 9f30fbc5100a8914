use crate::domain::model::{CalcOp, Calculation};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Row data for inserting a new calculation.
///
/// The service stamps the timestamps; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCalculationRecord {
    pub op: CalcOp,
    pub operand_a: f64,
    pub operand_b: f64,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Port for the domain layer: persistence operations the domain needs.
#[async_trait]
pub trait CalculationsRepository: Send + Sync {
    /// Insert a new row inside a single transaction and return the stored row.
    async fn insert(&self, new: NewCalculationRecord) -> anyhow::Result<Calculation>;
    /// Load a calculation by id.
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Calculation>>;
    /// All rows; iteration order is not part of the contract.
    async fn list_all(&self) -> anyhow::Result<Vec<Calculation>>;
    /// Persist an existing row (by primary key in `c.id`).
    async fn update(&self, c: Calculation) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
