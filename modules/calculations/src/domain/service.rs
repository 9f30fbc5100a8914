use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::{Calculation, CalculationPatch, NewCalculation};
use crate::domain::repo::{CalculationsRepository, NewCalculationRecord};

/// Domain service for calculation records.
/// Handlers are pass-throughs; the only rules here are patch semantics and
/// not-found signalling.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn CalculationsRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn CalculationsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "calculations.service.create", skip(self, new), fields(op = %new.op.as_str()))]
    pub async fn create(&self, new: NewCalculation) -> Result<Calculation, DomainError> {
        info!("Creating calculation");

        let now = Utc::now();
        let record = NewCalculationRecord {
            op: new.op,
            operand_a: new.operand_a,
            operand_b: new.operand_b,
            result: new.result,
            created_at: now,
            updated_at: now,
        };

        let calc = self
            .repo
            .insert(record)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully created calculation with id={}", calc.id);
        Ok(calc)
    }

    #[instrument(name = "calculations.service.list", skip(self))]
    pub async fn list(&self) -> Result<Vec<Calculation>, DomainError> {
        debug!("Listing calculations");

        let calcs = self
            .repo
            .list_all()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!("Successfully listed {} calculations", calcs.len());
        Ok(calcs)
    }

    #[instrument(name = "calculations.service.get", skip(self), fields(calc_id = %id))]
    pub async fn get(&self, id: i32) -> Result<Calculation, DomainError> {
        debug!("Getting calculation by id");

        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Partial update: only fields present in the patch are applied; a
    /// missing target row is signalled without mutating anything.
    #[instrument(name = "calculations.service.update", skip(self, patch), fields(calc_id = %id))]
    pub async fn update(
        &self,
        id: i32,
        patch: CalculationPatch,
    ) -> Result<Calculation, DomainError> {
        info!("Updating calculation");

        let mut current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::not_found(id))?;

        if let Some(op) = patch.op {
            current.op = op;
        }
        if let Some(a) = patch.operand_a {
            current.operand_a = a;
        }
        if let Some(b) = patch.operand_b {
            current.operand_b = b;
        }
        if let Some(result) = patch.result {
            current.result = result;
        }
        current.updated_at = Utc::now();

        self.repo
            .update(current.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully updated calculation");
        Ok(current)
    }

    #[instrument(name = "calculations.service.delete", skip(self), fields(calc_id = %id))]
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        info!("Deleting calculation");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if !deleted {
            return Err(DomainError::not_found(id));
        }

        info!("Successfully deleted calculation");
        Ok(())
    }
}
