use anyhow::anyhow;

use crate::domain::model::{CalcOp, Calculation};
use crate::infra::storage::entity::Model as CalculationRow;

/// Convert a database row to a domain model.
///
/// The `op` column only ever holds values written through `CalcOp::as_str`,
/// so a parse failure means the row was tampered with out of band.
pub fn row_to_domain(row: CalculationRow) -> anyhow::Result<Calculation> {
    let op = CalcOp::parse(&row.op)
        .ok_or_else(|| anyhow!("unknown calculation op '{}' in row {}", row.op, row.id))?;
    Ok(Calculation {
        id: row.id,
        op,
        operand_a: row.operand_a,
        operand_b: row.operand_b,
        result: row.result,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
