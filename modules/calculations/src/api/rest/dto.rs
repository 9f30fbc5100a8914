use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::model::{CalcOp, Calculation, CalculationPatch, NewCalculation};

/// REST DTO for calculation representation.
///
/// The operation tag is called `type` on the wire; `op` internally, since
/// `type` is a keyword.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub op: CalcOp,
    pub operand_a: f64,
    pub operand_b: f64,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// REST DTO for creating a calculation; all fields required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCalculationReq {
    #[serde(rename = "type")]
    pub op: CalcOp,
    pub operand_a: f64,
    pub operand_b: f64,
    pub result: f64,
}

/// REST DTO for partial update; any subset of fields may be supplied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateCalculationReq {
    #[serde(rename = "type")]
    pub op: Option<CalcOp>,
    pub operand_a: Option<f64>,
    pub operand_b: Option<f64>,
    pub result: Option<f64>,
}

// Conversion implementations between REST DTOs and domain models

impl From<Calculation> for CalculationDto {
    fn from(c: Calculation) -> Self {
        Self {
            id: c.id,
            op: c.op,
            operand_a: c.operand_a,
            operand_b: c.operand_b,
            result: c.result,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<CreateCalculationReq> for NewCalculation {
    fn from(req: CreateCalculationReq) -> Self {
        Self {
            op: req.op,
            operand_a: req.operand_a,
            operand_b: req.operand_b,
            result: req.result,
        }
    }
}

impl From<UpdateCalculationReq> for CalculationPatch {
    fn from(req: UpdateCalculationReq) -> Self {
        Self {
            op: req.op,
            operand_a: req.operand_a,
            operand_b: req.operand_b,
            result: req.result,
        }
    }
}
