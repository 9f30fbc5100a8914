use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of calculation kinds.
///
/// Serialized lowercase on the wire and in the `op` column; anything outside
/// this set is rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CalcOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl CalcOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalcOp::Add => "add",
            CalcOp::Sub => "sub",
            CalcOp::Mul => "mul",
            CalcOp::Div => "div",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(CalcOp::Add),
            "sub" => Some(CalcOp::Sub),
            "mul" => Some(CalcOp::Mul),
            "div" => Some(CalcOp::Div),
            _ => None,
        }
    }
}

/// Stored calculation record.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub id: i32,
    pub op: CalcOp,
    pub operand_a: f64,
    pub operand_b: f64,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new calculation; all fields required.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub op: CalcOp,
    pub operand_a: f64,
    pub operand_b: f64,
    pub result: f64,
}

/// Partial update: only fields present are applied, the rest keep their
/// prior values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationPatch {
    pub op: Option<CalcOp>,
    pub operand_a: Option<f64>,
    pub operand_b: Option<f64>,
    pub result: Option<f64>,
}
