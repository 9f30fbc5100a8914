//! Calculation BREAD module: Browse/Read/Edit/Add/Delete over stored
//! calculation records.
//!
//! Same layering as the accounts module: `domain` (models, errors, port,
//! service), `infra` (SeaORM storage), `api` (REST surface).

pub mod api;
pub mod domain;
pub mod infra;
