//! User account module: registration, login and lookup.
//!
//! Layering follows the usual hexagonal split:
//! - `domain` — pure models, errors, ports and the service with business rules;
//! - `infra` — SeaORM storage adapter, migrations and the Argon2 hasher;
//! - `api` — REST DTOs, handlers and routes.

pub mod api;
pub mod domain;
pub mod infra;
