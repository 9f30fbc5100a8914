use crate::domain::model::Account;
use crate::infra::storage::entity::Model as AccountRow;

/// Convert a database row to a domain model
pub fn row_to_domain(row: AccountRow) -> Account {
    Account {
        id: row.id,
        username: row.username,
        email: row.email,
        password_hash: row.password_hash,
        created_at: row.created_at,
    }
}
