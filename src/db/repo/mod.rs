//! Repository layer for database operations.
//!
//! One repository per table, each constructed over a shared pool handle:
//! - `lines.rs` - Line CRUD
//! - `stations.rs` - Station CRUD with name uniqueness

mod lines;
mod stations;

pub use lines::LineRepository;
pub use stations::StationRepository;

use crate::error::{is_unique_violation, RepoError};
use tracing::warn;

/// Translate a failed INSERT/UPDATE into a domain error, mapping UNIQUE
/// violations on `name` to `DuplicateName`.
fn name_conflict(err: sqlx::Error, entity: &'static str, name: &str) -> RepoError {
    if is_unique_violation(&err) {
        warn!(entity, name, "Rejected duplicate name");
        RepoError::duplicate_name(entity, name)
    } else {
        RepoError::Database(err)
    }
}
