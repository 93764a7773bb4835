use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{entity} id {id} does not exist")]
    NotFound { entity: &'static str, id: i64 },
    #[error("duplicate {entity} name: {name}")]
    DuplicateName { entity: &'static str, name: String },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl RepoError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        RepoError::NotFound { entity, id }
    }

    pub fn duplicate_name(entity: &'static str, name: impl Into<String>) -> Self {
        RepoError::DuplicateName {
            entity,
            name: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepoError::NotFound { .. })
    }

    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, RepoError::DuplicateName { .. })
    }
}

/// True when `err` is a UNIQUE constraint violation reported by the database.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = RepoError::not_found("station", 100);
        assert_eq!(err.to_string(), "station id 100 does not exist");
        assert!(err.is_not_found());
        assert!(!err.is_duplicate_name());
    }

    #[test]
    fn test_duplicate_name_message() {
        let err = RepoError::duplicate_name("station", "잠실역");
        assert_eq!(err.to_string(), "duplicate station name: 잠실역");
        assert!(err.is_duplicate_name());
    }

    #[test]
    fn test_row_not_found_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
