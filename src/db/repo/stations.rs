use super::name_conflict;
use crate::domain::{NewStation, Station, StationId};
use crate::error::{RepoError, RepoResult};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::{debug, warn};

const ENTITY: &str = "station";

/// CRUD over the `station` table. Station names are unique.
#[derive(Debug, Clone)]
pub struct StationRepository {
    pool: SqlitePool,
}

impl StationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        StationRepository { pool }
    }

    /// Whether a station with this exact name is stored.
    pub async fn exists_by_name(&self, name: &str) -> RepoResult<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM station WHERE name = ?)")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get::<i64, _>(0)? != 0)
    }

    /// Insert a station and return it with its generated id.
    ///
    /// The name is checked before the insert; a concurrent insert that wins the
    /// race is still caught by the UNIQUE constraint.
    ///
    /// # Errors
    /// `DuplicateName` if the name is taken. Nothing is written in that case.
    pub async fn save(&self, station: &NewStation) -> RepoResult<Station> {
        if self.exists_by_name(&station.name).await? {
            warn!(name = %station.name, "Rejected duplicate station name");
            return Err(RepoError::duplicate_name(ENTITY, station.name.as_str()));
        }

        let result = sqlx::query("INSERT INTO station (name) VALUES (?)")
            .bind(&station.name)
            .execute(&self.pool)
            .await
            .map_err(|e| name_conflict(e, ENTITY, &station.name))?;

        let id = StationId::new(result.last_insert_rowid());
        debug!(id = %id, name = %station.name, "Saved station");
        Ok(station.clone().with_id(id))
    }

    /// All stations in id order.
    pub async fn list_all(&self) -> RepoResult<Vec<Station>> {
        let rows = sqlx::query("SELECT id, name FROM station ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        let stations = rows.iter().map(map_station).collect::<Result<Vec<_>, _>>()?;
        Ok(stations)
    }

    /// # Errors
    /// `NotFound` when no station has this id.
    pub async fn get_by_id(&self, id: StationId) -> RepoResult<Station> {
        let row = sqlx::query("SELECT id, name FROM station WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(map_station(&row)?),
            None => Err(RepoError::not_found(ENTITY, id.as_i64())),
        }
    }

    /// # Errors
    /// `NotFound` when no station has this id.
    pub async fn delete_by_id(&self, id: StationId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM station WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!(id = %id, "Delete target station missing");
            return Err(RepoError::not_found(ENTITY, id.as_i64()));
        }

        debug!(id = %id, "Deleted station");
        Ok(())
    }
}

fn map_station(row: &SqliteRow) -> Result<Station, sqlx::Error> {
    Ok(Station {
        id: StationId::new(row.try_get("id")?),
        name: row.try_get("name")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::init_db;
    use tempfile::TempDir;

    async fn setup_test_db() -> (StationRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        let pool = init_db(&db_path).await.expect("init_db failed");
        (StationRepository::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_get_by_id_roundtrip() {
        let (repo, _temp) = setup_test_db().await;
        let saved = repo.save(&NewStation::new("석촌역")).await.unwrap();

        assert_eq!(repo.get_by_id(saved.id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_get_by_missing_id_is_not_found() {
        let (repo, _temp) = setup_test_db().await;

        let err = repo.get_by_id(StationId::new(9)).await.unwrap_err();
        assert!(matches!(
            err,
            RepoError::NotFound {
                entity: "station",
                id: 9
            }
        ));
    }

    #[tokio::test]
    async fn test_unique_constraint_maps_to_duplicate_name() {
        let (repo, _temp) = setup_test_db().await;
        repo.save(&NewStation::new("잠실역")).await.unwrap();

        // Bypass the existence check to hit the constraint directly.
        let err = sqlx::query("INSERT INTO station (name) VALUES ('잠실역')")
            .execute(&repo.pool)
            .await
            .map_err(|e| name_conflict(e, ENTITY, "잠실역"))
            .unwrap_err();
        assert!(err.is_duplicate_name());
    }
}
