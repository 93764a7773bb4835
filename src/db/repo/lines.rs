use super::name_conflict;
use crate::domain::{Line, LineId, NewLine};
use crate::error::{RepoError, RepoResult};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::{debug, warn};

const ENTITY: &str = "line";

/// CRUD over the `line` table.
#[derive(Debug, Clone)]
pub struct LineRepository {
    pool: SqlitePool,
}

impl LineRepository {
    pub fn new(pool: SqlitePool) -> Self {
        LineRepository { pool }
    }

    /// Whether a line with this exact name is stored.
    pub async fn exists_by_name(&self, name: &str) -> RepoResult<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM line WHERE name = ?)")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get::<i64, _>(0)? != 0)
    }

    /// Insert a line and return it with its generated id.
    ///
    /// # Errors
    /// `DuplicateName` if another line already uses the name.
    pub async fn save(&self, line: &NewLine) -> RepoResult<Line> {
        let result = sqlx::query("INSERT INTO line (color, name) VALUES (?, ?)")
            .bind(&line.color)
            .bind(&line.name)
            .execute(&self.pool)
            .await
            .map_err(|e| name_conflict(e, ENTITY, &line.name))?;

        let id = LineId::new(result.last_insert_rowid());
        debug!(id = %id, name = %line.name, "Saved line");
        Ok(line.clone().with_id(id))
    }

    /// All lines ordered by id.
    pub async fn list_all(&self) -> RepoResult<Vec<Line>> {
        let rows = sqlx::query("SELECT id, color, name FROM line ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        let lines = rows.iter().map(map_line).collect::<Result<Vec<_>, _>>()?;
        Ok(lines)
    }

    /// # Errors
    /// `NotFound` when no line has this id.
    pub async fn get_by_id(&self, id: LineId) -> RepoResult<Line> {
        let row = sqlx::query("SELECT id, color, name FROM line WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(map_line(&row)?),
            None => Err(RepoError::not_found(ENTITY, id.as_i64())),
        }
    }

    /// Overwrite color and name of the line with `line.id`.
    ///
    /// # Errors
    /// `NotFound` when nothing was updated, `DuplicateName` when the new name
    /// belongs to another line.
    pub async fn update(&self, line: &Line) -> RepoResult<()> {
        let result = sqlx::query("UPDATE line SET color = ?, name = ? WHERE id = ?")
            .bind(&line.color)
            .bind(&line.name)
            .bind(line.id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| name_conflict(e, ENTITY, &line.name))?;

        if result.rows_affected() == 0 {
            warn!(id = %line.id, "Update target line missing");
            return Err(RepoError::not_found(ENTITY, line.id.as_i64()));
        }

        debug!(id = %line.id, name = %line.name, "Updated line");
        Ok(())
    }

    /// # Errors
    /// `NotFound` when no line has this id.
    pub async fn delete_by_id(&self, id: LineId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM line WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!(id = %id, "Delete target line missing");
            return Err(RepoError::not_found(ENTITY, id.as_i64()));
        }

        debug!(id = %id, "Deleted line");
        Ok(())
    }
}

fn map_line(row: &SqliteRow) -> Result<Line, sqlx::Error> {
    Ok(Line {
        id: LineId::new(row.try_get("id")?),
        color: row.try_get("color")?,
        name: row.try_get("name")?,
    })
}
