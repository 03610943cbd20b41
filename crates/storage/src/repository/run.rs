use sqlx::PgPool;

use crate::dto::run::CreateRunRequest;
use crate::error::{Result, StorageError};
use crate::models::Run;

/// Repository for Run database operations
pub struct RunRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RunRepository<'a> {
    /// Create a new RunRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all runs
    pub async fn list(&self) -> Result<Vec<Run>> {
        let runs = sqlx::query_as::<_, Run>(
            r#"
            SELECT id, name, schedule, location, created_at
            FROM runs
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(runs)
    }

    /// Get a run by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Run> {
        let run = sqlx::query_as::<_, Run>(
            r#"
            SELECT id, name, schedule, location, created_at
            FROM runs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(run)
    }

    /// Create a new run
    pub async fn create(&self, req: &CreateRunRequest) -> Result<Run> {
        let run = sqlx::query_as::<_, Run>(
            r#"
            INSERT INTO runs (id, name, schedule, location)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, schedule, location, created_at
            "#,
        )
        .bind(&req.id)
        .bind(&req.name)
        .bind(&req.schedule)
        .bind(&req.location)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation("Run id already exists".to_string())
            } else {
                err
            }
        })?;

        Ok(run)
    }

    /// Delete a run by ID; its roster rows cascade with it.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM runs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
