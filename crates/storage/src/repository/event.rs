use sqlx::PgPool;

use crate::dto::event::CreateEventRequest;
use crate::error::{Result, StorageError};
use crate::models::Event;

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    /// Create a new EventRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, date, event_type, created_at
            FROM events
            ORDER BY date ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Get an event by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, date, event_type, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Create a new event. The id is client-supplied, so a duplicate is a
    /// constraint violation rather than an internal error.
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (id, name, date, event_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, date, event_type, created_at
            "#,
        )
        .bind(&req.id)
        .bind(&req.name)
        .bind(req.date)
        .bind(&req.event_type)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation("Event id already exists".to_string())
            } else {
                err
            }
        })?;

        Ok(event)
    }

    /// Delete an event by ID; its roster rows cascade with it.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM events
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
