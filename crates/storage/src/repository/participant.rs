use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Participant;

/// The owning side of a roster row. A participant belongs to exactly one
/// event or run; the table CHECK enforces the same rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterParent<'a> {
    Event(&'a str),
    Run(&'a str),
}

impl<'a> RosterParent<'a> {
    fn column(&self) -> &'static str {
        match self {
            RosterParent::Event(_) => "event_id",
            RosterParent::Run(_) => "run_id",
        }
    }

    fn id(&self) -> &'a str {
        match self {
            RosterParent::Event(id) | RosterParent::Run(id) => id,
        }
    }
}

/// Repository for Participant database operations
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    /// Create a new ParticipantRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Roster of a single parent, most recent join first.
    pub async fn list_for_parent(&self, parent: RosterParent<'_>) -> Result<Vec<Participant>> {
        let sql = format!(
            r#"
            SELECT id, user_id, name, event_id, run_id, joined_at
            FROM participants
            WHERE {} = $1
            ORDER BY joined_at DESC
            "#,
            parent.column()
        );

        let participants = sqlx::query_as::<_, Participant>(&sql)
            .bind(parent.id())
            .fetch_all(self.pool)
            .await?;

        Ok(participants)
    }

    /// Rosters for a batch of events, in one query. Rows come back ordered
    /// by join time so callers can group them without re-sorting.
    pub async fn list_for_events(&self, event_ids: &[String]) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, user_id, name, event_id, run_id, joined_at
            FROM participants
            WHERE event_id = ANY($1)
            ORDER BY joined_at DESC
            "#,
        )
        .bind(event_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Rosters for a batch of runs, in one query.
    pub async fn list_for_runs(&self, run_ids: &[String]) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, user_id, name, event_id, run_id, joined_at
            FROM participants
            WHERE run_id = ANY($1)
            ORDER BY joined_at DESC
            "#,
        )
        .bind(run_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Insert one membership row. Duplicate (user, parent) pairs are
    /// allowed; each join is a distinct row.
    pub async fn insert(
        &self,
        parent: RosterParent<'_>,
        user_id: &str,
        name: Option<&str>,
    ) -> Result<Participant> {
        let sql = format!(
            r#"
            INSERT INTO participants (id, user_id, name, {})
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, event_id, run_id, joined_at
            "#,
            parent.column()
        );

        let participant = sqlx::query_as::<_, Participant>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(name)
            .bind(parent.id())
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                let err = StorageError::from(e);
                // The parent vanished between the caller's lookup and this
                // insert; surface it the same way the lookup would have.
                if err.is_foreign_key_violation() {
                    StorageError::NotFound
                } else {
                    err
                }
            })?;

        Ok(participant)
    }

    /// Delete every row matching (parent, user) in one statement. Zero
    /// matches is not an error; the returned rows say what was removed.
    pub async fn delete_for_user(
        &self,
        parent: RosterParent<'_>,
        user_id: &str,
    ) -> Result<Vec<Participant>> {
        let sql = format!(
            r#"
            DELETE FROM participants
            WHERE {} = $1 AND user_id = $2
            RETURNING id, user_id, name, event_id, run_id, joined_at
            "#,
            parent.column()
        );

        let removed = sqlx::query_as::<_, Participant>(&sql)
            .bind(parent.id())
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(removed)
    }
}
