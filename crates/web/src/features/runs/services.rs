use std::collections::HashMap;

use sqlx::PgPool;
use storage::{
    dto::participant::{AddParticipantRequest, RemoveParticipantRequest},
    dto::run::{CreateRunRequest, RunResponse},
    error::Result,
    models::Participant,
    repository::participant::{ParticipantRepository, RosterParent},
    repository::run::RunRepository,
};

use crate::features::notifications::notifier::{NotificationKind, Notifier};

/// List all runs, each with its eagerly loaded roster.
pub async fn list_runs(pool: &PgPool) -> Result<Vec<RunResponse>> {
    let runs = RunRepository::new(pool).list().await?;

    let ids: Vec<String> = runs.iter().map(|r| r.id.clone()).collect();
    let participants = ParticipantRepository::new(pool).list_for_runs(&ids).await?;
    let mut rosters = group_by_run(participants);

    Ok(runs
        .into_iter()
        .map(|run| {
            let roster = rosters.remove(&run.id).unwrap_or_default();
            RunResponse::from_parts(run, roster)
        })
        .collect())
}

/// Create a new recurring run with an empty roster.
pub async fn create_run(pool: &PgPool, request: &CreateRunRequest) -> Result<RunResponse> {
    let run = RunRepository::new(pool).create(request).await?;

    Ok(RunResponse::from_parts(run, Vec::new()))
}

/// Get one run with its roster.
pub async fn get_run(pool: &PgPool, id: &str) -> Result<RunResponse> {
    let run = RunRepository::new(pool).find_by_id(id).await?;
    let participants = ParticipantRepository::new(pool)
        .list_for_parent(RosterParent::Run(id))
        .await?;

    Ok(RunResponse::from_parts(run, participants))
}

/// Roster of one run, most recent join first. Pass-through query: an
/// unknown run id yields an empty list, not an error.
pub async fn list_participants(pool: &PgPool, run_id: &str) -> Result<Vec<Participant>> {
    ParticipantRepository::new(pool)
        .list_for_parent(RosterParent::Run(run_id))
        .await
}

/// Join a user to a run. Runs have no single date, so the announcement
/// carries the run name alone.
pub async fn add_participant(
    pool: &PgPool,
    notifier: &Notifier,
    run_id: &str,
    request: &AddParticipantRequest,
) -> Result<RunResponse> {
    let run = RunRepository::new(pool).find_by_id(run_id).await?;

    let repo = ParticipantRepository::new(pool);
    let parent = RosterParent::Run(run_id);
    let joined = repo
        .insert(parent, &request.user_id, request.name.as_deref())
        .await?;

    notifier.dispatch(
        NotificationKind::Add,
        run.name.clone(),
        joined.display_name().to_string(),
        None,
    );

    let participants = repo.list_for_parent(parent).await?;

    Ok(RunResponse::from_parts(run, participants))
}

/// Remove every roster row the user holds on this run. Zero matching rows
/// is an idempotent no-op.
pub async fn remove_participant(
    pool: &PgPool,
    notifier: &Notifier,
    run_id: &str,
    request: &RemoveParticipantRequest,
) -> Result<RunResponse> {
    let run = RunRepository::new(pool).find_by_id(run_id).await?;

    let repo = ParticipantRepository::new(pool);
    let parent = RosterParent::Run(run_id);
    let removed = repo.delete_for_user(parent, &request.user_id).await?;

    if let Some(first) = removed.first() {
        notifier.dispatch(
            NotificationKind::Remove,
            run.name.clone(),
            first.display_name().to_string(),
            None,
        );
    }

    let participants = repo.list_for_parent(parent).await?;

    Ok(RunResponse::from_parts(run, participants))
}

fn group_by_run(participants: Vec<Participant>) -> HashMap<String, Vec<Participant>> {
    let mut rosters: HashMap<String, Vec<Participant>> = HashMap::new();
    for participant in participants {
        if let Some(run_id) = participant.run_id.clone() {
            rosters.entry(run_id).or_default().push(participant);
        }
    }

    rosters
}
