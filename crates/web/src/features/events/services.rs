use std::collections::HashMap;

use sqlx::PgPool;
use storage::{
    dto::event::{CreateEventRequest, EventResponse},
    dto::participant::{AddParticipantRequest, RemoveParticipantRequest},
    error::Result,
    models::Participant,
    repository::event::EventRepository,
    repository::participant::{ParticipantRepository, RosterParent},
};

use crate::features::notifications::notifier::{NotificationKind, Notifier};

/// List all events, each with its eagerly loaded roster.
pub async fn list_events(pool: &PgPool) -> Result<Vec<EventResponse>> {
    let events = EventRepository::new(pool).list().await?;

    let ids: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
    let participants = ParticipantRepository::new(pool).list_for_events(&ids).await?;
    let mut rosters = group_by_event(participants);

    Ok(events
        .into_iter()
        .map(|event| {
            let roster = rosters.remove(&event.id).unwrap_or_default();
            EventResponse::from_parts(event, roster)
        })
        .collect())
}

/// Create a new event with an empty roster. The payload has already passed
/// type-set validation at the handler.
pub async fn create_event(pool: &PgPool, request: &CreateEventRequest) -> Result<EventResponse> {
    let event = EventRepository::new(pool).create(request).await?;

    Ok(EventResponse::from_parts(event, Vec::new()))
}

/// Get one event with its roster.
pub async fn get_event(pool: &PgPool, id: &str) -> Result<EventResponse> {
    let event = EventRepository::new(pool).find_by_id(id).await?;
    let participants = ParticipantRepository::new(pool)
        .list_for_parent(RosterParent::Event(id))
        .await?;

    Ok(EventResponse::from_parts(event, participants))
}

/// Roster of one event, most recent join first. Deliberately a pass-through
/// query: an unknown event id yields an empty list, not an error.
pub async fn list_participants(pool: &PgPool, event_id: &str) -> Result<Vec<Participant>> {
    ParticipantRepository::new(pool)
        .list_for_parent(RosterParent::Event(event_id))
        .await
}

/// Join a user to an event and return the updated event with its full
/// roster. The ADD announcement goes out on a detached task; the membership
/// row is the source of truth and never waits on the webhook.
pub async fn add_participant(
    pool: &PgPool,
    notifier: &Notifier,
    event_id: &str,
    request: &AddParticipantRequest,
) -> Result<EventResponse> {
    let event = EventRepository::new(pool).find_by_id(event_id).await?;

    let repo = ParticipantRepository::new(pool);
    let parent = RosterParent::Event(event_id);
    let joined = repo
        .insert(parent, &request.user_id, request.name.as_deref())
        .await?;

    notifier.dispatch(
        NotificationKind::Add,
        event.name.clone(),
        joined.display_name().to_string(),
        Some(event.date),
    );

    let participants = repo.list_for_parent(parent).await?;

    Ok(EventResponse::from_parts(event, participants))
}

/// Remove every roster row the user holds on this event, in one statement.
/// Zero matching rows is an idempotent no-op. Only real departures are
/// announced.
pub async fn remove_participant(
    pool: &PgPool,
    notifier: &Notifier,
    event_id: &str,
    request: &RemoveParticipantRequest,
) -> Result<EventResponse> {
    let event = EventRepository::new(pool).find_by_id(event_id).await?;

    let repo = ParticipantRepository::new(pool);
    let parent = RosterParent::Event(event_id);
    let removed = repo.delete_for_user(parent, &request.user_id).await?;

    if let Some(first) = removed.first() {
        notifier.dispatch(
            NotificationKind::Remove,
            event.name.clone(),
            first.display_name().to_string(),
            Some(event.date),
        );
    }

    let participants = repo.list_for_parent(parent).await?;

    Ok(EventResponse::from_parts(event, participants))
}

fn group_by_event(participants: Vec<Participant>) -> HashMap<String, Vec<Participant>> {
    let mut rosters: HashMap<String, Vec<Participant>> = HashMap::new();
    for participant in participants {
        if let Some(event_id) = participant.event_id.clone() {
            rosters.entry(event_id).or_default().push(participant);
        }
    }

    rosters
}
