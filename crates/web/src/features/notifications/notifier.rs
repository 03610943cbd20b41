use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::json;

/// What happened to a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Add,
    Remove,
}

impl NotificationKind {
    /// Parse the wire tag used by the internal notify endpoint.
    pub fn parse(action_type: &str) -> Option<Self> {
        match action_type {
            "ADD" => Some(Self::Add),
            "REMOVE" => Some(Self::Remove),
            _ => None,
        }
    }
}

/// Fire-and-forget announcer for roster changes.
///
/// The roster rows are the source of truth; this channel is advisory.
/// Delivery failures are logged and never reach the caller's transaction
/// outcome, so an unreachable webhook cannot block joins or leaves.
#[derive(Clone)]
pub struct Notifier {
    client: Client,
    webhook_url: Option<String>,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            webhook_url,
        }
    }

    /// Spawn delivery on a detached task. Completion is not ordered relative
    /// to the caller's response; failure is observable only in logs.
    pub fn dispatch(
        &self,
        kind: NotificationKind,
        event_name: String,
        participant_name: String,
        event_date: Option<DateTime<Utc>>,
    ) {
        let notifier = self.clone();
        tokio::spawn(async move {
            notifier
                .notify(kind, &event_name, &participant_name, event_date)
                .await;
        });
    }

    /// Deliver one notification, reporting whether the webhook accepted it.
    pub async fn notify(
        &self,
        kind: NotificationKind,
        event_name: &str,
        participant_name: &str,
        event_date: Option<DateTime<Utc>>,
    ) -> bool {
        let Some(webhook_url) = self.webhook_url.as_deref() else {
            tracing::warn!("No webhook URL configured, dropping notification");
            return false;
        };

        let message = format_message(kind, event_name, participant_name, event_date);

        let result = self
            .client
            .post(webhook_url)
            .json(&json!({ "content": message }))
            .send()
            .await
            .and_then(|r| r.error_for_status());

        match result {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Error sending notification: {e}");
                false
            }
        }
    }
}

/// One human-readable line per roster change. The date portion is dropped
/// for parents without a single instant (recurring runs).
pub fn format_message(
    kind: NotificationKind,
    event_name: &str,
    participant_name: &str,
    event_date: Option<DateTime<Utc>>,
) -> String {
    let subject = match event_date {
        Some(date) => format!("{} - {}", event_name, format_event_date(date)),
        None => event_name.to_string(),
    };

    match kind {
        NotificationKind::Add => {
            format!("🎉 **New Participant!** {participant_name} has joined: \"{subject}\"")
        }
        NotificationKind::Remove => {
            format!("👋 **Participant Left!** {participant_name} has left: \"{subject}\"")
        }
    }
}

/// Full weekday name, then MM/DD/YYYY, in UTC: "Friday, 03/14/2025".
pub fn format_event_date(date: DateTime<Utc>) -> String {
    date.format("%A, %m/%d/%Y").to_string()
}
