use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;

/// Read-only client for the external calendar's events API.
///
/// Every failure is downgraded to an empty list: the calendar pane is a
/// non-critical read path and must not take other pages down with it. The
/// price is that callers cannot tell "no entries" from "provider down".
#[derive(Clone)]
pub struct CalendarClient {
    client: Client,
    base_url: String,
    calendar_id: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct EventsListResponse {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

impl CalendarClient {
    pub fn new(base_url: String, calendar_id: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
            calendar_id,
            api_key,
        }
    }

    /// Calendar entries for the window anchored at (year, month), recurring
    /// events expanded into single instances, ordered by start time. Empty
    /// on any failure.
    pub async fn list_events(&self, year: i32, month: u32) -> Vec<serde_json::Value> {
        let Some((time_min, time_max)) = month_window(year, month) else {
            tracing::warn!("Invalid calendar window: year={year} month={month}");
            return Vec::new();
        };

        match self.fetch(&time_min, &time_max).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("Failed to fetch calendar events: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch(
        &self,
        time_min: &DateTime<Utc>,
        time_max: &DateTime<Utc>,
    ) -> reqwest::Result<Vec<serde_json::Value>> {
        let url = format!("{}/calendars/{}/events", self.base_url, self.calendar_id);
        let time_min = time_min.to_rfc3339();
        let time_max = time_max.to_rfc3339();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<EventsListResponse>().await?;

        Ok(body.items)
    }
}

/// Window for a month view: first day of the month through the first day of
/// the following month one year out. The end bound is intentionally a year
/// ahead, not a month; December rolls into January two years out. Clients
/// have always been served this widened range.
pub fn month_window(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;

    let (end_year, end_month) = if month == 12 {
        (year + 2, 1)
    } else {
        (year + 1, month + 1)
    };
    let end = Utc.with_ymd_and_hms(end_year, end_month, 1, 0, 0, 0).single()?;

    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_starts_on_the_first_of_the_month() {
        let (start, _) = month_window(2025, 3).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_window_ends_one_month_and_one_year_out() {
        let (_, end) = month_window(2025, 3).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_december_rolls_into_january_two_years_out() {
        let (start, end) = month_window(2025, 12).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_out_of_range_month_yields_no_window() {
        assert!(month_window(2025, 13).is_none());
        assert!(month_window(2025, 0).is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_yields_empty_list() {
        // Nothing listens on port 9; the request fails fast and the
        // adapter swallows it.
        let client = CalendarClient::new(
            "http://127.0.0.1:9".to_string(),
            "club-calendar".to_string(),
            "test-key".to_string(),
        );

        let items = client.list_events(2025, 3).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_window_yields_empty_list() {
        let client = CalendarClient::new(
            "http://127.0.0.1:9".to_string(),
            "club-calendar".to_string(),
            "test-key".to_string(),
        );

        let items = client.list_events(2025, 13).await;
        assert!(items.is_empty());
    }
}
