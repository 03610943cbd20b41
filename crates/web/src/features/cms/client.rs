use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

/// Failures of the CMS read path. Unlike the calendar adapter these do
/// propagate: content pages are built from this data and serving them
/// half-empty is worse than a plain error.
#[derive(Debug)]
pub enum CmsError {
    /// Single-entry lookup matched nothing.
    NoMatch,
    Request(reqwest::Error),
}

impl fmt::Display for CmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "No matching content"),
            Self::Request(e) => write!(f, "Request error: {}", e),
        }
    }
}

impl From<reqwest::Error> for CmsError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}

/// Read-only client for the headless CMS delivery API. Entries are
/// schemaless JSON; the content model lives in the CMS.
#[derive(Clone)]
pub struct CmsClient {
    client: Client,
    base_url: String,
    space_id: String,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

impl CmsClient {
    pub fn new(base_url: String, space_id: String, access_token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
            space_id,
            access_token,
        }
    }

    /// Entries of one content type, newest-model order as the CMS returns
    /// them. `limit` caps the page size when set.
    pub async fn entries_by_type(
        &self,
        content_type: &str,
        limit: Option<u32>,
    ) -> Result<Vec<serde_json::Value>, CmsError> {
        let url = format!(
            "{}/spaces/{}/environments/master/entries",
            self.base_url, self.space_id
        );

        let mut request = self.client.get(&url).query(&[
            ("access_token", self.access_token.as_str()),
            ("content_type", content_type),
        ]);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.json::<EntriesResponse>().await?;

        Ok(body.items)
    }
}

/// Pick the single-entry or list shape for a query. Single mode takes the
/// first matched entry and treats zero matches as an error; list mode
/// passes matches through, empty included.
pub fn select_content(
    items: Vec<serde_json::Value>,
    single: bool,
) -> Result<serde_json::Value, CmsError> {
    if single {
        items.into_iter().next().ok_or(CmsError::NoMatch)
    } else {
        Ok(serde_json::Value::Array(items))
    }
}
