use storage::Database;

use crate::features::calendar::client::CalendarClient;
use crate::features::cms::client::CmsClient;
use crate::features::notifications::notifier::Notifier;

/// Everything the handlers need, constructed once at startup and cloned per
/// request. No module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub calendar: CalendarClient,
    pub cms: CmsClient,
    pub notifier: Notifier,
}
