pub mod completion;
pub mod dashboard;
pub mod mission;
pub mod registration;

use crate::domain::repository::EventRepository;
use crate::domain::types::Event;
use crate::error::EventServiceError;

/// Looks up the configured event, mapping absence to `EventNotFound`.
pub(crate) async fn resolve_event<E: EventRepository>(
    events: &E,
    code: &str,
) -> Result<Event, EventServiceError> {
    events
        .find_by_code(code)
        .await?
        .ok_or(EventServiceError::EventNotFound)
}
