//! Best-effort event delivery shared by the handlers.

use tracing::warn;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Publishes `envelope`, logging instead of failing.
///
/// Notifications never roll back the state change that produced them.
pub(crate) async fn publish_or_log(
    publisher: &dyn EventPublisher,
    envelope: Result<EventEnvelope, DomainError>,
) {
    let envelope = match envelope {
        Ok(envelope) => envelope,
        Err(error) => {
            warn!(error = %error, "Failed to serialize domain event");
            return;
        }
    };

    let event_type = envelope.event_type.clone();
    let aggregate_id = envelope.aggregate_id.clone();
    if let Err(error) = publisher.publish(envelope).await {
        warn!(
            event_type = %event_type,
            aggregate_id = %aggregate_id,
            error = %error,
            "Failed to publish domain event"
        );
    }
}
