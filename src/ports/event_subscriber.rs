//! EventSubscriber port - Interface for subscribing to domain events.
//!
//! Rendering layers register here for the progress, completion, snapshot
//! and alert channels.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// Handlers are invoked inline by the publisher, so they should be quick.
/// An error is logged by the bus and never reaches the publisher's caller.
///
/// # Example
///
/// ```ignore
/// struct AlertToaster;
///
/// #[async_trait]
/// impl EventHandler for AlertToaster {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let raised: AlertRaised = event.payload_as()?;
///         show_toast(&raised.alert.message);
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "AlertToaster"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe handler to multiple event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Combined trait for event bus implementations.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_handler_object_safe(_: &dyn EventHandler) {}

    #[allow(dead_code)]
    fn assert_subscriber_object_safe(_: &dyn EventSubscriber) {}

    #[allow(dead_code)]
    fn assert_bus_object_safe(_: &dyn EventBus) {}
}
