//! Event emission capability for audit and observability.
//!
//! The sink is a passed-in capability rather than a process-wide dispatcher:
//! services receive an `EventSink` at construction, which keeps the core free
//! of global mutable registration state and independently testable with a
//! recording stub.

use tracing::info;

use crate::domain::entities::event::AuthEvent;

/// Fire-and-forget event emission.
///
/// Implementations must not block and must not fail the calling flow; a sink
/// that needs to do I/O should hand the event off to its own queue or task.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: AuthEvent);
}

/// Sink that writes events to the tracing subscriber
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: AuthEvent) {
        info!(
            event = event.event_type.as_str(),
            account = %event
                .account_uuid
                .map(|u| u.to_string())
                .unwrap_or_else(|| "-".to_string()),
            email = event.email_masked.as_deref().unwrap_or("-"),
            failed_attempts = event.failed_attempts.unwrap_or(0),
            "auth event"
        );
    }
}

/// Sink that discards all events
pub struct NoOpEventSink;

impl EventSink for NoOpEventSink {
    fn emit(&self, _event: AuthEvent) {}
}
