//! Outbound notifier adapters.

use realmkeeper_shared::WorldEvent;

use super::ports::NotifierPort;

/// Notifier that writes every event to the log.
///
/// Used when the engine runs without a bridge attached. Serialization
/// failures are swallowed after a warn since delivery is best-effort.
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifierPort for TracingNotifier {
    fn notify(&self, event: WorldEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => tracing::info!(event = %payload, "World event"),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize world event"),
        }
    }
}

/// Test notifier that records every event it receives.
#[cfg(test)]
pub struct RecordingNotifier {
    pub events: std::sync::Mutex<Vec<WorldEvent>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn take(&self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events.lock().unwrap())
    }
}

#[cfg(test)]
impl NotifierPort for RecordingNotifier {
    fn notify(&self, event: WorldEvent) {
        self.events.lock().unwrap().push(event);
    }
}
