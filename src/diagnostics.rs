//! Diagnostic channel for swallowed repository failures.
//!
//! View-model failures are not surfaced to the user; they are routed here
//! and logged at debug level. Events are broadcast via a tokio broadcast
//! channel so tests and debug tooling can observe them.

use tokio::sync::broadcast;

/// A repository failure observed by a state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// Which flow produced the failure (e.g. "profile.fetch_liked").
    pub source: String,
    /// Human-readable error description.
    pub message: String,
}

impl DiagnosticEvent {
    /// Create a new diagnostic event.
    pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
        }
    }
}

/// Sender half of the diagnostic channel.
pub type DiagnosticSender = broadcast::Sender<DiagnosticEvent>;

/// Create a diagnostic channel with the given buffer capacity.
pub fn create_diagnostic_channel(
    capacity: usize,
) -> (DiagnosticSender, broadcast::Receiver<DiagnosticEvent>) {
    broadcast::channel(capacity)
}

/// Report a failure: log it and forward it to the sink if one is attached.
pub fn report(sink: Option<&DiagnosticSender>, source: &str, message: impl Into<String>) {
    let message = message.into();
    tracing::debug!(source, %message, "repository call failed");
    if let Some(sink) = sink {
        let _ = sink.send(DiagnosticEvent::new(source, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_report_forwards_to_sink() {
        let (tx, mut rx) = create_diagnostic_channel(8);
        report(Some(&tx), "profile.fetch_liked", "boom");

        let event = rx.recv().await.unwrap();
        assert_eq!(event.source, "profile.fetch_liked");
        assert_eq!(event.message, "boom");
    }

    #[test]
    fn test_report_without_sink_is_silent() {
        report(None, "profile.fetch_liked", "boom");
    }
}
