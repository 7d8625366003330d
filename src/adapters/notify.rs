use crate::core::Notifier;

/// Prints failures to stderr, toast style.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        tracing::debug!("Notifying user: {}", message);
        eprintln!("❌ {}", message);
    }
}

/// Sends failures to the log only, for hosts without a display surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(notification = message, "Cart operation failed");
    }
}
