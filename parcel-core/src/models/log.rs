use tracing::{Level, event};

/// The human-readable trail of one run.
///
/// Every message is emitted as a `tracing` event right away and kept, in
/// order, so the whole trail can be written to the order's memo at the end.
/// Messages are only ever appended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionLog {
    messages: Vec<String>,
}

impl ExecutionLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a progress message.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        event!(Level::INFO, "{message}");
        self.messages.push(message);
    }

    /// Record something suspicious that does not stop the run.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        event!(Level::WARN, "{message}");
        self.messages.push(message);
    }

    /// Record a failure.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        event!(Level::ERROR, "{message}");
        self.messages.push(message);
    }

    /// The messages recorded so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All messages joined into one memo text, one message per line.
    pub fn memo(&self) -> String {
        self.messages.join("\n")
    }
}
