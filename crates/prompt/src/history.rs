//! Source of the recent-conversation lines rendered into the prompt.
//!
//! The game currently never records exchanges, so the default provider is
//! always empty.  Anything implementing [`HistoryProvider`] can be plugged in
//! without the prompt builder learning about retention.

pub trait HistoryProvider: Send + Sync {
    /// Lines to render, oldest first.
    fn recent(&self) -> Vec<String>;
}

/// Provider that never has any history.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryProvider for NoHistory {
    fn recent(&self) -> Vec<String> {
        Vec::new()
    }
}

impl HistoryProvider for Vec<String> {
    fn recent(&self) -> Vec<String> {
        self.clone()
    }
}
