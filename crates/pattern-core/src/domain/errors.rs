//! Errors - エラー型
//!
//! Everything here is a programmer or configuration error surfaced
//! immediately to the caller. There are no retries.

use super::ids::ObserverId;

/// PatternError はライブラリ全体のエラー
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// A strict call was made on a strategy slot that has nothing bound.
    #[error("strategy slot '{slot}' is unset")]
    SlotUnset { slot: &'static str },

    /// The same observer handle was registered twice.
    #[error("observer already registered as {0}")]
    DuplicateObserver(ObserverId),

    /// An observer failed during notification; later observers were skipped.
    #[error("observer {observer} failed during notification")]
    ObserverFailed {
        observer: ObserverId,
        #[source]
        source: ObserverError,
    },

    /// An observer was notified while it was already borrowed
    /// (re-entrant `set_state` from inside `update`).
    #[error("observer {0} is busy (re-entrant notification)")]
    ObserverBusy(ObserverId),

    #[error("division by zero")]
    DivisionByZero,
}

/// Failure raised by an observer's `update`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ObserverError {
    message: String,
}

impl ObserverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
