//! Shared error classification for the core crate.
//!
//! Each module defines its own error enum next to the code that raises it;
//! all of them implement [`GameError`] so callers can handle them uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed once the board changes
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: an unexpected inconsistency that should be investigated
/// - **Fatal**: the state or its encoding cannot be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: target out of range, not enough AP.
    Recoverable,

    /// Examples: unknown skill, not the player's turn.
    Validation,

    /// Examples: active entity missing from the arena.
    Internal,

    /// Examples: corrupted history blob.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or corrupted data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Keep `error_code` stable: logs and tests match on it
pub trait GameError: std::fmt::Display + std::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
