//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (e.g., `CombatError`, `TournamentError`) are defined
//! in their respective modules alongside the operations they validate. This
//! module provides the shared classification used by all of them.
//!
//! Every error is scoped to the attempted transition: the caller's previous
//! state is untouched and stays valid. Nothing is retried, since identical
//! inputs reproduce the identical failure.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: a resource ran out; callers may degrade gracefully
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: a broken caller contract, i.e. a bug upstream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the operation can be skipped or replaced.
    ///
    /// Examples: name pool exhausted
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown fighter id, unresolved pending event
    Validation,

    /// Internal error - a programming contract was violated.
    ///
    /// Examples: resolving an attack with a dead attacker
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
