//! Configuration violation errors.

use thiserror::Error;

/// Violations detected when validating component props
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    /// A style layer maps an empty CSS property name
    #[error("Empty property name in {layer} style")]
    EmptyPropertyName { layer: String },

    /// A timing entry names an empty CSS property
    #[error("Timing entry with empty property name")]
    EmptyTimingProperty,

    /// Browsers never fire transitionend for 0ms transitions, so the
    /// machine would park in its transitioning state
    #[error("Timing for '{property}' has zero duration; its end event would never fire")]
    ZeroDuration { property: String },

    /// The same property appears in more than one timing entry
    #[error("Duplicate timing entry for '{property}'")]
    DuplicateTiming { property: String },

    /// A timing entry names a property no style layer ever sets
    #[error("Timing names '{property}' but no style sets it")]
    UntrackedTimingProperty { property: String },

    /// A host-supplied check failed
    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
