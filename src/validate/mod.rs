//! Validation-based configuration checking for transition props.
//!
//! This module checks a [`ComponentProps`](crate::core::ComponentProps)
//! value for configurations that would misbehave at runtime, using
//! Stillwater's `Validation` type to accumulate ALL violations instead of
//! stopping at the first one.
//!
//! The flagship check is the zero-duration timing: browsers never emit
//! `transitionend` for a 0ms transition, and since the machine deliberately
//! has no timeout, such a config would park it in its transitioning state
//! forever. Catching that at configuration time is the only place it can be
//! caught.
//!
//! # Example
//!
//! ```rust
//! use segue::core::{ComponentProps, Style, TransitionTiming};
//! use segue::validate::PropsValidator;
//!
//! let props = ComponentProps::new()
//!     .with_style(Style::new().with("opacity", "0"))
//!     .with_enter_style(Style::new().with("opacity", "1"))
//!     .with_timings(vec![TransitionTiming::new("opacity", 300)]);
//!
//! let result = PropsValidator::new().validate(&props);
//! assert!(result.is_success());
//! ```

pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use rules::{ConfigCheck, PropsValidator};
pub use violations::ConfigViolation;
