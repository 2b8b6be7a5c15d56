//! Validation rules for component props using Validation.

use std::collections::BTreeSet;

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

use crate::core::{ComponentProps, Style};
use crate::validate::violations::ConfigViolation;

/// Type alias for validation check functions
pub type ConfigCheck =
    Box<dyn Fn(&ComponentProps) -> Validation<(), NonEmptyVec<ConfigViolation>> + Send + Sync>;

/// Validator for transition configuration.
/// Uses Validation to accumulate ALL violations instead of failing fast.
pub struct PropsValidator {
    custom_checks: Vec<ConfigCheck>,
}

impl Default for PropsValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PropsValidator {
    pub fn new() -> Self {
        Self {
            custom_checks: Vec::new(),
        }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&ComponentProps) -> Validation<(), NonEmptyVec<ConfigViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Add a custom check from a boolean predicate
    pub fn require_pred<F>(self, pred: F, message: String) -> Self
    where
        F: Fn(&ComponentProps) -> bool + Send + Sync + 'static,
    {
        self.require(move |props| {
            if pred(props) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::CustomCheckFailed {
                    message: message.clone(),
                })
            }
        })
    }

    /// Validate props, accumulating ALL violations.
    /// Returns `Validation::Success(())` when every check passes.
    pub fn validate(
        &self,
        props: &ComponentProps,
    ) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        // Empty property names across every style layer
        for (layer, style) in named_styles(props) {
            if style.properties().any(|(property, _)| property.is_empty()) {
                checks.push(Validation::fail(ConfigViolation::EmptyPropertyName {
                    layer: layer.to_string(),
                }));
            }
        }

        // Timing entries: empty names, zero durations, duplicates
        let mut seen = BTreeSet::new();
        for timing in &props.timings {
            if timing.property.is_empty() {
                checks.push(Validation::fail(ConfigViolation::EmptyTimingProperty));
                continue;
            }
            if timing.duration_ms == 0 {
                checks.push(Validation::fail(ConfigViolation::ZeroDuration {
                    property: timing.property.clone(),
                }));
            }
            if !seen.insert(timing.property.as_str()) {
                checks.push(Validation::fail(ConfigViolation::DuplicateTiming {
                    property: timing.property.clone(),
                }));
            }
        }

        // Timing properties nothing ever styles. Skipped for class-driven
        // configs where no style layer is populated.
        let styled: BTreeSet<&str> = named_styles(props)
            .flat_map(|(_, style)| style.properties().map(|(property, _)| property))
            .collect();
        if !styled.is_empty() {
            for timing in &props.timings {
                if !timing.property.is_empty() && !styled.contains(timing.property.as_str()) {
                    checks.push(Validation::fail(ConfigViolation::UntrackedTimingProperty {
                        property: timing.property.clone(),
                    }));
                }
            }
        }

        // Run custom checks
        for check in &self.custom_checks {
            checks.push(check(props));
        }

        // Accumulate ALL failures using all_vec
        Validation::all_vec(checks).map(|_| ())
    }
}

fn named_styles(props: &ComponentProps) -> impl Iterator<Item = (&'static str, &Style)> {
    [
        (Some(("style", &props.style))),
        props.active_style.as_ref().map(|s| ("active_style", s)),
        props.enter_style.as_ref().map(|s| ("enter_style", s)),
        props.exit_style.as_ref().map(|s| ("exit_style", s)),
        props
            .enter_init_style
            .as_ref()
            .map(|s| ("enter_init_style", s)),
        props
            .exit_init_style
            .as_ref()
            .map(|s| ("exit_init_style", s)),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Style, TransitionTiming};

    fn sound_props() -> ComponentProps {
        ComponentProps::new()
            .with_style(Style::new().with("opacity", "0"))
            .with_enter_style(
                Style::new()
                    .with("opacity", "1")
                    .with("transition", "opacity 300ms"),
            )
            .with_timings(vec![TransitionTiming::new("opacity", 300)])
    }

    #[test]
    fn sound_config_validates() {
        let result = PropsValidator::new().validate(&sound_props());
        assert!(result.is_success());
    }

    #[test]
    fn empty_props_validate() {
        let result = PropsValidator::new().validate(&ComponentProps::new());
        assert!(result.is_success());
    }

    #[test]
    fn zero_duration_is_flagged() {
        let props = sound_props().with_timings(vec![TransitionTiming::new("opacity", 0)]);

        let result = PropsValidator::new().validate(&props);

        match result {
            Validation::Failure(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroDuration { property } if property == "opacity")));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn violations_accumulate() {
        let mut base = Style::new().with("opacity", "0");
        base.set("", "nope");
        let props = ComponentProps::new().with_style(base).with_timings(vec![
            TransitionTiming::new("opacity", 0),
            TransitionTiming::new("opacity", 300),
            TransitionTiming::new("width", 100),
        ]);

        let result = PropsValidator::new().validate(&props);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);

                let has_empty = errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EmptyPropertyName { .. }));
                let has_zero = errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroDuration { .. }));
                let has_duplicate = errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::DuplicateTiming { .. }));
                let has_untracked = errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UntrackedTimingProperty { .. }));

                assert!(has_empty);
                assert!(has_zero);
                assert!(has_duplicate);
                assert!(has_untracked);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn untracked_timing_skipped_for_class_driven_configs() {
        // No style layer populated: timings refer to CSS held in classes.
        let props = ComponentProps::new()
            .with_class_name("panel")
            .with_timings(vec![TransitionTiming::new("width", 200)]);

        let result = PropsValidator::new().validate(&props);
        assert!(result.is_success());
    }

    #[test]
    fn custom_validation_check_works() {
        let validator = PropsValidator::new().require(|props: &ComponentProps| {
            if props.timings.is_empty() {
                Validation::fail(ConfigViolation::CustomCheckFailed {
                    message: "Timings must be configured".to_string(),
                })
            } else {
                Validation::success(())
            }
        });

        let result = validator.validate(&ComponentProps::new());
        assert!(result.is_failure());

        let result = validator.validate(&sound_props());
        assert!(result.is_success());
    }

    #[test]
    fn require_pred_wraps_a_predicate() {
        let validator = PropsValidator::new().require_pred(
            |props| props.class_name.is_some(),
            "A class name is required".to_string(),
        );

        let result = validator.validate(&ComponentProps::new());

        match result {
            Validation::Failure(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::CustomCheckFailed { .. })));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }
}
