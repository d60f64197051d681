// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Record Invariants
//!
//! Universal properties of the three record kinds: capacity bounds,
//! rejected setters never mutate, and disabled services never validate.

use cloud_resource_models::domain::{
    AutoscalingGroupRecord, ImageTagMutability, LaunchType, RepositoryRecord, ServiceRecord,
    Validate, ValidationError,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// (min, max, desired) with 0 <= min <= desired <= max and max > min
fn valid_bounds() -> impl Strategy<Value = (i32, i32, i32)> {
    (0..10_000i32, 1..10_000i32)
        .prop_flat_map(|(min, span)| (Just(min), Just(min + span), min..=min + span))
}

/// (min, max) with max <= min
fn inverted_bounds() -> impl Strategy<Value = (i32, i32)> {
    (0..10_000i32).prop_flat_map(|min| (Just(min), -10_000..=min))
}

fn resource_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,30}"
}

fn launch_type() -> impl Strategy<Value = LaunchType> {
    prop::sample::select(LaunchType::ALL.to_vec())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: well-ordered capacity bounds always validate
    #[test]
    fn prop_ordered_bounds_are_valid((min, max, desired) in valid_bounds()) {
        let asg = AutoscalingGroupRecord::new("asg", min, max, desired);
        prop_assert!(asg.is_valid(), "{:?} should be valid", asg);
    }

    /// Property: max <= min is always reported as a size range violation
    #[test]
    fn prop_inverted_bounds_are_invalid((min, max) in inverted_bounds(), desired in -10_000..10_000i32) {
        let asg = AutoscalingGroupRecord::new("asg", min, max, desired);
        prop_assert!(!asg.is_valid());
        let expected = ValidationError::SizeRange { min, max };
        prop_assert!(asg.violations().contains(&expected));
    }

    /// Property: a rejected desired capacity leaves the group untouched
    #[test]
    fn prop_set_desired_capacity_outside_bounds_is_noop(
        (min, max, desired) in valid_bounds(),
        offset in 1..1_000i32,
    ) {
        let mut asg = AutoscalingGroupRecord::new("asg", min, max, desired);
        let before = asg.clone();

        prop_assert!(asg.set_desired_capacity(max + offset).is_err());
        prop_assert!(asg.set_desired_capacity(min - offset).is_err());
        prop_assert_eq!(asg, before);
    }

    /// Property: negative scale requests fail and never change the count
    #[test]
    fn prop_negative_scale_is_rejected(initial in 0..1_000i32, count in i32::MIN..0) {
        let mut svc = ServiceRecord::new("svc", "cluster", initial);

        prop_assert!(svc.scale(count).is_err());
        prop_assert_eq!(svc.desired_count, initial);
    }

    /// Property: non-negative scale requests succeed and set the count
    #[test]
    fn prop_non_negative_scale_is_applied(initial in 0..1_000i32, count in 0..=i32::MAX) {
        let mut svc = ServiceRecord::new("svc", "cluster", initial);

        prop_assert!(svc.scale(count).is_ok());
        prop_assert_eq!(svc.desired_count, count);
        prop_assert!(svc.is_valid());
    }

    /// Property: only the two mutability strings are ever accepted
    #[test]
    fn prop_mutability_setter_accepts_only_known_values(value in ".{0,12}") {
        let mut repo = RepositoryRecord::new("repo");
        let accepted = repo.set_image_tag_mutability(&value).is_ok();

        match value.as_str() {
            "MUTABLE" | "IMMUTABLE" => {
                prop_assert!(accepted);
                prop_assert_eq!(repo.image_tag_mutability.as_str(), value.as_str());
            }
            _ => {
                prop_assert!(!accepted);
                prop_assert_eq!(repo.image_tag_mutability, ImageTagMutability::Mutable);
            }
        }
    }

    /// Property: a disabled service never validates
    #[test]
    fn prop_disabled_service_is_invalid(
        name in resource_name(),
        cluster in resource_name(),
        count in 0..1_000i32,
        launch in launch_type(),
    ) {
        let mut svc = ServiceRecord::new(name, cluster, count);
        svc.launch_type = launch;
        prop_assert!(svc.is_valid());

        svc.disable();
        prop_assert!(!svc.is_valid());
        let disabled = matches!(svc.validate(), Err(ValidationError::Disabled { .. }));
        prop_assert!(disabled);
    }

    /// Property: validate() and violations() agree
    #[test]
    fn prop_validate_matches_violations(
        min in -5..5i32,
        max in -5..5i32,
        desired in -5..5i32,
        grace in -5..5i32,
    ) {
        let mut asg = AutoscalingGroupRecord::new("asg", min, max, desired);
        asg.health_check_grace_period = grace;

        let violations = asg.violations();
        match asg.validate() {
            Ok(()) => prop_assert!(violations.is_empty()),
            Err(err) => prop_assert_eq!(Some(&err), violations.first()),
        }
    }
}
