// Copyright (c) 2025 - Cowboy AI, Inc.
//! Autoscaling Group Record with Capacity-Bounds Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::invariants::{
    collect_violations, validate_desired_capacity, validate_non_negative, validate_positive,
    validate_size_range, Validate, ValidationError, ValidationResult,
};
use crate::config::AutoscalingDefaults;

/// Health check source for instances in a scaling group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthCheckType {
    /// Load balancer health checks
    #[default]
    Elb,
    /// Instance status checks
    Ec2,
}

impl HealthCheckType {
    /// All allowed values
    pub const ALL: [Self; 2] = [Self::Elb, Self::Ec2];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elb => "ELB",
            Self::Ec2 => "EC2",
        }
    }
}

impl fmt::Display for HealthCheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthCheckType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ELB" => Ok(Self::Elb),
            "EC2" => Ok(Self::Ec2),
            _ => Err(ValidationError::UnknownValue {
                kind: "health check type",
                value: s.to_string(),
                allowed: "ELB, EC2",
            }),
        }
    }
}

/// Autoscaling group descriptor
///
/// # Invariants
/// - `min_size >= 0`
/// - `max_size > min_size`
/// - `min_size <= desired_capacity <= max_size`
/// - `health_check_grace_period > 0`
///
/// Fields are public; [`Validate::validate`] checks whatever they hold.
///
/// # Examples
///
/// ```rust
/// use cloud_resource_models::domain::{AutoscalingGroupRecord, Validate};
///
/// let asg = AutoscalingGroupRecord::new("web-asg", 2, 10, 5);
/// assert!(asg.is_valid());
///
/// let inverted = AutoscalingGroupRecord::new("bad-asg", 10, 5, 7);
/// assert!(!inverted.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoscalingGroupRecord {
    pub name: String,
    pub min_size: i32,
    pub max_size: i32,
    pub desired_capacity: i32,
    pub health_check_type: HealthCheckType,
    /// Seconds before a new instance is health checked
    pub health_check_grace_period: i32,
}

impl AutoscalingGroupRecord {
    /// Default grace period in seconds
    pub const DEFAULT_GRACE_PERIOD: i32 = 300;

    /// Create a record with the built-in defaults (ELB checks, 300s grace)
    pub fn new(
        name: impl Into<String>,
        min_size: i32,
        max_size: i32,
        desired_capacity: i32,
    ) -> Self {
        Self::with_defaults(
            name,
            min_size,
            max_size,
            desired_capacity,
            &AutoscalingDefaults::default(),
        )
    }

    /// Create a record using configured defaults
    pub fn with_defaults(
        name: impl Into<String>,
        min_size: i32,
        max_size: i32,
        desired_capacity: i32,
        defaults: &AutoscalingDefaults,
    ) -> Self {
        Self {
            name: name.into(),
            min_size,
            max_size,
            desired_capacity,
            health_check_type: defaults.health_check_type,
            health_check_grace_period: defaults.health_check_grace_period,
        }
    }

    /// Set the health check type from its string form
    ///
    /// Unknown values leave the current type in place.
    pub fn set_health_check_type(&mut self, value: &str) -> ValidationResult {
        let health_check_type = value.parse::<HealthCheckType>().map_err(|err| {
            debug!(group = %self.name, value, "rejected health check type");
            err
        })?;
        debug!(
            group = %self.name,
            health_check_type = %health_check_type,
            "health check type updated"
        );
        self.health_check_type = health_check_type;
        Ok(())
    }

    /// Change the desired capacity within the current size range
    pub fn set_desired_capacity(&mut self, desired: i32) -> ValidationResult {
        if let Err(err) = validate_desired_capacity(desired, self.min_size, self.max_size) {
            debug!(group = %self.name, desired, "rejected desired capacity");
            return Err(err);
        }
        debug!(
            group = %self.name,
            from = self.desired_capacity,
            to = desired,
            "desired capacity updated"
        );
        self.desired_capacity = desired;
        Ok(())
    }
}

impl Validate for AutoscalingGroupRecord {
    const KIND: &'static str = "autoscaling group";

    fn violations(&self) -> Vec<ValidationError> {
        collect_violations([
            validate_non_negative("min_size", self.min_size),
            validate_size_range(self.min_size, self.max_size),
            validate_desired_capacity(self.desired_capacity, self.min_size, self.max_size),
            validate_positive("health_check_grace_period", self.health_check_grace_period),
        ])
    }
}
