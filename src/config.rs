// Copyright (c) 2025 - Cowboy AI, Inc.
//! Construction defaults for cloud-resource records
//!
//! [`RecordDefaults::default`] reproduces the provider defaults. A partial
//! JSON document can override any subset of them:
//!
//! ```rust
//! use cloud_resource_models::config::RecordDefaults;
//! use cloud_resource_models::domain::LaunchType;
//!
//! let defaults = RecordDefaults::from_json(r#"{ "service": { "launch_type": "EC2" } }"#).unwrap();
//! assert_eq!(defaults.service.launch_type, LaunchType::Ec2);
//! assert_eq!(defaults.service.health_check_path, "/health");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::invariants::{validate_non_empty, validate_positive, ValidationResult};
use crate::domain::{
    AutoscalingGroupRecord, EncryptionType, HealthCheckType, ImageTagMutability, LaunchType,
    NetworkMode,
};
use crate::errors::ResourceResult;

/// Defaults applied by [`AutoscalingGroupRecord::new`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoscalingDefaults {
    pub health_check_type: HealthCheckType,
    pub health_check_grace_period: i32,
}

impl Default for AutoscalingDefaults {
    fn default() -> Self {
        Self {
            health_check_type: HealthCheckType::Elb,
            health_check_grace_period: AutoscalingGroupRecord::DEFAULT_GRACE_PERIOD,
        }
    }
}

/// Defaults applied by [`crate::domain::RepositoryRecord::new`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryDefaults {
    pub image_scanning_enabled: bool,
    pub image_tag_mutability: ImageTagMutability,
    pub encryption_type: EncryptionType,
}

/// Defaults applied by [`crate::domain::ServiceRecord::new`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDefaults {
    pub launch_type: LaunchType,
    pub network_mode: NetworkMode,
    pub health_check_path: String,
    pub enabled: bool,
}

impl Default for ServiceDefaults {
    fn default() -> Self {
        Self {
            launch_type: LaunchType::Fargate,
            network_mode: NetworkMode::Awsvpc,
            health_check_path: "/health".to_string(),
            enabled: true,
        }
    }
}

/// Defaults for every record kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordDefaults {
    pub autoscaling: AutoscalingDefaults,
    pub repository: RepositoryDefaults,
    pub service: ServiceDefaults,
}

impl RecordDefaults {
    /// Parse defaults from JSON, keeping built-in values for missing keys
    pub fn from_json(json: &str) -> ResourceResult<Self> {
        let defaults: Self = serde_json::from_str(json)?;
        defaults.validate()?;
        debug!(?defaults, "record defaults loaded");
        Ok(defaults)
    }

    /// Reject defaults that would produce invalid records out of the box
    pub fn validate(&self) -> ValidationResult {
        validate_positive(
            "health_check_grace_period",
            self.autoscaling.health_check_grace_period,
        )?;
        validate_non_empty("health_check_path", &self.service.health_check_path)?;
        Ok(())
    }
}
