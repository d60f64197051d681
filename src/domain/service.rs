// Copyright (c) 2025 - Cowboy AI, Inc.
//! Container Service Record with Launch and Network Settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::invariants::{
    collect_violations, validate_non_empty, validate_non_negative, Validate, ValidationError,
    ValidationResult,
};
use crate::config::ServiceDefaults;

/// Deployment substrate for service tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LaunchType {
    /// Serverless capacity
    #[default]
    Fargate,
    /// Cluster-registered virtual machines
    Ec2,
    /// Externally managed hosts
    External,
}

impl LaunchType {
    /// All allowed values
    pub const ALL: [Self; 3] = [Self::Fargate, Self::Ec2, Self::External];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fargate => "FARGATE",
            Self::Ec2 => "EC2",
            Self::External => "EXTERNAL",
        }
    }
}

impl fmt::Display for LaunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaunchType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FARGATE" => Ok(Self::Fargate),
            "EC2" => Ok(Self::Ec2),
            "EXTERNAL" => Ok(Self::External),
            _ => Err(ValidationError::UnknownValue {
                kind: "launch type",
                value: s.to_string(),
                allowed: "FARGATE, EC2, EXTERNAL",
            }),
        }
    }
}

/// Container networking strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    /// Dedicated elastic network interface per task
    #[default]
    Awsvpc,
    /// Docker bridge network
    Bridge,
    /// Shares the host network namespace
    Host,
    /// No external connectivity
    None,
}

impl NetworkMode {
    /// All allowed values
    pub const ALL: [Self; 4] = [Self::Awsvpc, Self::Bridge, Self::Host, Self::None];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awsvpc => "awsvpc",
            Self::Bridge => "bridge",
            Self::Host => "host",
            Self::None => "none",
        }
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awsvpc" => Ok(Self::Awsvpc),
            "bridge" => Ok(Self::Bridge),
            "host" => Ok(Self::Host),
            "none" => Ok(Self::None),
            _ => Err(ValidationError::UnknownValue {
                kind: "network mode",
                value: s.to_string(),
                allowed: "awsvpc, bridge, host, none",
            }),
        }
    }
}

/// Container service descriptor
///
/// # Invariants
/// - Name and cluster must not be empty
/// - `desired_count >= 0`
/// - Launch type and network mode belong to their closed sets (enforced by type)
/// - The service must be enabled; a disabled service is never valid
///
/// # Examples
///
/// ```rust
/// use cloud_resource_models::domain::{ServiceRecord, Validate};
///
/// let mut svc = ServiceRecord::new("api", "prod", 3);
/// assert!(svc.scale(-1).is_err());
/// assert_eq!(svc.desired_count, 3);
///
/// svc.disable();
/// assert!(!svc.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    pub cluster: String,
    pub desired_count: i32,
    pub launch_type: LaunchType,
    pub network_mode: NetworkMode,
    pub health_check_path: String,
    pub enabled: bool,
}

impl ServiceRecord {
    /// Create an enabled FARGATE/awsvpc service checked at `/health`
    pub fn new(name: impl Into<String>, cluster: impl Into<String>, desired_count: i32) -> Self {
        Self::with_defaults(name, cluster, desired_count, &ServiceDefaults::default())
    }

    /// Create a service using configured defaults
    pub fn with_defaults(
        name: impl Into<String>,
        cluster: impl Into<String>,
        desired_count: i32,
        defaults: &ServiceDefaults,
    ) -> Self {
        Self {
            name: name.into(),
            cluster: cluster.into(),
            desired_count,
            launch_type: defaults.launch_type,
            network_mode: defaults.network_mode,
            health_check_path: defaults.health_check_path.clone(),
            enabled: defaults.enabled,
        }
    }

    /// Update the desired task count
    ///
    /// Negative counts are rejected without touching the current count.
    pub fn scale(&mut self, count: i32) -> ValidationResult {
        if let Err(err) = validate_non_negative("desired_count", count) {
            debug!(service = %self.name, count, "rejected scale request");
            return Err(err);
        }
        debug!(
            service = %self.name,
            from = self.desired_count,
            to = count,
            "service scaled"
        );
        self.desired_count = count;
        Ok(())
    }

    /// Set the launch type from `FARGATE`, `EC2` or `EXTERNAL`
    pub fn set_launch_type(&mut self, value: &str) -> ValidationResult {
        let launch_type = value.parse::<LaunchType>().map_err(|err| {
            debug!(service = %self.name, value, "rejected launch type");
            err
        })?;
        debug!(service = %self.name, launch_type = %launch_type, "launch type updated");
        self.launch_type = launch_type;
        Ok(())
    }

    /// Set the network mode from `awsvpc`, `bridge`, `host` or `none`
    pub fn set_network_mode(&mut self, value: &str) -> ValidationResult {
        let network_mode = value.parse::<NetworkMode>().map_err(|err| {
            debug!(service = %self.name, value, "rejected network mode");
            err
        })?;
        debug!(service = %self.name, network_mode = %network_mode, "network mode updated");
        self.network_mode = network_mode;
        Ok(())
    }

    /// Mark the service as enabled
    pub fn enable(&mut self) {
        debug!(service = %self.name, "service enabled");
        self.enabled = true;
    }

    /// Mark the service as disabled; it will fail validation until re-enabled
    pub fn disable(&mut self) {
        debug!(service = %self.name, "service disabled");
        self.enabled = false;
    }
}

impl Validate for ServiceRecord {
    const KIND: &'static str = "service";

    fn violations(&self) -> Vec<ValidationError> {
        let enabled = if self.enabled {
            Ok(())
        } else {
            Err(ValidationError::Disabled { field: "enabled" })
        };

        collect_violations([
            validate_non_empty("name", &self.name),
            validate_non_empty("cluster", &self.cluster),
            validate_non_negative("desired_count", self.desired_count),
            enabled,
        ])
    }
}
