//! In-memory models for cloud-resource descriptors
//!
//! Autoscaling groups, container registry repositories and container
//! services, each with provider defaults and field-level validation.

pub mod config;
pub mod domain;
pub mod errors;

// Re-export commonly used types
pub use config::RecordDefaults;
pub use domain::{
    AutoscalingGroupRecord, RepositoryRecord, ServiceRecord, Validate, ValidationError,
};
pub use errors::{ResourceError, ResourceResult};
