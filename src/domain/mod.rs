// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Resource Domain Models
//!
//! Descriptors for three independent cloud resources, each a plain value
//! with constructor defaults, checked setters and a pure validator.
//!
//! # Records
//!
//! - [`AutoscalingGroupRecord`] - capacity bounds and health check grace period
//! - [`RepositoryRecord`] - image tag mutability and encryption
//! - [`ServiceRecord`] - launch type, network mode and enablement
//!
//! # Enumerations
//!
//! - [`HealthCheckType`] - `ELB` | `EC2`
//! - [`ImageTagMutability`] - `MUTABLE` | `IMMUTABLE`
//! - [`EncryptionType`] - `AES256` | `KMS`
//! - [`LaunchType`] - `FARGATE` | `EC2` | `EXTERNAL`
//! - [`NetworkMode`] - `awsvpc` | `bridge` | `host` | `none`
//!
//! Setters return [`ValidationResult`]; an `Err` leaves the record untouched.

pub mod autoscaling_group;
pub mod invariants;
pub mod repository;
pub mod service;

pub use autoscaling_group::{AutoscalingGroupRecord, HealthCheckType};
pub use invariants::{Validate, ValidationError, ValidationResult};
pub use repository::{EncryptionType, ImageTagMutability, RepositoryRecord};
pub use service::{LaunchType, NetworkMode, ServiceRecord};
