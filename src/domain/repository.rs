// Copyright (c) 2025 - Cowboy AI, Inc.
//! Container Registry Repository Record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::invariants::{
    collect_violations, validate_non_empty, Validate, ValidationError, ValidationResult,
};
use crate::config::RepositoryDefaults;

/// Whether an image tag can be moved to a different image after push
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageTagMutability {
    #[default]
    Mutable,
    Immutable,
}

impl ImageTagMutability {
    /// All allowed values
    pub const ALL: [Self; 2] = [Self::Mutable, Self::Immutable];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutable => "MUTABLE",
            Self::Immutable => "IMMUTABLE",
        }
    }
}

impl fmt::Display for ImageTagMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageTagMutability {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MUTABLE" => Ok(Self::Mutable),
            "IMMUTABLE" => Ok(Self::Immutable),
            _ => Err(ValidationError::UnknownValue {
                kind: "image tag mutability",
                value: s.to_string(),
                allowed: "MUTABLE, IMMUTABLE",
            }),
        }
    }
}

/// Server-side encryption applied to stored images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EncryptionType {
    /// Provider-managed AES-256 keys
    #[default]
    Aes256,
    /// Customer-managed KMS key
    Kms,
}

impl EncryptionType {
    /// All allowed values
    pub const ALL: [Self; 2] = [Self::Aes256, Self::Kms];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aes256 => "AES256",
            Self::Kms => "KMS",
        }
    }
}

impl fmt::Display for EncryptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncryptionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AES256" => Ok(Self::Aes256),
            "KMS" => Ok(Self::Kms),
            _ => Err(ValidationError::UnknownValue {
                kind: "encryption type",
                value: s.to_string(),
                allowed: "AES256, KMS",
            }),
        }
    }
}

/// Container registry repository descriptor
///
/// # Invariants
/// - Name must not be empty
/// - Mutability and encryption belong to their closed sets (enforced by type)
///
/// # Examples
///
/// ```rust
/// use cloud_resource_models::domain::{ImageTagMutability, RepositoryRecord, Validate};
///
/// let mut repo = RepositoryRecord::new("app");
/// assert!(repo.set_image_tag_mutability("INVALID").is_err());
/// assert_eq!(repo.image_tag_mutability, ImageTagMutability::Mutable);
/// assert!(repo.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub image_scanning_enabled: bool,
    pub image_tag_mutability: ImageTagMutability,
    pub encryption_type: EncryptionType,
}

impl RepositoryRecord {
    /// Create a repository with scanning off, mutable tags and AES256
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_defaults(name, &RepositoryDefaults::default())
    }

    /// Create a repository using configured defaults
    pub fn with_defaults(name: impl Into<String>, defaults: &RepositoryDefaults) -> Self {
        Self {
            name: name.into(),
            image_scanning_enabled: defaults.image_scanning_enabled,
            image_tag_mutability: defaults.image_tag_mutability,
            encryption_type: defaults.encryption_type,
        }
    }

    /// Turn on scan-on-push
    pub fn enable_image_scanning(&mut self) {
        debug!(repository = %self.name, "image scanning enabled");
        self.image_scanning_enabled = true;
    }

    /// Set tag mutability from `MUTABLE` or `IMMUTABLE`
    ///
    /// Any other string is rejected and the current value is kept.
    pub fn set_image_tag_mutability(&mut self, value: &str) -> ValidationResult {
        let mutability = value.parse::<ImageTagMutability>().map_err(|err| {
            debug!(repository = %self.name, value, "rejected image tag mutability");
            err
        })?;
        debug!(
            repository = %self.name,
            image_tag_mutability = %mutability,
            "image tag mutability updated"
        );
        self.image_tag_mutability = mutability;
        Ok(())
    }

    /// Set encryption from `AES256` or `KMS`
    pub fn set_encryption_type(&mut self, value: &str) -> ValidationResult {
        let encryption = value.parse::<EncryptionType>().map_err(|err| {
            debug!(repository = %self.name, value, "rejected encryption type");
            err
        })?;
        debug!(repository = %self.name, encryption_type = %encryption, "encryption type updated");
        self.encryption_type = encryption;
        Ok(())
    }
}

impl Validate for RepositoryRecord {
    const KIND: &'static str = "repository";

    fn violations(&self) -> Vec<ValidationError> {
        collect_violations([validate_non_empty("name", &self.name)])
    }
}
