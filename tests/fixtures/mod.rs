// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cloud-resource-models
//!
//! Deterministic records shared by the integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex, Once};

use tracing_subscriber::fmt::MakeWriter;

use cloud_resource_models::domain::{
    AutoscalingGroupRecord, EncryptionType, ImageTagMutability, LaunchType, NetworkMode,
    RepositoryRecord, ServiceRecord,
};

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary
///
/// Honours `RUST_LOG`; output is captured by the test harness.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// In-memory log sink for asserting on emitted events
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Run `f` with a DEBUG-level subscriber that writes into this sink
    pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Valid scaling group: 1 <= 5 <= 10
pub fn web_asg_fixture() -> AutoscalingGroupRecord {
    AutoscalingGroupRecord::new("web-asg", 1, 10, 5)
}

/// Immutable, KMS-encrypted repository with scanning on
pub fn hardened_repository_fixture() -> RepositoryRecord {
    RepositoryRecord {
        name: "payments-api".to_string(),
        image_scanning_enabled: true,
        image_tag_mutability: ImageTagMutability::Immutable,
        encryption_type: EncryptionType::Kms,
    }
}

/// EC2 bridge-mode service with a custom health check
pub fn ec2_service_fixture() -> ServiceRecord {
    ServiceRecord {
        name: "worker".to_string(),
        cluster: "batch".to_string(),
        desired_count: 4,
        launch_type: LaunchType::Ec2,
        network_mode: NetworkMode::Bridge,
        health_check_path: "/ping".to_string(),
        enabled: true,
    }
}
