//! Discovery batch reports.

use serde::{Deserialize, Serialize};

/// Counts for one discovery batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySummary {
    /// Spec types supplied by the scanner.
    pub scanned: usize,
    /// Spec types removed by the filter chain.
    pub filtered_out: usize,
    /// Instances handed to the engine.
    pub instantiated: usize,
    /// Specs dropped by instantiation failures.
    pub failed: usize,
}

/// An extension whose contribution was discarded while filtering.
///
/// Only produced under the skip policy; the default policy aborts the
/// batch instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedExtension {
    /// Extension name.
    pub extension: String,
    /// Why the contribution was discarded.
    pub reason: String,
}

impl SkippedExtension {
    /// Creates a record for a skipped extension.
    pub fn new(extension: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            reason: reason.into(),
        }
    }
}

/// An instantiation failure recorded for one spec type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecFailure {
    /// Spec type name.
    pub spec: String,
    /// Extension at fault, when the failure came from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Failure message.
    pub message: String,
}

impl SpecFailure {
    /// Creates a failure record.
    pub fn new(
        spec: impl Into<String>,
        extension: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            spec: spec.into(),
            extension,
            message: message.into(),
        }
    }
}

/// Report for one discovery batch.
///
/// Summarizes what the engine receives and everything that went wrong on
/// the way there, so a host can decide to disable or fix a misbehaving
/// extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryReport {
    /// Batch counts.
    pub summary: DiscoverySummary,
    /// Names of the spec types handed to the engine, in order.
    pub instantiated: Vec<String>,
    /// Extensions skipped while filtering.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_extensions: Vec<SkippedExtension>,
    /// Instantiation failures, one per affected spec and extension.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<SpecFailure>,
}

impl DiscoveryReport {
    /// Returns true if the batch completed without skips or failures.
    pub fn is_clean(&self) -> bool {
        self.skipped_extensions.is_empty() && self.failures.is_empty()
    }
}
