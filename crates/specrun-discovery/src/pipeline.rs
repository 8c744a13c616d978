//! Composition pipeline a host runs over its registered extensions.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use specrun_spec::{SpecInstance, SpecType};

use crate::extension::ExtensionError;
use crate::report::{DiscoveryReport, DiscoverySummary, SkippedExtension, SpecFailure};
use crate::set::ExtensionSet;

/// What the host does when an extension fails while filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanFailurePolicy {
    /// Abort the whole discovery batch, naming the extension and cause.
    #[default]
    Abort,
    /// Discard the failing extension's contribution and continue the
    /// chain with the previous list. The skip is recorded in the batch
    /// output and logged.
    SkipExtension,
}

/// What the host does when an extension fails while instantiating.
///
/// The protocol leaves this open. `AbortSpec` treats a failure in custom
/// instantiation logic as a bug in that extension rather than as "no
/// extension handled it", so programmer errors are not masked by the
/// fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstantiateFailurePolicy {
    /// Fail instantiation of that spec.
    #[default]
    AbortSpec,
    /// Record the failure and ask the next extension.
    NextExtension,
}

/// Host policy configuration for discovery batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveryConfig {
    /// Policy for `after_scan` failures.
    pub on_scan_failure: ScanFailurePolicy,
    /// Policy for `instantiate` failures.
    pub on_instantiate_failure: InstantiateFailurePolicy,
}

/// Errors surfaced by the discovery pipeline.
///
/// The pipeline never swallows a failure: every variant names the
/// extension and/or spec type involved.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// An extension raised from `after_scan`.
    #[error("extension '{extension}' failed while filtering scanned specs: {source}")]
    AfterScanFailed {
        /// Name of the failing extension.
        extension: String,
        /// The failure it raised.
        #[source]
        source: ExtensionError,
    },

    /// An extension raised from `instantiate`.
    #[error("extension '{extension}' failed while instantiating spec '{spec}': {source}")]
    InstantiateFailed {
        /// Name of the failing extension.
        extension: String,
        /// Spec type being instantiated.
        spec: String,
        /// The failure it raised.
        #[source]
        source: ExtensionError,
    },

    /// An extension returned a spec type that was not in its input.
    /// Extensions filter the scan result; they do not invent new
    /// discoverable types.
    #[error("extension '{extension}' returned spec type '{spec}' that was not in its input")]
    ForeignSpec {
        /// Name of the offending extension.
        extension: String,
        /// The fabricated spec type name.
        spec: String,
    },

    /// No extension produced an instance and the type has no
    /// zero-argument construction path.
    #[error("spec '{spec}' has no zero-argument constructor and no extension instantiated it")]
    NoConstructor {
        /// Spec type that could not be instantiated.
        spec: String,
    },
}

/// The frozen output of the filter chain.
///
/// Instantiation only ever starts from one of these, so no spec can be
/// constructed before every `after_scan` hook has run for the batch.
#[derive(Debug)]
pub struct FilteredSpecs {
    specs: Vec<SpecType>,
    skipped: Vec<SkippedExtension>,
    scanned: usize,
}

impl FilteredSpecs {
    /// Returns the surviving spec types, in order.
    pub fn specs(&self) -> &[SpecType] {
        &self.specs
    }

    /// Returns the extensions skipped under
    /// [`ScanFailurePolicy::SkipExtension`].
    pub fn skipped(&self) -> &[SkippedExtension] {
        &self.skipped
    }

    /// Returns the number of surviving spec types.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if no spec types survived the chain.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Everything a finished batch hands back to the host.
pub struct DiscoveryOutcome {
    /// Instances for the execution engine, one per surviving spec type,
    /// in filtered order.
    pub instances: Vec<SpecInstance>,
    /// Batch report.
    pub report: DiscoveryReport,
}

impl fmt::Debug for DiscoveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryOutcome")
            .field("instances", &self.instances.len())
            .field("report", &self.report)
            .finish()
    }
}

/// Runs the discovery composition algorithm over an extension set.
///
/// A batch moves through scan, filter, instantiate, and handoff, in that
/// order. The filter chain is strictly sequential: each extension
/// receives the previous extension's output, so it must not be
/// parallelized within a batch. Instantiation is a first-responder chain
/// per spec type with a zero-argument fallback.
///
/// The pipeline takes `&self` and holds no mutable state, so a host may
/// run independent batches concurrently and may parallelize
/// [`instantiate`](DiscoveryPipeline::instantiate) across distinct spec
/// types. Calls for the same spec type must not run concurrently: the
/// chain's short-circuit assumes a single in-flight call per type.
pub struct DiscoveryPipeline {
    extensions: ExtensionSet,
    config: DiscoveryConfig,
}

impl DiscoveryPipeline {
    /// Creates a pipeline with the default policies.
    pub fn new(extensions: ExtensionSet) -> Self {
        Self::with_config(extensions, DiscoveryConfig::default())
    }

    /// Creates a pipeline with explicit host policies.
    pub fn with_config(extensions: ExtensionSet, config: DiscoveryConfig) -> Self {
        Self { extensions, config }
    }

    /// Returns the extension names in the order the chains run them.
    pub fn extension_names(&self) -> Vec<&str> {
        self.extensions.names()
    }

    /// Runs the `after_scan` chain over the scanned spec types.
    ///
    /// Extensions run left to right in registration order; each one
    /// consumes the previous output. An extension returning a spec type
    /// absent from its input is a contract violation handled like a
    /// failure of that extension.
    pub fn filter(&self, scanned: Vec<SpecType>) -> Result<FilteredSpecs, DiscoveryError> {
        let scanned_count = scanned.len();
        let mut current = scanned;
        let mut skipped = Vec::new();

        for extension in self.extensions.extensions() {
            match extension.after_scan(current.clone()) {
                Ok(output) => {
                    if let Some(spec) = first_foreign(&current, &output) {
                        let error = DiscoveryError::ForeignSpec {
                            extension: extension.name().to_string(),
                            spec,
                        };
                        self.scan_failure(extension.name(), error, &mut skipped)?;
                    } else {
                        tracing::debug!(
                            extension = extension.name(),
                            input = current.len(),
                            output = output.len(),
                            "after_scan"
                        );
                        current = output;
                    }
                }
                Err(source) => {
                    let error = DiscoveryError::AfterScanFailed {
                        extension: extension.name().to_string(),
                        source,
                    };
                    self.scan_failure(extension.name(), error, &mut skipped)?;
                }
            }
        }

        Ok(FilteredSpecs {
            specs: current,
            skipped,
            scanned: scanned_count,
        })
    }

    /// Builds the instance for one spec type.
    ///
    /// Extensions are consulted in registration order; the first one
    /// returning an instance wins. If every extension defers, the type's
    /// zero-argument construction path is used.
    pub fn instantiate(&self, spec_type: &SpecType) -> Result<SpecInstance, DiscoveryError> {
        let mut failures = Vec::new();
        self.instantiate_recorded(spec_type, &mut failures)
    }

    /// Runs a full discovery batch: filter, then instantiate each
    /// survivor.
    ///
    /// The filter chain always completes before the first instantiation.
    /// A filter failure under [`ScanFailurePolicy::Abort`] aborts the
    /// batch. An instantiation failure is fatal to that spec only: it is
    /// recorded in the report and the batch continues with the remaining
    /// specs.
    pub fn run(&self, scanned: Vec<SpecType>) -> Result<DiscoveryOutcome, DiscoveryError> {
        let filtered = self.filter(scanned)?;

        let mut instances = Vec::new();
        let mut survivors = Vec::new();
        let mut failures = Vec::new();
        for spec_type in filtered.specs() {
            match self.instantiate_recorded(spec_type, &mut failures) {
                Ok(instance) => {
                    survivors.push(spec_type.name().to_string());
                    instances.push(instance);
                }
                Err(error) => {
                    tracing::warn!(
                        spec = spec_type.name(),
                        error = %error,
                        "spec dropped from batch"
                    );
                    let extension = match &error {
                        DiscoveryError::InstantiateFailed { extension, .. } => {
                            Some(extension.clone())
                        }
                        _ => None,
                    };
                    failures.push(SpecFailure::new(spec_type.name(), extension, error.to_string()));
                }
            }
        }

        let report = DiscoveryReport {
            summary: DiscoverySummary {
                scanned: filtered.scanned,
                filtered_out: filtered.scanned - filtered.len(),
                instantiated: instances.len(),
                failed: filtered.len() - instances.len(),
            },
            instantiated: survivors,
            skipped_extensions: filtered.skipped,
            failures,
        };

        Ok(DiscoveryOutcome { instances, report })
    }

    fn scan_failure(
        &self,
        extension: &str,
        error: DiscoveryError,
        skipped: &mut Vec<SkippedExtension>,
    ) -> Result<(), DiscoveryError> {
        match self.config.on_scan_failure {
            ScanFailurePolicy::Abort => Err(error),
            ScanFailurePolicy::SkipExtension => {
                tracing::warn!(extension, error = %error, "extension contribution skipped");
                skipped.push(SkippedExtension::new(extension, error.to_string()));
                Ok(())
            }
        }
    }

    fn instantiate_recorded(
        &self,
        spec_type: &SpecType,
        failures: &mut Vec<SpecFailure>,
    ) -> Result<SpecInstance, DiscoveryError> {
        for extension in self.extensions.extensions() {
            match extension.instantiate(spec_type) {
                Ok(Some(instance)) => {
                    tracing::debug!(
                        extension = extension.name(),
                        spec = spec_type.name(),
                        "extension instantiated spec"
                    );
                    return Ok(instance);
                }
                Ok(None) => {}
                Err(source) => {
                    let error = DiscoveryError::InstantiateFailed {
                        extension: extension.name().to_string(),
                        spec: spec_type.name().to_string(),
                        source,
                    };
                    match self.config.on_instantiate_failure {
                        InstantiateFailurePolicy::AbortSpec => return Err(error),
                        InstantiateFailurePolicy::NextExtension => {
                            tracing::warn!(
                                extension = extension.name(),
                                spec = spec_type.name(),
                                error = %error,
                                "trying next extension"
                            );
                            failures.push(SpecFailure::new(
                                spec_type.name(),
                                Some(extension.name().to_string()),
                                error.to_string(),
                            ));
                        }
                    }
                }
            }
        }

        spec_type
            .construct()
            .ok_or_else(|| DiscoveryError::NoConstructor {
                spec: spec_type.name().to_string(),
            })
    }
}

fn first_foreign(input: &[SpecType], output: &[SpecType]) -> Option<String> {
    let known: HashSet<&str> = input.iter().map(SpecType::name).collect();
    output
        .iter()
        .map(SpecType::name)
        .find(|name| !known.contains(name))
        .map(str::to_string)
}
