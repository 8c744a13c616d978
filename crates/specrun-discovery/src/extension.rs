//! Discovery extension protocol.

use std::error::Error as StdError;

use thiserror::Error;

use specrun_spec::{SpecInstance, SpecType};

/// Failure raised by an extension from one of its hooks.
///
/// Carries a message and an optional underlying cause so the host can
/// report which extension failed and why.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExtensionError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl ExtensionError {
    /// Creates an error with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Base capability for registered extensions.
///
/// Extensions are identified by a stable name, used in logs and failure
/// reports. A host may share one extension across concurrent discovery
/// batches, so implementations either hold no mutable state or guard it
/// themselves.
pub trait Extension: Send + Sync {
    /// Stable identifier for this extension.
    fn name(&self) -> &str;
}

/// Interception of the discovery phase.
///
/// Discovery is the part of the test cycle that finds candidate spec
/// types and instantiates them ready to be executed. Both hooks have
/// default bodies, so an extension overrides only what it needs:
/// [`after_scan`](DiscoveryExtension::after_scan) defaults to the identity
/// and [`instantiate`](DiscoveryExtension::instantiate) defaults to
/// deferring.
///
/// When multiple discovery extensions are registered, the host invokes
/// them in registration order, but the protocol guarantees nothing about
/// the relative order of independently authored extensions.
/// Implementations must not assume they see the raw scan result.
pub trait DiscoveryExtension: Extension {
    /// Invoked once the scan phase is complete, before any spec has been
    /// instantiated.
    ///
    /// The input is the previous extension's output, or the scanner's
    /// list for the first extension in the chain. Implementations may
    /// drop or reorder entries to narrow what the engine sees, for
    /// example by package, name, or marker capability. They must not
    /// return spec types that were absent from the input.
    fn after_scan(&self, types: Vec<SpecType>) -> Result<Vec<SpecType>, ExtensionError> {
        Ok(types)
    }

    /// Invoked to create the instance for one surviving spec type.
    ///
    /// Returning `Ok(None)` passes control to the next extension, or back
    /// to the host's zero-argument construction path when no extension
    /// responds. Override this to support constructors with parameters or
    /// specs that need special initialization.
    fn instantiate(&self, spec_type: &SpecType) -> Result<Option<SpecInstance>, ExtensionError> {
        let _ = spec_type;
        Ok(None)
    }
}
