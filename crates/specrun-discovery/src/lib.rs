//! Discovery extension system for specrun.
//!
//! Discovery is the part of the test cycle that finds candidate spec
//! types and instantiates them ready to be executed. This crate defines
//! the protocol third-party extensions implement to intercept that phase,
//! and the composition pipeline a hosting engine runs over its registered
//! extensions.
//!
//! # Overview
//!
//! A discovery batch moves through four steps:
//!
//! 1. **Scan**: the scanner supplies an ordered list of `SpecType`
//!    descriptors (outside this crate).
//! 2. **Filter**: every extension's `after_scan` runs in registration
//!    order; each output feeds the next extension. Extensions may drop or
//!    reorder entries, never add them.
//! 3. **Instantiate**: for each surviving type, extensions are asked in
//!    order; the first instance wins. If all defer, the type's
//!    zero-argument constructor is used.
//! 4. **Handoff**: the ordered instances go to the execution engine
//!    (outside this crate).
//!
//! Filtering always completes for the whole batch before the first spec
//! is instantiated. Failure handling is host policy, configured through
//! [`DiscoveryConfig`]; failures always name the extension involved.
//!
//! # Example
//!
//! ```
//! use specrun_discovery::{DiscoveryExtension, DiscoveryPipeline, Extension, ExtensionError, ExtensionSet};
//! use specrun_spec::{Spec, SpecType};
//!
//! #[derive(Default)]
//! struct FooSpec;
//!
//! impl Spec for FooSpec {
//!     fn name(&self) -> &str {
//!         "FooSpec"
//!     }
//! }
//!
//! /// Drops every spec type with "Bar" in its name.
//! struct SkipBars;
//!
//! impl Extension for SkipBars {
//!     fn name(&self) -> &str {
//!         "skip-bars"
//!     }
//! }
//!
//! impl DiscoveryExtension for SkipBars {
//!     fn after_scan(&self, types: Vec<SpecType>) -> Result<Vec<SpecType>, ExtensionError> {
//!         Ok(types.into_iter().filter(|t| !t.name().contains("Bar")).collect())
//!     }
//! }
//!
//! let mut extensions = ExtensionSet::new();
//! extensions.register(Box::new(SkipBars));
//!
//! let scanned = vec![SpecType::of::<FooSpec>(), SpecType::named("BarSpec")];
//! let outcome = DiscoveryPipeline::new(extensions).run(scanned).unwrap();
//!
//! assert_eq!(outcome.report.instantiated, vec!["FooSpec".to_string()]);
//! assert_eq!(outcome.instances.len(), 1);
//! ```
//!
//! # Modules
//!
//! - [`extension`]: the extension protocol and its error type
//! - [`pipeline`]: the composition algorithm and host policies
//! - [`report`]: serializable batch reports
//! - [`set`]: ordered extension sets

pub mod extension;
pub mod pipeline;
pub mod report;
pub mod set;

// Re-export commonly used types at the crate root
pub use extension::{DiscoveryExtension, Extension, ExtensionError};
pub use pipeline::{
    DiscoveryConfig, DiscoveryError, DiscoveryOutcome, DiscoveryPipeline, FilteredSpecs,
    InstantiateFailurePolicy, ScanFailurePolicy,
};
pub use report::{DiscoveryReport, DiscoverySummary, SkippedExtension, SpecFailure};
pub use set::ExtensionSet;
