//! Specrun Canonical Spec Library
//!
//! This crate provides the types shared between the scanner, the discovery
//! pipeline, and the execution engine: the [`Spec`] capability trait, the
//! [`SpecType`] descriptor produced by scanning, and name validation.
//!
//! # Overview
//!
//! A scanner reports each candidate test class as a [`SpecType`]: a stable
//! name plus, when the type supports it, a zero-argument construction path.
//! Descriptors are immutable; instantiating one yields a [`SpecInstance`]
//! owned by the execution engine.
//!
//! # Example
//!
//! ```
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
//! let spec_type = SpecType::of::<FooSpec>();
//! assert_eq!(spec_type.name(), "FooSpec");
//! assert!(spec_type.has_default_constructor());
//!
//! let instance = spec_type.construct().unwrap();
//! assert_eq!(instance.name(), "FooSpec");
//! ```
//!
//! # Modules
//!
//! - [`spec`]: the `Spec` trait and `SpecType` descriptors
//! - [`validation`]: spec type name validation

pub mod spec;
pub mod validation;

// Re-export commonly used types at the crate root
pub use spec::{Spec, SpecConstructor, SpecInstance, SpecType};
pub use validation::{is_valid_spec_name, validate_spec_type, SpecTypeError};
