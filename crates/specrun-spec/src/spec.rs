//! Spec trait and spec type descriptors.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An executable test specification.
///
/// Concrete specs are written by engine users; discovery only needs a
/// stable name for reports and logs. Running the spec is the execution
/// engine's concern.
pub trait Spec: Send {
    /// Name reported for this spec, typically the type name.
    fn name(&self) -> &str;
}

/// A live spec, ready to hand to the execution engine.
pub type SpecInstance = Box<dyn Spec>;

/// Zero-argument construction path for a spec type.
pub type SpecConstructor = Arc<dyn Fn() -> SpecInstance + Send + Sync>;

/// Descriptor for a discoverable spec type.
///
/// The scanner produces one descriptor per candidate spec class it finds.
/// A descriptor carries a stable name (its identity for ordering, logging,
/// and equality) and, when the type supports it, a zero-argument
/// construction path used when no extension instantiates the spec itself.
///
/// Descriptors are immutable; cloning shares the constructor.
#[derive(Clone)]
pub struct SpecType {
    name: String,
    constructor: Option<SpecConstructor>,
}

impl SpecType {
    /// Creates a descriptor for a default-constructible spec type.
    ///
    /// The name is the short type name, with any module path stripped.
    ///
    /// # Example
    /// ```
    /// use specrun_spec::{Spec, SpecType};
    ///
    /// #[derive(Default)]
    /// struct FooSpec;
    ///
    /// impl Spec for FooSpec {
    ///     fn name(&self) -> &str {
    ///         "FooSpec"
    ///     }
    /// }
    ///
    /// let spec_type = SpecType::of::<FooSpec>();
    /// assert_eq!(spec_type.name(), "FooSpec");
    /// ```
    pub fn of<T: Spec + Default + 'static>() -> Self {
        Self::with_constructor(short_type_name::<T>(), || -> SpecInstance {
            Box::new(T::default())
        })
    }

    /// Creates a descriptor with a custom zero-argument constructor.
    pub fn with_constructor<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> SpecInstance + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            constructor: Some(Arc::new(constructor)),
        }
    }

    /// Creates a descriptor with no known construction path.
    ///
    /// Such a type can only be instantiated by a discovery extension.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructor: None,
        }
    }

    /// Returns the stable name identifying this spec type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks whether this type has a zero-argument construction path.
    pub fn has_default_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Constructs an instance via the zero-argument path, if one exists.
    pub fn construct(&self) -> Option<SpecInstance> {
        self.constructor.as_ref().map(|constructor| constructor())
    }
}

impl PartialEq for SpecType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SpecType {}

impl Hash for SpecType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for SpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecType")
            .field("name", &self.name)
            .field("constructible", &self.has_default_constructor())
            .finish()
    }
}

impl fmt::Display for SpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[derive(Default)]
    struct FooSpec;

    impl Spec for FooSpec {
        fn name(&self) -> &str {
            "FooSpec"
        }
    }

    #[test]
    fn test_of_uses_short_type_name() {
        let spec_type = SpecType::of::<FooSpec>();
        assert_eq!(spec_type.name(), "FooSpec");
    }

    #[test]
    fn test_of_constructs_default_instance() {
        let spec_type = SpecType::of::<FooSpec>();
        assert!(spec_type.has_default_constructor());
        let instance = spec_type.construct().expect("constructible");
        assert_eq!(instance.name(), "FooSpec");
    }

    #[test]
    fn test_named_has_no_constructor() {
        let spec_type = SpecType::named("OpaqueSpec");
        assert!(!spec_type.has_default_constructor());
        assert!(spec_type.construct().is_none());
    }

    #[test]
    fn test_with_constructor_runs_custom_factory() {
        let spec_type = SpecType::with_constructor("FooSpec", || Box::new(FooSpec));
        let instance = spec_type.construct().expect("constructible");
        assert_eq!(instance.name(), "FooSpec");
    }

    #[test]
    fn test_identity_is_the_name() {
        let constructible = SpecType::of::<FooSpec>();
        let opaque = SpecType::named("FooSpec");
        assert_eq!(constructible, opaque);

        let mut set = HashSet::new();
        set.insert(constructible);
        set.insert(opaque);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_clone_shares_constructor() {
        let spec_type = SpecType::of::<FooSpec>();
        let clone = spec_type.clone();
        assert!(clone.has_default_constructor());
        assert_eq!(clone.construct().expect("constructible").name(), "FooSpec");
    }

    #[test]
    fn test_display_and_debug() {
        let spec_type = SpecType::named("FooSpec");
        assert_eq!(spec_type.to_string(), "FooSpec");
        let debug = format!("{:?}", spec_type);
        assert!(debug.contains("FooSpec"));
        assert!(debug.contains("constructible: false"));
    }
}
