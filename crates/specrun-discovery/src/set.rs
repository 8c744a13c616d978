//! Ordered extension sets.

use std::fmt;

use crate::extension::DiscoveryExtension;

/// The ordered sequence of extensions registered for a discovery run.
///
/// Registration order is the only ordering signal available to the
/// composition algorithm; the registrar decides it. The set keeps the
/// order inspectable through [`names`](ExtensionSet::names) rather than
/// relying on registration side effects. No deduplication is performed;
/// uniqueness is the registrar's responsibility.
///
/// A pipeline takes ownership of its set, so the sequence is immutable
/// for the duration of every batch that pipeline runs.
#[derive(Default)]
pub struct ExtensionSet {
    extensions: Vec<Box<dyn DiscoveryExtension>>,
}

impl ExtensionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extension at the end of the order.
    pub fn register(&mut self, extension: Box<dyn DiscoveryExtension>) {
        self.extensions.push(extension);
    }

    /// Returns the registered extensions in order.
    pub fn extensions(&self) -> &[Box<dyn DiscoveryExtension>] {
        &self.extensions
    }

    /// Returns the extension names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    /// Returns the number of registered extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns true if no extensions are registered.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl FromIterator<Box<dyn DiscoveryExtension>> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = Box<dyn DiscoveryExtension>>>(iter: I) -> Self {
        Self {
            extensions: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionSet")
            .field("extensions", &self.names())
            .finish()
    }
}
