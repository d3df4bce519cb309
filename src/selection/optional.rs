use crate::collection::CollectionContext;
use crate::graph::Dependency;

use super::DependencySelector;

/// Excludes optional dependencies once traversal is past the root.
///
/// Optional dependencies declared directly by the root artifact are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionalDependencySelector {
    transitive: bool,
}

impl OptionalDependencySelector {
    pub fn new() -> Self {
        Self { transitive: false }
    }

    /// `false` at root scope, `true` once descended past the root.
    pub fn is_transitive(&self) -> bool {
        self.transitive
    }
}

impl DependencySelector for OptionalDependencySelector {
    fn select_dependency(&self, dependency: &Dependency) -> bool {
        !self.transitive || !dependency.is_optional()
    }

    fn derive_child_selector(&self, context: &CollectionContext<'_>) -> Self {
        match (context.dependency().is_some(), self.transitive) {
            (true, false) => Self { transitive: true },
            (false, true) => Self { transitive: false },
            _ => *self,
        }
    }
}
