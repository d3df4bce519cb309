pub mod optional;

use std::fmt::Debug;
use std::hash::Hash;

use crate::collection::CollectionContext;
use crate::graph::Dependency;
pub use optional::OptionalDependencySelector;

/// Decides whether a dependency node is kept during collection, and which
/// selector applies one level deeper.
///
/// Implementations are immutable values. Collection engines may use them as
/// hash keys to deduplicate traversal paths, so `Eq` and `Hash` must agree.
pub trait DependencySelector: Clone + Eq + Hash + Debug {
	/// `true` keeps the dependency, `false` prunes it together with its subtree.
	fn select_dependency(&self, dependency: &Dependency) -> bool;

	/// The selector to apply to the children of the context's current dependency.
	fn derive_child_selector(&self, context: &CollectionContext<'_>) -> Self;
}
