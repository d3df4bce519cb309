//! Dependency selection policies for dependency-graph collection engines.
//!
//! `dependency-selection-core` provides the [`DependencySelector`] capability,
//! the [`OptionalDependencySelector`] policy that keeps optional dependencies
//! of the root artifact but prunes optional dependencies found further down
//! the graph, and a small reference walker that drives any selector over an
//! in-memory dependency tree. Selectors are immutable values: equal selectors
//! hash identically and can key traversal deduplication.
//!
//! [`DependencySelector`]: selection::DependencySelector
//! [`OptionalDependencySelector`]: selection::OptionalDependencySelector

pub mod collection;
pub mod graph;
pub mod selection;
pub mod types;
