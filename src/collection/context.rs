use crate::graph::Dependency;
use crate::types::identifiers::Artifact;

/// Traversal state handed to selectors when deriving the child selector.
///
/// At root scope there is no current dependency, only the root artifact.
/// While descending, the current dependency is the node whose children are
/// about to be expanded.
#[derive(Debug, Clone, Copy)]
pub struct CollectionContext<'a> {
    artifact: Option<&'a Artifact>,
    dependency: Option<&'a Dependency>,
}

impl<'a> CollectionContext<'a> {
    pub fn root(artifact: &'a Artifact) -> Self {
        Self {
            artifact: Some(artifact),
            dependency: None,
        }
    }

    pub fn for_dependency(dependency: &'a Dependency) -> Self {
        Self {
            artifact: Some(&dependency.artifact),
            dependency: Some(dependency),
        }
    }

    /// A root scope with no known artifact yet.
    pub fn empty() -> Self {
        Self {
            artifact: None,
            dependency: None,
        }
    }

    pub fn artifact(&self) -> Option<&'a Artifact> {
        self.artifact
    }

    pub fn dependency(&self) -> Option<&'a Dependency> {
        self.dependency
    }
}
