use serde::{Deserialize, Serialize};

use crate::graph::dependency::Dependency;
use crate::types::identifiers::Artifact;

/// An already-declared dependency tree.
///
/// The root node carries only an artifact; every other node carries the
/// dependency through which it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    pub artifact: Artifact,
    pub dependency: Option<Dependency>,
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn root(artifact: Artifact) -> Self {
        DependencyNode {
            artifact,
            dependency: None,
            children: Vec::new(),
        }
    }

    pub fn from_dependency(dependency: Dependency) -> Self {
        DependencyNode {
            artifact: dependency.artifact.clone(),
            dependency: Some(dependency),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: DependencyNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: DependencyNode) {
        self.children.push(child);
    }
}
