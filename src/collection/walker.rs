use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::collection::config::WalkConfig;
use crate::collection::context::CollectionContext;
use crate::graph::{Dependency, DependencyNode};
use crate::selection::DependencySelector;
use crate::types::identifiers::Artifact;

/// A dependency kept by the selector, with the artifact chain that reached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetainedDependency {
    pub path: Vec<Artifact>,
    pub dependency: Dependency,
    pub depth: usize,
}

/// A dependency dropped by the selector. Its subtree is never visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrunedDependency {
    pub path: Vec<Artifact>,
    pub dependency: Dependency,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectResult {
    pub retained: Vec<RetainedDependency>,
    pub pruned: Vec<PrunedDependency>,
}

impl CollectResult {
    pub fn is_retained(&self, artifact: &Artifact) -> bool {
        self.retained.iter().any(|r| &r.dependency.artifact == artifact)
    }

    pub fn is_pruned(&self, artifact: &Artifact) -> bool {
        self.pruned.iter().any(|p| &p.dependency.artifact == artifact)
    }
}

/// Walk `root` depth-first, pruning every dependency `selector` rejects.
///
/// The selector is first re-derived for the root scope, then derived once
/// per expanded dependency before its children are tested.
///
/// Recursion goes one stack frame per tree level, so very deep chains can
/// exhaust the stack. Bound them with [`WalkConfig::max_depth`].
pub fn collect<S: DependencySelector>(
    root: &DependencyNode,
    selector: S,
    config: &WalkConfig,
) -> CollectResult {
    let root_selector = selector.derive_child_selector(&CollectionContext::root(&root.artifact));

    let mut walk = Walk {
        config,
        expanded: HashSet::new(),
        path: vec![root.artifact.clone()],
        result: CollectResult::default(),
    };
    walk.visit(root, &root_selector, 1);

    debug!(
        root = %root.artifact,
        retained = walk.result.retained.len(),
        pruned = walk.result.pruned.len(),
        "dependency collection finished"
    );

    walk.result
}

struct Walk<'c, S> {
    config: &'c WalkConfig,
    expanded: HashSet<(Artifact, S)>,
    path: Vec<Artifact>,
    result: CollectResult,
}

impl<S: DependencySelector> Walk<'_, S> {
    fn visit(&mut self, node: &DependencyNode, selector: &S, depth: usize) {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        for child in &node.children {
            let Some(dependency) = child.dependency.as_ref() else {
                warn!(artifact = %child.artifact, "child node without a dependency, skipping");
                continue;
            };

            let path = self.path_to(&child.artifact);

            if !selector.select_dependency(dependency) {
                debug!(
                    dependency = %dependency.artifact,
                    parent = %node.artifact,
                    depth,
                    "dependency pruned by selector"
                );
                self.result.pruned.push(PrunedDependency {
                    path,
                    dependency: dependency.clone(),
                });
                continue;
            }

            self.result.retained.push(RetainedDependency {
                path,
                dependency: dependency.clone(),
                depth,
            });

            if self.path.contains(&child.artifact) {
                trace!(artifact = %child.artifact, "cycle detected, not expanding");
                continue;
            }
            if self.config.max_depth.is_some_and(|max| depth >= max) {
                continue;
            }

            let child_selector =
                selector.derive_child_selector(&CollectionContext::for_dependency(dependency));
            trace!(artifact = %child.artifact, selector = ?child_selector, "derived child selector");

            if self.config.dedupe
                && !self
                    .expanded
                    .insert((child.artifact.clone(), child_selector.clone()))
            {
                trace!(artifact = %child.artifact, "already expanded under an equal selector");
                continue;
            }

            self.path.push(child.artifact.clone());
            self.visit(child, &child_selector, depth + 1);
            self.path.pop();
        }
    }

    fn path_to(&self, artifact: &Artifact) -> Vec<Artifact> {
        let mut path = self.path.clone();
        path.push(artifact.clone());
        path
    }
}
