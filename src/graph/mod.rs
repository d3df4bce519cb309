pub mod dependency;
pub mod node;

pub use crate::types::identifiers::{Artifact, ArtifactError};
pub use dependency::{Dependency, DEFAULT_SCOPE};
pub use node::DependencyNode;
