pub mod identifiers;

pub use identifiers::{Artifact, ArtifactError};
