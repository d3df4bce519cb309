use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactError {
    #[error("Artifact group id must not be empty")]
    EmptyGroupId,
    #[error("Artifact id must not be empty")]
    EmptyArtifactId,
    #[error("Artifact version must not be empty")]
    EmptyVersion,
}

/// Coordinates of an artifact in a dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawArtifact")]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl Artifact {
    /// Create an Artifact from its three coordinates.
    ///
    /// Surrounding whitespace is trimmed; a coordinate left empty is rejected.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, ArtifactError> {
        let group_id = normalize_coordinate(group_id.into()).ok_or(ArtifactError::EmptyGroupId)?;
        let artifact_id =
            normalize_coordinate(artifact_id.into()).ok_or(ArtifactError::EmptyArtifactId)?;
        let version = normalize_coordinate(version.into()).ok_or(ArtifactError::EmptyVersion)?;

        Ok(Artifact {
            group_id,
            artifact_id,
            version,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

// Deserialization goes through Artifact::new so decoded artifacts are validated too.
#[derive(Deserialize)]
struct RawArtifact {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl TryFrom<RawArtifact> for Artifact {
    type Error = ArtifactError;

    fn try_from(raw: RawArtifact) -> Result<Self, Self::Error> {
        Artifact::new(raw.group_id, raw.artifact_id, raw.version)
    }
}

fn normalize_coordinate(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
