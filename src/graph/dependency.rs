use serde::{Deserialize, Serialize};

use crate::types::identifiers::Artifact;

pub const DEFAULT_SCOPE: &str = "compile";

/// A declared reference from one artifact to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub artifact: Artifact,
    pub scope: String,
    pub optional: bool,
}

impl Dependency {
    /// A non-optional dependency. The scope is trimmed; an empty scope falls
    /// back to [`DEFAULT_SCOPE`].
    pub fn new(artifact: Artifact, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        let scope = match scope.trim() {
            "" => DEFAULT_SCOPE.to_string(),
            trimmed => trimmed.to_string(),
        };

        Dependency {
            artifact,
            scope,
            optional: false,
        }
    }

    pub fn with_optional(self, optional: bool) -> Self {
        Dependency { optional, ..self }
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}
