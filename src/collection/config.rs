// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WalkConfig {
    /// Deepest level visited; 1 means direct dependencies of the root only,
    /// 0 means nothing below the root.
    pub max_depth: Option<usize>,
    /// Skip re-expanding an artifact already expanded under an equal selector.
    pub dedupe: bool,
}

impl WalkConfig {
    pub fn v0() -> Self {
        Self {
            max_depth: None,
            dedupe: true,
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::v0()
    }
}
