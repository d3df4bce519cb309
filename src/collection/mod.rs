pub mod config;
pub mod context;
pub mod walker;

pub use config::WalkConfig;
pub use context::CollectionContext;
pub use walker::{collect, CollectResult, PrunedDependency, RetainedDependency};
