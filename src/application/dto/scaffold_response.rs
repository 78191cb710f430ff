use std::path::PathBuf;

/// ScaffoldResponse - files created by the scaffolding use case, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldResponse {
    pub written: Vec<PathBuf>,
}
