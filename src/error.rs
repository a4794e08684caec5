use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("project name \"{name}\" is ambiguous: {}", .candidates.join(" <-> "))]
    AmbiguousName {
        name: String,
        candidates: Vec<String>,
    },
    #[error("unable to find a project matching \"{name}\"")]
    NameNotFound { name: String },
    #[error("projects directory {} is unreadable", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
