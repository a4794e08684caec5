pub mod dump;
pub mod init;
pub mod link;
pub mod open_doc;
pub mod scan;
pub mod top;

use crate::desk::paths::{resolve_paths, DeskPaths};
use crate::desk::registry::ProjectSet;
use crate::desk::settings::Settings;
use crate::desk::stages::StageCatalog;
use anyhow::Result;
use std::path::Path;

/// Everything a command needs before it can do its own work.
pub struct DeskContext {
    pub paths: DeskPaths,
    pub settings: Settings,
}

pub fn load_context() -> Result<DeskContext> {
    let paths = resolve_paths()?;
    let settings = Settings::load(&paths.settings_file)?;
    Ok(DeskContext { paths, settings })
}

impl DeskContext {
    pub fn load_registry(&self) -> Result<ProjectSet> {
        ProjectSet::load(&self.paths.registry_file)
    }

    pub fn load_stages(&self) -> Result<StageCatalog> {
        StageCatalog::load(&self.paths.stages_file)
    }
}

/// The `title : series : location` line shared by every scan section.
pub fn project_line(title: &str, series: Option<&str>, location: Option<&Path>) -> String {
    let title = if title.is_empty() { "-" } else { title };
    format!(
        "{title} : {} : {}",
        series.unwrap_or("-"),
        location
            .map(|l| l.display().to_string())
            .unwrap_or_else(|| "-".to_string()),
    )
}
