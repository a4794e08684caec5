use crate::desk::project::Project;
use crate::desk::settings::Settings;
use anyhow::{Context, Result};

/// Open the document behind a project with the configured writing app, or
/// the platform's default handler when none is configured.
///
/// A project with no document is a logged notice and a no-op, not an error.
pub fn open_document(project: &Project, settings: &Settings) -> Result<()> {
    let Some(location) = &project.document_location else {
        log::info!("no file associated with {}", project.title());
        return Ok(());
    };

    match &settings.writing_app {
        Some(app) => open::with(location, app.as_str())
            .with_context(|| format!("failed to open {} with {app}", location.display()))?,
        None => open::that(location)
            .with_context(|| format!("failed to open {}", location.display()))?,
    }
    log::info!("opened {}", location.display());
    Ok(())
}
