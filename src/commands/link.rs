use crate::commands::load_context;
use anyhow::{bail, Result};
use std::path::Path;

/// Point a registered project at a document on disk and persist the
/// registry. This is the manual follow-through on a `scan` suggestion.
pub fn run(name: &str, location: &Path) -> Result<()> {
    if !location.exists() {
        bail!("{} does not exist; not linking", location.display());
    }

    let ctx = load_context()?;
    let mut registry = ctx.load_registry()?;
    let project = registry.resolve_mut(name)?;
    let title = project.title().to_string();
    project.document_location = Some(location.to_path_buf());

    registry.save(&ctx.paths.registry_file)?;
    println!("linked {title} -> {}", location.display());
    Ok(())
}
