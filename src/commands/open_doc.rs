use crate::commands::load_context;
use crate::desk::launch::open_document;
use anyhow::Result;

/// Resolve a project by name and hand its document to the launcher.
pub fn run(name: &str) -> Result<()> {
    let ctx = load_context()?;
    let registry = ctx.load_registry()?;
    let project = registry.resolve(name)?;
    open_document(project, &ctx.settings)
}
