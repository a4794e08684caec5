use crate::commands::load_context;
use crate::desk::registry::ProjectSet;
use crate::desk::stages::StageCatalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the starter data files under the desk home: default settings, an
/// empty registry, and a plain stage catalog to edit to taste. Existing
/// files are left alone unless `--force`.
pub fn run(force: bool) -> Result<()> {
    let ctx = load_context()?;

    fs::create_dir_all(&ctx.paths.desk_home)
        .with_context(|| format!("failed to create {}", ctx.paths.desk_home.display()))?;

    let fresh = |path: &Path| force || !path.exists();

    if fresh(&ctx.paths.settings_file) {
        ctx.settings.save(&ctx.paths.settings_file)?;
        println!("wrote {}", ctx.paths.settings_file.display());
    } else {
        println!("kept existing {}", ctx.paths.settings_file.display());
    }

    if fresh(&ctx.paths.registry_file) {
        ProjectSet::default().save(&ctx.paths.registry_file)?;
        println!("wrote {}", ctx.paths.registry_file.display());
    } else {
        println!("kept existing {}", ctx.paths.registry_file.display());
    }

    if fresh(&ctx.paths.stages_file) {
        StageCatalog::starter().save(&ctx.paths.stages_file)?;
        println!("wrote {}", ctx.paths.stages_file.display());
    } else {
        println!("kept existing {}", ctx.paths.stages_file.display());
    }

    Ok(())
}
