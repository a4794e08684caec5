use crate::commands::{load_context, project_line};
use crate::desk::reconcile::reconcile;
use anyhow::Result;

/// Reconcile the registry against the projects directory and report the
/// three-way diff, each section preceded by its count.
pub fn run(include_series: bool, json: bool) -> Result<()> {
    let ctx = load_context()?;
    let registry = ctx.load_registry()?;
    let root = &ctx.settings.projects_directory;

    log::info!(
        "scanning {} against {} registered projects",
        root.display(),
        registry.len()
    );
    let outcome = reconcile(&registry, root, include_series)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Missing {}", outcome.missing.len());
    println!("----------------");
    for project in &outcome.missing {
        println!(
            "{}",
            project_line(
                project.title(),
                project.series.as_deref(),
                project.document_location.as_deref(),
            )
        );
    }

    println!();
    println!("New {}", outcome.new_projects.len());
    println!("----------------");
    for found in &outcome.new_projects {
        println!(
            "{}",
            project_line(
                &found.title,
                found.series_hint.as_deref(),
                Some(&found.document_location),
            )
        );
    }

    println!();
    println!("Suggested Links {}", outcome.suggested_links.len());
    println!("----------------");
    for link in &outcome.suggested_links {
        println!(
            "{}",
            project_line(
                link.project.title(),
                link.project.series.as_deref(),
                Some(&link.location),
            )
        );
    }

    if outcome.is_clean() {
        log::info!("registry and filesystem agree");
    }
    Ok(())
}
