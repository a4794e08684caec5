use crate::commands::load_context;
use anyhow::Result;
use chrono::Local;

/// A quick todo list: the `count` most pressing active projects.
pub fn run(count: usize) -> Result<()> {
    let ctx = load_context()?;
    let registry = ctx.load_registry()?;
    let stages = ctx.load_stages()?;
    if stages.is_empty() {
        log::warn!("stage catalog is empty; schedule projections are unavailable");
    }
    let now = Local::now();

    let top = registry.top(count, &ctx.settings, &stages, now);
    if top.is_empty() {
        println!("no active projects");
        return Ok(());
    }

    for project in top {
        let focus = project
            .blocked_by
            .as_deref()
            .or_else(|| project.stage_goal(&stages))
            .unwrap_or("-");
        println!(
            "{} {}/{} {focus}",
            project.title(),
            project.current_words,
            project.target_words,
        );
    }
    Ok(())
}
