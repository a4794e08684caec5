use crate::commands::load_context;
use crate::desk::project::Project;
use anyhow::Result;
use chrono::Local;

/// Print every registered project: the persisted fields through their
/// formatters, then the derived schedule projections.
pub fn run() -> Result<()> {
    let ctx = load_context()?;
    let registry = ctx.load_registry()?;
    let stages = ctx.load_stages()?;
    let now = Local::now();

    let mut first = true;
    for project in registry.iter() {
        if !first {
            println!("================");
        }
        first = false;

        for spec in Project::FIELDS {
            println!("{}={}", spec.name, (spec.format)(project));
        }

        let fmt = |value: Option<f64>| {
            value
                .map(|v| format!("{v:.1}"))
                .unwrap_or_else(|| "-".to_string())
        };
        println!(
            "totalPercent={}",
            fmt(project.total_percent(&ctx.settings, &stages))
        );
        println!(
            "hoursRemainingInStage={}",
            fmt(project.hours_remaining_in_stage(&ctx.settings, &stages))
        );
        println!(
            "totalHoursRemaining={}",
            fmt(project.total_hours_remaining(&ctx.settings, &stages))
        );
        println!(
            "ETA={}",
            project
                .eta(&ctx.settings, &stages, now)
                .map(|eta| eta.format("%m/%d/%y").to_string())
                .unwrap_or_else(|| "-".to_string())
        );
        println!(
            "stageGoal={}",
            project.stage_goal(&stages).unwrap_or("-")
        );
    }

    if registry.is_empty() {
        log::info!("registry is empty");
    }
    Ok(())
}
