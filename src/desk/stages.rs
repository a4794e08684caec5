use crate::desk::settings::Settings;
use crate::desk::table::{self, FieldSpec};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Effort estimate for one stage of a writing project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StageInfo {
    pub stage_num: usize,
    pub name: String,
    pub estimate_working_days: f64,
    pub estimate_working_hours: f64,
    pub goal: String,
}

fn parse_stage_num(s: &mut StageInfo, raw: &str) -> Result<()> {
    s.stage_num = raw.parse()?;
    Ok(())
}

fn parse_name(s: &mut StageInfo, raw: &str) -> Result<()> {
    s.name = raw.trim().to_string();
    Ok(())
}

fn parse_days(s: &mut StageInfo, raw: &str) -> Result<()> {
    s.estimate_working_days = raw.parse()?;
    Ok(())
}

fn parse_hours(s: &mut StageInfo, raw: &str) -> Result<()> {
    s.estimate_working_hours = raw.parse()?;
    Ok(())
}

fn parse_goal(s: &mut StageInfo, raw: &str) -> Result<()> {
    s.goal = raw.trim().to_string();
    Ok(())
}

impl StageInfo {
    pub const FIELDS: &'static [FieldSpec<StageInfo>] = &[
        FieldSpec {
            name: "stageNum",
            parse: parse_stage_num,
            format: |s| s.stage_num.to_string(),
        },
        FieldSpec {
            name: "name",
            parse: parse_name,
            format: |s| s.name.clone(),
        },
        FieldSpec {
            name: "estimateWorkingDays",
            parse: parse_days,
            format: |s| s.estimate_working_days.to_string(),
        },
        FieldSpec {
            name: "estimateWorkingHours",
            parse: parse_hours,
            format: |s| s.estimate_working_hours.to_string(),
        },
        FieldSpec {
            name: "goal",
            parse: parse_goal,
            format: |s| s.goal.clone(),
        },
    ];

    /// Day estimates are budgeted at the configured full working day.
    pub fn total_hours(&self, settings: &Settings) -> f64 {
        self.estimate_working_hours + self.estimate_working_days * settings.working_hours_per_day
    }
}

/// The ordered collection of stages every project moves through.
#[derive(Debug, Clone, Default)]
pub struct StageCatalog {
    stages: Vec<StageInfo>,
}

impl StageCatalog {
    pub fn from_stages(stages: Vec<StageInfo>) -> Self {
        Self { stages }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            stages: table::read_table(path, StageInfo::FIELDS)?,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        table::write_table(path, &self.stages, StageInfo::FIELDS)
    }

    pub fn get(&self, idx: usize) -> Option<&StageInfo> {
        self.stages.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageInfo> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn total_hours(&self, settings: &Settings) -> f64 {
        self.stages.iter().map(|s| s.total_hours(settings)).sum()
    }

    /// The stage set written by `init`: a plain outline-to-polish pipeline
    /// meant to be edited to taste.
    pub fn starter() -> Self {
        let stage = |stage_num, name: &str, days, hours, goal: &str| StageInfo {
            stage_num,
            name: name.to_string(),
            estimate_working_days: days,
            estimate_working_hours: hours,
            goal: goal.to_string(),
        };
        Self {
            stages: vec![
                stage(0, "outline", 3.0, 0.0, "beats and chapters mapped"),
                stage(1, "draft", 0.0, 120.0, "complete first draft"),
                stage(2, "revise", 0.0, 40.0, "structural rewrite done"),
                stage(3, "polish", 0.0, 16.0, "ready for readers"),
            ],
        }
    }
}
