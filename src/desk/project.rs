use crate::desk::settings::Settings;
use crate::desk::stages::{StageCatalog, StageInfo};
use crate::desk::table::FieldSpec;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta};
use serde::Serialize;
use std::path::PathBuf;

pub const ETA_DATE_FORMAT: &str = "%m/%d/%y";

/// A single writing project as persisted in the registry.
///
/// The reconciliation core only ever reads `working_title`, `series`, and
/// `document_location`; the remaining fields are scheduling payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub priority: i64,
    pub active_status: String,
    pub working_title: Option<String>,
    pub series: Option<String>,
    pub target_words: u64,
    pub current_words: u64,
    pub stage: usize,
    pub stage_percent: f64,
    pub desired_eta: Option<NaiveDate>,
    pub blocked_by: Option<String>,
    pub document_location: Option<PathBuf>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            priority: 99,
            active_status: "planned".to_string(),
            working_title: None,
            series: None,
            target_words: 60_000,
            current_words: 0,
            stage: 0,
            stage_percent: 0.0,
            desired_eta: None,
            blocked_by: None,
            document_location: None,
        }
    }
}

fn opt_string(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn fmt_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn parse_priority(p: &mut Project, raw: &str) -> Result<()> {
    p.priority = raw.parse()?;
    Ok(())
}

fn parse_active_status(p: &mut Project, raw: &str) -> Result<()> {
    p.active_status = raw.trim().to_string();
    Ok(())
}

fn parse_working_title(p: &mut Project, raw: &str) -> Result<()> {
    p.working_title = opt_string(raw);
    Ok(())
}

fn parse_series(p: &mut Project, raw: &str) -> Result<()> {
    p.series = opt_string(raw);
    Ok(())
}

fn parse_target_words(p: &mut Project, raw: &str) -> Result<()> {
    p.target_words = raw.parse()?;
    Ok(())
}

fn parse_current_words(p: &mut Project, raw: &str) -> Result<()> {
    p.current_words = raw.parse()?;
    Ok(())
}

fn parse_stage(p: &mut Project, raw: &str) -> Result<()> {
    p.stage = raw.parse()?;
    Ok(())
}

fn parse_stage_percent(p: &mut Project, raw: &str) -> Result<()> {
    p.stage_percent = raw.parse()?;
    Ok(())
}

fn parse_desired_eta(p: &mut Project, raw: &str) -> Result<()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        p.desired_eta = None;
        return Ok(());
    }
    p.desired_eta = Some(NaiveDate::parse_from_str(trimmed, ETA_DATE_FORMAT)?);
    Ok(())
}

fn parse_blocked_by(p: &mut Project, raw: &str) -> Result<()> {
    p.blocked_by = opt_string(raw);
    Ok(())
}

fn parse_document_location(p: &mut Project, raw: &str) -> Result<()> {
    let trimmed = raw.trim();
    p.document_location = if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    };
    Ok(())
}

impl Project {
    /// Persisted columns, in file order.
    pub const FIELDS: &'static [FieldSpec<Project>] = &[
        FieldSpec {
            name: "priority",
            parse: parse_priority,
            format: |p| p.priority.to_string(),
        },
        FieldSpec {
            name: "activeStatus",
            parse: parse_active_status,
            format: |p| p.active_status.clone(),
        },
        FieldSpec {
            name: "workingTitle",
            parse: parse_working_title,
            format: |p| fmt_opt(&p.working_title),
        },
        FieldSpec {
            name: "series",
            parse: parse_series,
            format: |p| fmt_opt(&p.series),
        },
        FieldSpec {
            name: "targetWords",
            parse: parse_target_words,
            format: |p| p.target_words.to_string(),
        },
        FieldSpec {
            name: "currentWords",
            parse: parse_current_words,
            format: |p| p.current_words.to_string(),
        },
        FieldSpec {
            name: "stage",
            parse: parse_stage,
            format: |p| p.stage.to_string(),
        },
        FieldSpec {
            name: "stagePercent",
            parse: parse_stage_percent,
            format: |p| p.stage_percent.to_string(),
        },
        FieldSpec {
            name: "desiredETA",
            parse: parse_desired_eta,
            format: |p| {
                p.desired_eta
                    .map(|d| d.format(ETA_DATE_FORMAT).to_string())
                    .unwrap_or_default()
            },
        },
        FieldSpec {
            name: "blockedBy",
            parse: parse_blocked_by,
            format: |p| fmt_opt(&p.blocked_by),
        },
        FieldSpec {
            name: "documentLocation",
            parse: parse_document_location,
            format: |p| {
                p.document_location
                    .as_ref()
                    .map(|l| l.display().to_string())
                    .unwrap_or_default()
            },
        },
    ];

    /// Display name; also the fuzzy-match key.
    pub fn title(&self) -> &str {
        self.working_title.as_deref().unwrap_or("")
    }

    pub fn current_stage<'a>(&self, stages: &'a StageCatalog) -> Option<&'a StageInfo> {
        stages.get(self.stage)
    }

    pub fn stage_goal<'a>(&self, stages: &'a StageCatalog) -> Option<&'a str> {
        self.current_stage(stages).map(|s| s.goal.as_str())
    }

    /// Hours left in the stage the project is currently on.
    pub fn hours_remaining_in_stage(
        &self,
        settings: &Settings,
        stages: &StageCatalog,
    ) -> Option<f64> {
        let stage = self.current_stage(stages)?;
        Some(stage.total_hours(settings) * (1.0 - self.stage_percent))
    }

    /// Hours left across the whole project: the remainder of the current
    /// stage plus every stage after it.
    pub fn total_hours_remaining(&self, settings: &Settings, stages: &StageCatalog) -> Option<f64> {
        let mut hours = self.hours_remaining_in_stage(settings, stages)?;
        for stage in stages.iter().skip(self.stage + 1) {
            hours += stage.total_hours(settings);
        }
        Some(hours)
    }

    /// Fraction of the total project complete, in hours terms.
    pub fn total_percent(&self, settings: &Settings, stages: &StageCatalog) -> Option<f64> {
        let total = stages.total_hours(settings);
        if total <= 0.0 {
            return None;
        }
        Some(1.0 - self.total_hours_remaining(settings, stages)? / total)
    }

    /// Projected completion, given the daily hours budgeted per book.
    pub fn eta(
        &self,
        settings: &Settings,
        stages: &StageCatalog,
        now: DateTime<Local>,
    ) -> Option<DateTime<Local>> {
        let remaining = self.total_hours_remaining(settings, stages)?;
        let days = remaining / settings.working_hours_per_day_per_book;
        let delta = TimeDelta::try_seconds((days * 86_400.0) as i64)?;
        now.checked_add_signed(delta)
    }

    /// Days ahead of schedule (negative when behind). Zero when either the
    /// desired date or the projection is unavailable.
    pub fn days_ahead(&self, settings: &Settings, stages: &StageCatalog, now: DateTime<Local>) -> i64 {
        let (Some(desired), Some(eta)) = (self.desired_eta, self.eta(settings, stages, now)) else {
            return 0;
        };
        (desired.and_time(NaiveTime::MIN) - eta.naive_local()).num_days()
    }
}
