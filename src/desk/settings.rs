use crate::desk::table;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Working-schedule parameters plus the filesystem locations the desk
/// operates on. Loaded from a `key=value` settings file, with `WDESK_*`
/// environment variables taking precedence over file values.
#[derive(Debug, Clone)]
pub struct Settings {
    pub working_hours_per_day_per_book: f64,
    pub working_days_per_week: f64,
    pub target_wordcount: f64,
    pub working_hours_per_day: f64,
    pub simultaneous_books: f64,
    pub projects_directory: PathBuf,
    pub writing_app: Option<String>,
}

fn default_projects_directory() -> PathBuf {
    if let Some(docs) = dirs::document_dir() {
        return docs;
    }
    match dirs::home_dir() {
        Some(home) => home.join("Documents"),
        None => PathBuf::from("."),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            working_hours_per_day_per_book: 2.0,
            working_days_per_week: 5.0,
            target_wordcount: 60_000.0,
            working_hours_per_day: 8.0,
            simultaneous_books: 1.0,
            projects_directory: default_projects_directory(),
            writing_app: None,
        }
    }
}

fn env_or_f64(var: &str, fallback: f64) -> f64 {
    match env::var(var) {
        Ok(v) => v.trim().parse::<f64>().ok().unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn env_or_path(var: &str, fallback: PathBuf) -> PathBuf {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => fallback,
    }
}

fn env_or_opt_string(var: &str, fallback: Option<String>) -> Option<String> {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => fallback,
    }
}

fn validate(settings: &Settings) -> Result<()> {
    if settings.working_hours_per_day_per_book <= 0.0 {
        return Err(anyhow!(
            "invalid workingHoursPerDayPerBook: must be > 0"
        ));
    }
    if settings.working_hours_per_day <= 0.0 {
        return Err(anyhow!("invalid workingHoursPerDay: must be > 0"));
    }
    if !(settings.working_days_per_week > 0.0 && settings.working_days_per_week <= 7.0) {
        return Err(anyhow!("invalid workingDaysPerWeek: require 0 < days <= 7"));
    }
    if settings.simultaneous_books < 1.0 {
        return Err(anyhow!("invalid simultaneousBooks: must be >= 1"));
    }
    Ok(())
}

impl Settings {
    /// Fold one settings file's `key=value` lines into `self`. Lines
    /// without `=` are skipped; unknown keys and unparsable values are
    /// warned about and otherwise ignored.
    fn apply_file(&mut self, raw: &str) {
        for line in raw.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            let accepted = match key {
                "workingHoursPerDayPerBook" => {
                    parse_f64_into(&mut self.working_hours_per_day_per_book, value)
                }
                "workingDaysPerWeek" => parse_f64_into(&mut self.working_days_per_week, value),
                "targetWordcount" => parse_f64_into(&mut self.target_wordcount, value),
                "workingHoursPerDay" => parse_f64_into(&mut self.working_hours_per_day, value),
                "simultaneousBooks" => parse_f64_into(&mut self.simultaneous_books, value),
                "projectsDirectory" => {
                    if !value.is_empty() {
                        self.projects_directory = PathBuf::from(value);
                    }
                    true
                }
                "writingApp" => {
                    self.writing_app = if value.is_empty() {
                        None
                    } else {
                        Some(value.to_string())
                    };
                    true
                }
                _ => {
                    log::warn!("skipping unrecognized setting \"{key}\"");
                    true
                }
            };
            if !accepted {
                log::warn!("ignoring unparsable value for setting \"{key}\": \"{value}\"");
            }
        }
    }

    fn apply_env(&mut self) {
        self.working_hours_per_day_per_book = env_or_f64(
            "WDESK_WORKING_HOURS_PER_DAY_PER_BOOK",
            self.working_hours_per_day_per_book,
        );
        self.working_days_per_week =
            env_or_f64("WDESK_WORKING_DAYS_PER_WEEK", self.working_days_per_week);
        self.target_wordcount = env_or_f64("WDESK_TARGET_WORDCOUNT", self.target_wordcount);
        self.working_hours_per_day =
            env_or_f64("WDESK_WORKING_HOURS_PER_DAY", self.working_hours_per_day);
        self.simultaneous_books = env_or_f64("WDESK_SIMULTANEOUS_BOOKS", self.simultaneous_books);
        self.projects_directory = env_or_path(
            "WDESK_PROJECTS_DIR",
            std::mem::take(&mut self.projects_directory),
        );
        self.writing_app = env_or_opt_string("WDESK_WRITING_APP", self.writing_app.take());
    }

    pub fn load(path: &Path) -> Result<Settings> {
        let mut settings = Settings::default();
        if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            settings.apply_file(&raw);
        }
        settings.apply_env();
        validate(&settings)?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "workingHoursPerDayPerBook={}",
            self.working_hours_per_day_per_book
        );
        let _ = writeln!(out, "workingDaysPerWeek={}", self.working_days_per_week);
        let _ = writeln!(out, "targetWordcount={}", self.target_wordcount);
        let _ = writeln!(out, "workingHoursPerDay={}", self.working_hours_per_day);
        let _ = writeln!(out, "simultaneousBooks={}", self.simultaneous_books);
        let _ = writeln!(
            out,
            "projectsDirectory={}",
            self.projects_directory.display()
        );
        let _ = writeln!(
            out,
            "writingApp={}",
            self.writing_app.as_deref().unwrap_or_default()
        );
        table::write_atomic(path, &out)
    }
}

fn parse_f64_into(slot: &mut f64, raw: &str) -> bool {
    match raw.parse::<f64>() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}
