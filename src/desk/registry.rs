use crate::desk::project::Project;
use crate::desk::settings::Settings;
use crate::desk::stages::StageCatalog;
use crate::desk::table;
use crate::desk::title::titles_equivalent;
use crate::error::DeskError;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::Path;

/// The loaded registry: every known project, in file order. Iteration
/// order is load order, which keeps scan output stable across runs.
#[derive(Debug, Clone, Default)]
pub struct ProjectSet {
    projects: Vec<Project>,
}

impl ProjectSet {
    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            projects: table::read_table(path, Project::FIELDS)?,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        table::write_table(path, &self.projects, Project::FIELDS)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Resolve a project by name: exact title matches first, then fuzzy
    /// equivalence. More than one hit at either stage is an error naming
    /// the conflicting titles, never a silent pick.
    pub fn resolve(&self, name: &str) -> Result<&Project, DeskError> {
        let exact: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.title() == name)
            .collect();
        match exact.len() {
            1 => return Ok(exact[0]),
            0 => {}
            _ => {
                return Err(DeskError::AmbiguousName {
                    name: name.to_string(),
                    candidates: exact.iter().map(|p| p.title().to_string()).collect(),
                })
            }
        }

        let fuzzy: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| titles_equivalent(p.title(), name))
            .collect();
        match fuzzy.len() {
            1 => Ok(fuzzy[0]),
            0 => Err(DeskError::NameNotFound {
                name: name.to_string(),
            }),
            _ => Err(DeskError::AmbiguousName {
                name: name.to_string(),
                candidates: fuzzy.iter().map(|p| p.title().to_string()).collect(),
            }),
        }
    }

    /// Resolve a project by name for editing. Same policy as [`resolve`].
    pub fn resolve_mut(&mut self, name: &str) -> Result<&mut Project, DeskError> {
        let idx = {
            let found = self.resolve(name)?;
            self.projects
                .iter()
                .position(|p| std::ptr::eq(p, found))
                .unwrap_or_default()
        };
        Ok(&mut self.projects[idx])
    }

    /// The `n` most pressing active projects: lowest
    /// `priority * 10 + days_ahead` first, so being behind schedule bubbles
    /// a project up its priority band.
    pub fn top(
        &self,
        n: usize,
        settings: &Settings,
        stages: &StageCatalog,
        now: DateTime<Local>,
    ) -> Vec<&Project> {
        let mut active: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.active_status == "active")
            .collect();
        active.sort_by_key(|p| p.priority * 10 + p.days_ahead(settings, stages, now));
        active.truncate(n);
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn titled(title: &str) -> Project {
        Project {
            working_title: Some(title.to_string()),
            ..Project::default()
        }
    }

    #[test]
    fn resolve_prefers_exact_matches() {
        let set = ProjectSet::from_projects(vec![titled("My Book"), titled("my book")]);
        // both are fuzzy-equivalent to "My Book", but exactly one is exact
        let found = set.resolve("My Book").expect("resolve");
        assert_eq!(found.title(), "My Book");
    }

    #[test]
    fn resolve_falls_back_to_fuzzy() {
        let set = ProjectSet::from_projects(vec![titled("Oceans"), titled("Dry Land")]);
        let found = set.resolve("oceans (backup)").expect("resolve");
        assert_eq!(found.title(), "Oceans");
    }

    #[test]
    fn duplicate_titles_are_ambiguous() {
        let set = ProjectSet::from_projects(vec![titled("Draft"), titled("Draft")]);
        let err = set.resolve("Draft").unwrap_err();
        match err {
            DeskError::AmbiguousName { candidates, .. } => {
                assert_eq!(candidates, vec!["Draft", "Draft"]);
            }
            other => panic!("expected AmbiguousName, got {other:?}"),
        }
    }

    #[test]
    fn fuzzy_ambiguity_is_reported_not_resolved() {
        let set = ProjectSet::from_projects(vec![titled("My Book"), titled("my_book")]);
        let err = set.resolve("MYBOOK").unwrap_err();
        assert!(matches!(err, DeskError::AmbiguousName { .. }));
    }

    #[test]
    fn unknown_names_are_not_found() {
        let set = ProjectSet::from_projects(vec![titled("Oceans")]);
        let err = set.resolve("Deserts").unwrap_err();
        assert!(matches!(err, DeskError::NameNotFound { .. }));
    }

    #[test]
    fn top_filters_inactive_and_orders_by_priority() {
        let mut urgent = titled("Urgent");
        urgent.active_status = "active".into();
        urgent.priority = 1;
        let mut later = titled("Later");
        later.active_status = "active".into();
        later.priority = 5;
        let mut shelved = titled("Shelved");
        shelved.priority = 0;

        let set = ProjectSet::from_projects(vec![later.clone(), shelved, urgent.clone()]);
        let settings = Settings::default();
        let stages = StageCatalog::default();
        let now = Local.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();

        let top = set.top(4, &settings, &stages, now);
        let names: Vec<&str> = top.iter().map(|p| p.title()).collect();
        assert_eq!(names, vec!["Urgent", "Later"]);

        let top_one = set.top(1, &settings, &stages, now);
        assert_eq!(top_one.len(), 1);
        assert_eq!(top_one[0].title(), "Urgent");
    }
}
