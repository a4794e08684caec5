use crate::desk::discover::{discover, DiscoveredProject};
use crate::desk::project::Project;
use crate::desk::registry::ProjectSet;
use crate::desk::title::titles_equivalent;
use crate::error::DeskError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A registered project whose document went missing, paired with the
/// discovered file that is probably its new home.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedLink {
    pub project: Project,
    pub location: PathBuf,
}

/// The three-way diff between the registry and the filesystem.
///
/// A project appears in at most one of `missing`/`suggested_links`, and a
/// discovered location in at most one of `new_projects`/`suggested_links`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanOutcome {
    pub missing: Vec<Project>,
    pub new_projects: Vec<DiscoveredProject>,
    pub suggested_links: Vec<SuggestedLink>,
}

impl ScanOutcome {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.new_projects.is_empty() && self.suggested_links.is_empty()
    }
}

/// Run one reconciliation pass: walk `root` once, then diff both ways.
///
/// Registry → discovered: an entry whose document still exists is healthy
/// and reported nowhere. Otherwise the first discovered entry with an
/// equivalent title becomes a suggested link; failing that, an entry that
/// once had a location is missing, and one that never did is simply not
/// started yet.
///
/// Discovered → registry: anything already known by exact location or by
/// equivalent title is skipped; the rest are genuinely new.
pub fn reconcile(
    registry: &ProjectSet,
    root: &Path,
    include_series: bool,
) -> Result<ScanOutcome, DeskError> {
    let discovered: Vec<DiscoveredProject> = discover(root, include_series)?.collect();
    let mut outcome = ScanOutcome::default();

    for project in registry.iter() {
        let healthy = project
            .document_location
            .as_ref()
            .is_some_and(|location| location.exists());
        if healthy {
            continue;
        }
        let matched = discovered
            .iter()
            .find(|found| titles_equivalent(project.title(), &found.title));
        match matched {
            Some(found) => outcome.suggested_links.push(SuggestedLink {
                project: project.clone(),
                location: found.document_location.clone(),
            }),
            None if project.document_location.is_some() => {
                outcome.missing.push(project.clone());
            }
            None => {}
        }
    }

    for found in discovered {
        let known = registry.iter().any(|project| {
            project.document_location.as_deref() == Some(found.document_location.as_path())
                || titles_equivalent(&found.title, project.title())
        });
        if !known {
            outcome.new_projects.push(found);
        }
    }

    Ok(outcome)
}
