use crate::desk::title::un_camel_case;
use crate::error::DeskError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Recognized writing-document extensions, most preferred first. When a
/// directory holds several formats, the user is assumed to still be working
/// in the highest-priority one.
const WRITING_EXTENSIONS: [&str; 5] = ["msk", "celtx", "odt", "doc", "docx"];

/// A candidate project found on disk during a scan. Transient: built fresh
/// on every walk, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveredProject {
    pub title: String,
    pub series_hint: Option<String>,
    pub document_location: PathBuf,
}

fn extension_priority(path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_str()?;
    WRITING_EXTENSIONS
        .iter()
        .position(|known| ext.eq_ignore_ascii_case(known))
}

struct CandidateFile {
    path: PathBuf,
    priority: usize,
    modified: SystemTime,
}

/// Lower priority index wins; among equals the most recently touched file
/// is authoritative.
fn pick_best(candidates: Vec<CandidateFile>) -> Option<CandidateFile> {
    let mut best: Option<CandidateFile> = None;
    for candidate in candidates {
        match &best {
            Some(b) if candidate.priority > b.priority => {}
            Some(b) if candidate.priority == b.priority && candidate.modified <= b.modified => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Derive a display title from a document filename: drop the extension,
/// cut a trailing `-qualifier`, and undo camel-casing.
fn title_from_document(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let base = match stem.rfind('-') {
        Some(idx) => &stem[..idx],
        None => stem,
    };
    un_camel_case(base.trim())
}

/// The name a series directory lends to the projects inside it.
fn series_hint_from_directory(dir: &Path) -> String {
    let name = dir
        .file_stem()
        .or_else(|| dir.file_name())
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    un_camel_case(name.trim())
}

/// Decide whether `dir` looks like a single project: does it directly
/// contain at least one recognized writing document? Unreadable directories
/// and entries are treated as "no candidate here".
fn classify_project_dir(dir: &Path, series_hint: Option<&str>) -> Option<DiscoveredProject> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("skipping unreadable directory {}: {err}", dir.display());
            return None;
        }
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(priority) = extension_priority(&path) else {
            continue;
        };
        let modified = entry
            .metadata()
            .ok()
            .and_then(|meta| meta.modified().ok())
            .unwrap_or(UNIX_EPOCH);
        candidates.push(CandidateFile {
            path,
            priority,
            modified,
        });
    }

    let best = pick_best(candidates)?;
    Some(DiscoveredProject {
        title: title_from_document(&best.path),
        series_hint: series_hint.map(str::to_string),
        document_location: best.path,
    })
}

/// Decide whether `dir` looks like a series: a directory whose
/// subdirectories look like projects. Exactly one level deep; the result is
/// empty when nothing beneath qualifies.
fn series_projects(dir: &Path) -> Vec<DiscoveredProject> {
    let hint = series_hint_from_directory(dir);
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("skipping unreadable directory {}: {err}", dir.display());
            return Vec::new();
        }
    };

    let mut found = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(project) = classify_project_dir(&path, Some(&hint)) {
            found.push(project);
        }
    }
    found
}

/// Walk the directories directly under `root` and lazily yield one
/// discovered project per project-like directory, in listing order.
///
/// With `include_series`, a directory that fails the project test is given
/// one more chance as a series folder (its subdirectories classified with
/// the directory's name as the series hint); otherwise it is skipped.
///
/// Only the root itself being unreadable is fatal. The iterator reflects
/// filesystem state at call time; a fresh walk may differ.
pub fn discover(
    root: &Path,
    include_series: bool,
) -> Result<impl Iterator<Item = DiscoveredProject>, DeskError> {
    let entries = fs::read_dir(root).map_err(|source| DeskError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .flat_map(move |dir| match classify_project_dir(&dir, None) {
            Some(project) => vec![project],
            None if include_series => series_projects(&dir),
            None => Vec::new(),
        }))
}
