use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Where the desk keeps its persisted files.
#[derive(Debug, Clone)]
pub struct DeskPaths {
    pub desk_home: PathBuf,
    pub registry_file: PathBuf,
    pub stages_file: PathBuf,
    pub settings_file: PathBuf,
}

fn required_home_dir() -> Result<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        return Ok(home);
    }
    Err(anyhow::anyhow!("HOME directory could not be resolved"))
}

fn env_or_default_path(var: &str, fallback: PathBuf) -> PathBuf {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => fallback,
    }
}

pub fn resolve_paths() -> Result<DeskPaths> {
    let home = required_home_dir()?;
    let desk_home = env_or_default_path("WDESK_HOME", home.join(".writers-desk"));

    let registry_file = env_or_default_path("WDESK_REGISTRY_FILE", desk_home.join("projects.csv"));
    let stages_file = env_or_default_path("WDESK_STAGES_FILE", desk_home.join("stages.csv"));
    let settings_file = env_or_default_path("WDESK_SETTINGS_FILE", desk_home.join("settings.ini"));

    Ok(DeskPaths {
        desk_home,
        registry_file,
        stages_file,
        settings_file,
    })
}
