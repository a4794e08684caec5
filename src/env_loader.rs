use std::env;
use std::path::PathBuf;

fn fallback_dotenv_path(desk_home: Option<PathBuf>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    let base = desk_home.or_else(|| Some(home_dir?.join(".writers-desk")))?;
    Some(base.join(".env"))
}

pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let fallback = fallback_dotenv_path(
        env::var_os("WDESK_HOME").map(PathBuf::from),
        dirs::home_dir(),
    );

    let Some(path) = fallback else {
        return;
    };
    if path.is_file() {
        let _ = dotenvy::from_path(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::fallback_dotenv_path;
    use std::path::PathBuf;

    #[test]
    fn fallback_prefers_the_configured_desk_home() {
        let got = fallback_dotenv_path(
            Some(PathBuf::from("/workspace/desk")),
            Some(PathBuf::from("/home/alice")),
        );

        let want = Some(PathBuf::from("/workspace/desk/.env"));
        assert_eq!(got, want);
    }

    #[test]
    fn fallback_uses_home_when_desk_home_unset() {
        let got = fallback_dotenv_path(None, Some(PathBuf::from("/home/alice")));
        let want = Some(PathBuf::from("/home/alice/.writers-desk/.env"));
        assert_eq!(got, want);
    }
}
