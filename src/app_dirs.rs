//! Where BotLens keeps its files.
//!
//! Everything lives in one `.botlens` folder under the OS config directory
//! (e.g. `%APPDATA%` on Windows):
//!
//! ```text
//! .botlens/
//!   config.toml
//!   logs/botlens_<timestamp>.log
//! ```
//!
//! Setting `BOTLENS_CONFIG_HOME` moves the whole folder, which is how the
//! integration tests and portable installs keep their state apart.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application folder under the config base.
pub const APP_DIR_NAME: &str = ".botlens";
/// Environment variable that replaces the OS config base.
pub const CONFIG_HOME_ENV: &str = "BOTLENS_CONFIG_HOME";
/// Settings file inside the application folder.
pub const CONFIG_FILE_NAME: &str = "config.toml";
const LOGS_DIR_NAME: &str = "logs";

#[derive(Debug, Error)]
pub enum AppDirError {
    #[error("No config directory is available; set {CONFIG_HOME_ENV} to choose one")]
    NoBaseDir,
    #[error("Failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The `.botlens` folder, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(root_under(&config_base()?))
}

/// Folder for rolling log files, created on first use.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join(LOGS_DIR_NAME))
}

/// Path of `config.toml`. Its folder exists afterwards; the file may not.
pub fn config_file() -> Result<PathBuf, AppDirError> {
    Ok(app_root_dir()?.join(CONFIG_FILE_NAME))
}

fn config_base() -> Result<PathBuf, AppDirError> {
    base_from(
        std::env::var_os(CONFIG_HOME_ENV),
        BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()),
    )
    .ok_or(AppDirError::NoBaseDir)
}

/// An empty override counts as unset.
fn base_from(override_dir: Option<OsString>, os_default: Option<PathBuf>) -> Option<PathBuf> {
    override_dir
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or(os_default)
}

fn root_under(base: &Path) -> PathBuf {
    base.join(APP_DIR_NAME)
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    match std::fs::create_dir_all(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(AppDirError::CreateDir { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn override_wins_over_os_default() {
        let base = base_from(Some("/tmp/portable".into()), Some("/home/me/.config".into()));
        assert_eq!(base, Some(PathBuf::from("/tmp/portable")));
    }

    #[test]
    fn empty_override_falls_back_to_os_default() {
        let base = base_from(Some(OsString::new()), Some("/home/me/.config".into()));
        assert_eq!(base, Some(PathBuf::from("/home/me/.config")));
        assert_eq!(base_from(None, None), None);
    }

    #[test]
    fn root_and_logs_nest_under_the_base() {
        let base = tempdir().unwrap();
        let root = ensure_dir(root_under(base.path())).unwrap();
        assert_eq!(root, base.path().join(".botlens"));
        let logs = ensure_dir(root.join(LOGS_DIR_NAME)).unwrap();
        assert!(logs.is_dir());
        assert!(logs.starts_with(&root));
    }

    #[test]
    fn creating_under_a_file_reports_the_path() {
        let base = tempdir().unwrap();
        let blocker = base.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();
        let err = ensure_dir(root_under(&blocker)).unwrap_err();
        assert!(
            matches!(&err, AppDirError::CreateDir { path, .. } if path.ends_with(APP_DIR_NAME)),
            "{err:?}"
        );
    }
}
