use super::*;
use crate::app_dirs::{self, AppDirError};
use std::path::PathBuf;

impl EguiController {
    /// Open the directory holding `config.toml` in the OS file browser.
    pub fn open_config_folder(&mut self) {
        self.open_folder("config", app_dirs::app_root_dir());
    }

    /// Open the directory holding the rolling log files.
    pub fn open_log_folder(&mut self) {
        self.open_folder("log", app_dirs::logs_dir());
    }

    fn open_folder(&mut self, what: &str, path: Result<PathBuf, AppDirError>) {
        match path {
            Ok(path) => {
                if let Err(err) = open::that(&path) {
                    tracing::warn!("Could not open {what} folder {}: {err}", path.display());
                    self.set_status(
                        format!("Could not open {what} folder {}: {err}", path.display()),
                        StatusTone::Error,
                    );
                }
            }
            Err(err) => {
                self.set_status(
                    format!("Could not resolve {what} folder: {err}"),
                    StatusTone::Error,
                );
            }
        }
    }
}
