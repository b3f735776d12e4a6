use std::path::PathBuf;

use ac_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub history_path: PathBuf,
    pub images_dir: PathBuf,
    pub settings_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            history_path: dirs.app_data_root.join("history_v2.json"),
            images_dir: dirs.app_data_root.join("images"),
            settings_path: dirs.app_data_root.join("settings.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
