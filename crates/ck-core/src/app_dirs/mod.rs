use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    pub fn history_path(&self) -> PathBuf {
        self.app_data_root.join("history.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.app_data_root.join("config.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }
}
