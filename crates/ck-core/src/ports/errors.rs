use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data directory is unavailable")]
    DataDirUnavailable,
}
