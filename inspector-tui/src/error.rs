use inspector_lib::LoadError;

use crate::settings::SettingsError;

/// Errors that end the program.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
