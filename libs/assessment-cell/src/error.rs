use thiserror::Error;

use shared_config::ConfigError;

#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Invalid scheduling configuration: {0}")]
    Config(#[from] ConfigError),
}
