use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to parse tooltip settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Unable to serialize tooltip settings: {0}")]
    Serialize(#[from] ron::Error),
}
