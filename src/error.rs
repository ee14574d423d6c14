use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodLensError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query not found: {0}")]
    QueryNotFound(String),

    #[error("Execution error: {0}")]
    Execution(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("SQL parse error: {0}")]
    SqlParse(String),

    #[error("Readline error: {0}")]
    Readline(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FoodLensError>;
