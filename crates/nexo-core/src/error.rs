//! Error types for Nexo

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
