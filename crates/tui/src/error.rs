use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("engine error: {0}")]
    Engine(#[from] engine::EngineError),
    #[error("rate source error: {0}")]
    Rates(#[from] engine::RateError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
