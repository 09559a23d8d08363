use gpuplan_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("no server combination covers exactly {required_gpus} GPUs")]
    Infeasible { required_gpus: u32 },
}

impl From<CoreError> for SolverError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownModel(id) => SolverError::UnknownModel(id),
            other => SolverError::Configuration(other.to_string()),
        }
    }
}
