use rr_core::CoreError;
use rr_sim::SimError;
use rr_surface::SurfaceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request is not well formatted:\n{0}")]
    Malformed(String),

    #[error("'{0}' is not a valid integer")]
    InvalidNumber(String),

    #[error(transparent)]
    Symbol(#[from] CoreError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type RequestResult<T> = Result<T, RequestError>;
