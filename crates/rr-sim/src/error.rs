use rr_surface::SurfaceError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("simulation has already finished")]
    AlreadyFinished,
}

pub type SimResult<T> = Result<T, SimError>;
