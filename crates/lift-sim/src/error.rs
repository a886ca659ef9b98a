use lift_car::CarError;
use lift_core::{LiftError, Tick};
use lift_dispatch::DispatchError;
use lift_riders::RiderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("initial floors length {got} does not match car count {expected}")]
    CarCountMismatch { expected: usize, got: usize },

    #[error(
        "gave up at {tick}: {waiting} riders still waiting, {aboard} aboard, \
         {pending} not yet arrived"
    )]
    TickLimit {
        tick:    Tick,
        waiting: usize,
        aboard:  u64,
        pending: usize,
    },

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("car error: {0}")]
    Car(#[from] CarError),

    #[error("rider error: {0}")]
    Riders(#[from] RiderError),

    #[error(transparent)]
    Core(#[from] LiftError),
}

pub type SimResult<T> = Result<T, SimError>;
