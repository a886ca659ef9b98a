use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// `step()` was called before any car reported in.  The simulation cannot
    /// make progress without at least one car.
    #[error("no cars registered with the dispatcher")]
    NoCars,
}

pub type DispatchResult<T> = Result<T, DispatchError>;
