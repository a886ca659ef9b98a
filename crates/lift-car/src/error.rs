use lift_core::CarId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarError {
    #[error("{0} is not part of the fleet")]
    UnknownCar(CarId),
}

pub type CarResult<T> = Result<T, CarError>;
