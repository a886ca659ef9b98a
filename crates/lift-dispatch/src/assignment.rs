use std::fmt;

use lift_core::{CarId, Floor};

/// The dispatcher's decision for one pending floor: send `car` to `floor`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub car:   CarId,
    pub floor: Floor,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.car, self.floor)
    }
}
