use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::{NormalError, uniform::Error as UniformError};

/// The result type of the `RandParamGen` constructors.
pub type Result<T> = std::result::Result<T, RandErr>;

/// The distribution asked for a random initialization can't be sampled from.
#[derive(Debug)]
pub enum RandErr {
    Uniform(UniformError),
    Normal(NormalError),
}

impl Display for RandErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandErr::Uniform(e) => write!(f, "uniform initialization: {e}"),
            RandErr::Normal(e) => write!(f, "normal initialization: {e}"),
        }
    }
}

impl Error for RandErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RandErr::Uniform(e) => Some(e),
            RandErr::Normal(e) => Some(e),
        }
    }
}

impl From<UniformError> for RandErr {
    fn from(value: UniformError) -> Self {
        Self::Uniform(value)
    }
}

impl From<NormalError> for RandErr {
    fn from(value: NormalError) -> Self {
        Self::Normal(value)
    }
}
