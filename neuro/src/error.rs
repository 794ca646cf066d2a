use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::initialization::RandErr;

/// The result type used in the entire neuro module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The neuro module's error type.
#[derive(Debug)]
pub enum MlErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    EmptyOutput {
        sample: usize,
    },
    InvalidLearningRate(f32),
    InvalidTargetError(f32),
    ParamGenExhausted {
        got: usize,
        expected: usize,
    },
    Rand(RandErr),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => {
                format!(
                    "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
                )
            }
            MlErr::IndexOutOfBounds { index, len } => {
                format!("Weight index {index} is out of bounds for a neuron with {len} inputs")
            }
            MlErr::EmptyOutput { sample } => {
                format!("The desired output of sample {sample} is empty")
            }
            MlErr::InvalidLearningRate(lr) => {
                format!("The learning rate must be finite and non negative, got {lr}")
            }
            MlErr::InvalidTargetError(e) => {
                format!("The target error must be non negative, got {e}")
            }
            MlErr::ParamGenExhausted { got, expected } => format!(
                "The parameter generator ran out of values, it gave {got} of the expected {expected}"
            ),
            MlErr::Rand(e) => format!("Invalid random distribution: {e}"),
        };

        write!(f, "{s}")
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Rand(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RandErr> for MlErr {
    fn from(value: RandErr) -> Self {
        Self::Rand(value)
    }
}
