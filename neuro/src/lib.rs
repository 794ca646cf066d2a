pub mod activations;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod learning;
pub mod neuron;
pub mod specs;
pub mod training;

pub use error::{MlErr, Result};
