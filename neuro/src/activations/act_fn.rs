use super::{BipolarSigmoid, Sigmoid, Threshold};

/// The activation function of a neuron.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActFn {
    Linear,
    Threshold(Threshold),
    Sigmoid(Sigmoid),
    BipolarSigmoid(BipolarSigmoid),
}

impl ActFn {
    pub fn linear() -> Self {
        Self::Linear
    }

    pub fn threshold() -> Self {
        Self::Threshold(Threshold::new())
    }

    pub fn sigmoid(alpha: f32) -> Self {
        Self::Sigmoid(Sigmoid::new(alpha))
    }

    pub fn bipolar_sigmoid(alpha: f32) -> Self {
        Self::BipolarSigmoid(BipolarSigmoid::new(alpha))
    }

    pub fn f(&self, z: f32) -> f32 {
        match self {
            Self::Linear => z,
            Self::Threshold(a) => a.f(z),
            Self::Sigmoid(a) => a.f(z),
            Self::BipolarSigmoid(a) => a.f(z),
        }
    }

    pub fn df(&self, z: f32) -> f32 {
        match self {
            Self::Linear => 1.,
            Self::Threshold(a) => a.df(z),
            Self::Sigmoid(a) => a.df(z),
            Self::BipolarSigmoid(a) => a.df(z),
        }
    }
}
