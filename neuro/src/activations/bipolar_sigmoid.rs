use super::sigmoid::DEFAULT_ALPHA;

/// Sigmoid rescaled to the `(-1, 1)` range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BipolarSigmoid {
    alpha: f32,
}

impl BipolarSigmoid {
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn f(&self, z: f32) -> f32 {
        2. / (1. + (-self.alpha * z).exp()) - 1.
    }

    pub fn df(&self, z: f32) -> f32 {
        let y = self.f(z);
        self.alpha * (1. - y * y) / 2.
    }
}

impl Default for BipolarSigmoid {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}
