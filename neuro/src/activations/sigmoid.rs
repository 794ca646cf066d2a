/// The default steepness of the sigmoid functions.
pub const DEFAULT_ALPHA: f32 = 2.;

/// Logistic sigmoid with a configurable steepness, its image is `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sigmoid {
    alpha: f32,
}

impl Sigmoid {
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn f(&self, z: f32) -> f32 {
        1. / (1. + (-self.alpha * z).exp())
    }

    pub fn df(&self, z: f32) -> f32 {
        let y = self.f(z);
        self.alpha * y * (1. - y)
    }
}

impl Default for Sigmoid {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_at_one_half() {
        let sigmoid = Sigmoid::default();
        assert_eq!(sigmoid.f(0.), 0.5);
        assert_eq!(sigmoid.df(0.), 0.5);
    }

    #[test]
    fn saturates() {
        let sigmoid = Sigmoid::new(1.);
        assert!(sigmoid.f(20.) > 0.999);
        assert!(sigmoid.f(-20.) < 0.001);
        assert!(sigmoid.df(20.) < 0.001);
    }
}
