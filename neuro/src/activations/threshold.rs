/// Hard limiter: `1` when the weighted sum is non negative, `0` otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Threshold;

impl Threshold {
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, z: f32) -> f32 {
        if z >= 0. { 1. } else { 0. }
    }

    /// The step is flat everywhere it is defined.
    pub fn df(&self, _z: f32) -> f32 {
        0.
    }
}
