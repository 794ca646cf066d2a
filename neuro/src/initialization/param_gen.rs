/// A source of initial values for a neuron's weights and threshold.
///
/// `Neuron::init` keeps asking for the values it still lacks until it has one per input
/// plus one for the threshold, so a generator may hand them out in as many chunks as it
/// likes.
pub trait ParamGen {
    /// Returns up to `n` values, or `None` once the generator has nothing left to give.
    fn sample(&mut self, n: usize) -> Option<Vec<f32>>;
}
