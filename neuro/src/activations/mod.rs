mod act_fn;
mod bipolar_sigmoid;
mod sigmoid;
mod threshold;

pub use act_fn::ActFn;
pub use bipolar_sigmoid::BipolarSigmoid;
pub use sigmoid::Sigmoid;
pub use threshold::Threshold;
