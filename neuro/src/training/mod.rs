mod builder;
mod report;
mod trainer;

pub use builder::TrainerBuilder;
pub use report::TrainReport;
pub use trainer::Trainer;
