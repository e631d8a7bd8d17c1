pub mod evaluate;
pub mod init;
pub mod optimize;

pub use evaluate::{handle_evaluate, EvaluationOutcome};
pub use optimize::{handle_optimize, OptimizeConfig, OptimizeOutcome};
