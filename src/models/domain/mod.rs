pub mod caller;
pub mod quiz;
pub mod stats;

pub use caller::Caller;
pub use quiz::{Question, Quiz, Visibility};
pub use stats::GlobalStats;
