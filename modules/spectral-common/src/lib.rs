pub mod types;
pub mod quality;
pub mod dedup;
pub mod gazetteer;
pub mod config;
pub mod error;

pub use types::*;
pub use quality::*;
pub use dedup::*;
pub use config::IntakeConfig;
pub use error::IntakeError;
