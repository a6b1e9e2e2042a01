pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TomlConfig;
pub use core::{runner::PracticeRunner, worker_pool::WorkerPool};
pub use domain::model::Section;
pub use utils::error::{PracticeError, Result};
