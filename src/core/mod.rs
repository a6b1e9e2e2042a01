pub mod basics;
pub mod collections;
pub mod division;
pub mod runner;
pub mod shapes;
pub mod worker_pool;

pub use crate::domain::model::{Circle, JobResult, Rectangle, Section, WorkerEvent};
pub use crate::domain::ports::{Practice, SettingsProvider, Shape};
pub use crate::utils::error::Result;
