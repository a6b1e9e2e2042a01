use crate::domain::model::Section;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// Anything that can report its area and perimeter.
pub trait Shape: Send + Sync {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

pub trait SettingsProvider: Send + Sync {
    fn sections(&self) -> Vec<Section>;
    fn workers(&self) -> usize;
    fn jobs(&self) -> u64;
    fn job_delay_ms(&self) -> u64;
    fn queue_capacity(&self) -> usize;
}

#[async_trait]
pub trait Practice: Send + Sync {
    fn section(&self) -> Section;
    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()>;
}
