use crate::core::{Practice, Result, Section};
use async_trait::async_trait;
use std::io::Write;

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Quotient and remainder in one call.
///
/// # Panics
///
/// Panics if `b` is zero.
pub fn divmod(a: i64, b: i64) -> (i64, i64) {
    (a / b, a % b)
}

pub struct BasicsPractice;

#[async_trait]
impl Practice for BasicsPractice {
    fn section(&self) -> Section {
        Section::Basics
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let name: &str = "Rust learner";
        let age = 25;
        let is_learning = true;

        writeln!(
            out,
            "Name: {}, age: {}, learning: {}",
            name, age, is_learning
        )?;

        let sum = add(10, 20);
        writeln!(out, "10 + 20 = {}", sum)?;

        let (quotient, remainder) = divmod(17, 5);
        writeln!(out, "17 / 5 = {} remainder {}", quotient, remainder)?;

        tracing::debug!(sum, quotient, remainder, "basics computed");
        Ok(())
    }
}
