use crate::core::{Practice, Result, Section};
use crate::utils::error::PracticeError;
use async_trait::async_trait;
use std::io::Write;

pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(PracticeError::DivisionByZero);
    }
    Ok(a / b)
}

pub struct ErrorsPractice;

impl ErrorsPractice {
    fn report(out: &mut (dyn Write + Send), a: f64, b: f64) -> Result<()> {
        match divide(a, b) {
            Ok(result) => writeln!(out, "{} / {} = {:.2}", a, b, result)?,
            Err(e) => {
                tracing::debug!(a, b, "division rejected: {}", e);
                writeln!(out, "Error: {}", e)?
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Practice for ErrorsPractice {
    fn section(&self) -> Section {
        Section::Errors
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        Self::report(out, 10.0, 2.0)?;
        Self::report(out, 10.0, 0.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_divide_ok() {
        let result = assert_ok!(divide(10.0, 2.0));
        assert_eq!(result, 5.0);
    }

    #[test]
    fn test_divide_by_zero_signals_failure() {
        let err = assert_err!(divide(10.0, 0.0));
        assert!(matches!(err, PracticeError::DivisionByZero));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(divide(1.0, -0.0).is_err());
    }

    #[tokio::test]
    async fn test_errors_output() {
        let mut out = Vec::new();
        ErrorsPractice.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "10 / 2 = 5.00\nError: Division by zero\n");
    }
}
