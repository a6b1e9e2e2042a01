use crate::core::{Practice, Result, Section, Shape};
use crate::domain::model::{Circle, Rectangle};
use async_trait::async_trait;
use std::io::Write;

/// Prints area and perimeter without knowing the concrete shape.
pub fn describe_shape(out: &mut (dyn Write + Send), shape: &dyn Shape) -> Result<()> {
    writeln!(
        out,
        "area: {:.2}, perimeter: {:.2}",
        shape.area(),
        shape.perimeter()
    )?;
    Ok(())
}

pub struct StructsPractice;

#[async_trait]
impl Practice for StructsPractice {
    fn section(&self) -> Section {
        Section::Structs
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let mut circle = Circle::new(5.0);
        writeln!(out, "Circle radius: {:.1}", circle.radius)?;
        writeln!(out, "Circle area: {:.2}", circle.area())?;
        writeln!(out, "Circle circumference: {:.2}", circle.circumference())?;

        circle.scale(2.0);
        writeln!(
            out,
            "Scaled radius: {:.1}, area: {:.2}",
            circle.radius,
            circle.area()
        )?;
        Ok(())
    }
}

pub struct InterfacesPractice;

#[async_trait]
impl Practice for InterfacesPractice {
    fn section(&self) -> Section {
        Section::Interfaces
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let circle = Circle::new(3.0);
        let rectangle = Rectangle::new(4.0, 5.0);

        write!(out, "Circle - ")?;
        describe_shape(out, &circle)?;

        write!(out, "Rectangle - ")?;
        describe_shape(out, &rectangle)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_shape_dispatches_on_trait() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(1.0)),
            Box::new(Rectangle::new(4.0, 5.0)),
        ];

        let mut out = Vec::new();
        for shape in &shapes {
            describe_shape(&mut out, shape.as_ref()).unwrap();
        }
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("area: 3.14, perimeter: 6.28"));
        assert!(text.contains("area: 20.00, perimeter: 18.00"));
    }

    #[tokio::test]
    async fn test_structs_output() {
        let mut out = Vec::new();
        StructsPractice.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Circle radius: 5.0"));
        assert!(text.contains("Circle area: 78.54"));
        assert!(text.contains("Circle circumference: 31.42"));
        assert!(text.contains("Scaled radius: 10.0, area: 314.16"));
    }

    #[tokio::test]
    async fn test_interfaces_output() {
        let mut out = Vec::new();
        InterfacesPractice.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Circle - area: 28.27, perimeter: 18.85"));
        assert!(text.contains("Rectangle - area: 20.00, perimeter: 18.00"));
    }
}
