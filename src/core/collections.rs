use crate::core::{Practice, Result, Section};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Write;

pub fn starting_grades() -> HashMap<String, i32> {
    HashMap::from([
        ("Zhang San".to_string(), 85),
        ("Li Si".to_string(), 92),
        ("Wang Wu".to_string(), 78),
    ])
}

pub struct CollectionsPractice;

#[async_trait]
impl Practice for CollectionsPractice {
    fn section(&self) -> Section {
        Section::Collections
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let mut numbers = vec![1, 2, 3, 4, 5];
        writeln!(out, "Original: {:?}", numbers)?;

        numbers.extend([6, 7, 8]);
        writeln!(out, "After push: {:?}", numbers)?;
        writeln!(out, "numbers[2..5]: {:?}", &numbers[2..5])?;

        // HashMap iteration order differs between runs.
        let mut grades = starting_grades();
        writeln!(out, "Student grades:")?;
        for (name, grade) in &grades {
            writeln!(out, "  {}: {}", name, grade)?;
        }

        grades.insert("Zhao Liu".to_string(), 88);
        writeln!(out, "Grades after adding a student: {:?}", grades)?;

        tracing::debug!(students = grades.len(), "collections built");
        Ok(())
    }
}
