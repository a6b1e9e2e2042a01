use crate::domain::ports::Shape;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Multiplies the radius in place. Negative or zero factors are accepted.
    pub fn scale(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        Circle::area(self)
    }

    fn perimeter(&self) -> f64 {
        self.circumference()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// What a worker hands back for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobResult {
    pub worker_id: usize,
    pub job: u64,
    pub value: u64,
}

/// Progress reported by a worker over the pool's event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerEvent {
    Started { worker_id: usize, job: u64 },
    Finished(JobResult),
}

/// The practices in the order they always run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Basics,
    Collections,
    Structs,
    Interfaces,
    Errors,
    Concurrency,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Basics,
        Section::Collections,
        Section::Structs,
        Section::Interfaces,
        Section::Errors,
        Section::Concurrency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Basics => "basics",
            Section::Collections => "collections",
            Section::Structs => "structs",
            Section::Interfaces => "interfaces",
            Section::Errors => "errors",
            Section::Concurrency => "concurrency",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Basics => "Basics",
            Section::Collections => "Collections",
            Section::Structs => "Structs",
            Section::Interfaces => "Interfaces",
            Section::Errors => "Error Handling",
            Section::Concurrency => "Concurrency",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
