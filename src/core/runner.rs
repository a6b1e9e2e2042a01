use crate::core::basics::BasicsPractice;
use crate::core::collections::CollectionsPractice;
use crate::core::division::ErrorsPractice;
use crate::core::shapes::{InterfacesPractice, StructsPractice};
use crate::core::worker_pool::ConcurrencyPractice;
use crate::core::{Practice, Section, SettingsProvider};
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

pub struct PracticeRunner {
    practices: Vec<Box<dyn Practice>>,
}

impl PracticeRunner {
    pub fn new(practices: Vec<Box<dyn Practice>>) -> Self {
        Self { practices }
    }

    /// Builds the practices the settings ask for, always in canonical order.
    pub fn from_settings<S: SettingsProvider + ?Sized>(settings: &S) -> Self {
        let mut sections = settings.sections();
        sections.sort();
        sections.dedup();

        let practices = sections
            .into_iter()
            .map(|section| -> Box<dyn Practice> {
                match section {
                    Section::Basics => Box::new(BasicsPractice),
                    Section::Collections => Box::new(CollectionsPractice),
                    Section::Structs => Box::new(StructsPractice),
                    Section::Interfaces => Box::new(InterfacesPractice),
                    Section::Errors => Box::new(ErrorsPractice),
                    Section::Concurrency => Box::new(ConcurrencyPractice::from_settings(settings)),
                }
            })
            .collect();

        Self::new(practices)
    }

    /// Writes one line per practice: its CLI name and its title.
    pub fn write_catalog(out: &mut dyn Write) -> std::io::Result<()> {
        for section in Section::ALL {
            writeln!(out, "{:<12} {}", section.as_str(), section.title())?;
        }
        Ok(())
    }

    pub fn sections(&self) -> Vec<Section> {
        self.practices.iter().map(|p| p.section()).collect()
    }

    pub async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "🎯 Language practice program")?;
        writeln!(out, "Run each practice to check what you have learned!")?;

        for (index, practice) in self.practices.iter().enumerate() {
            let section = practice.section();
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "=== {} ===", section.title())?;

            let started = Instant::now();
            practice.run(out).await?;
            tracing::info!(
                section = section.as_str(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "practice finished"
            );
        }

        writeln!(out)?;
        writeln!(out, "🎉 All practices complete!")?;
        out.flush()?;
        Ok(())
    }
}
