pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::Section;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lang-practice")]
#[command(about = "Runs a fixed tour of introductory language practices")]
pub struct CliConfig {
    /// Only run these practices (still in their usual order)
    #[arg(long = "section", value_enum, value_delimiter = ',')]
    pub sections: Vec<Section>,

    /// Optional TOML file with run and worker pool settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// List the available practices and exit
    #[arg(long)]
    pub list: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file if one was given and applies CLI overrides.
    pub fn resolve(&self) -> crate::Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if !self.sections.is_empty() {
            config.set_sections(self.sections.clone());
        }
        Ok(config)
    }
}
