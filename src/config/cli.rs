use crate::core::runner::Principle;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-kata")]
#[command(about = "Runs small capability-composition demos, one per SOLID principle")]
pub struct CliConfig {
    /// Demos to run; all five in S-O-L-I-D order when omitted
    #[arg(long, value_enum, value_delimiter = ',')]
    pub demos: Vec<Principle>,

    /// Optional TOML file overriding the demo parameters
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit diagnostics as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn selected_demos(&self) -> Vec<Principle> {
        if self.demos.is_empty() {
            Principle::ALL.to_vec()
        } else {
            self.demos.clone()
        }
    }
}
