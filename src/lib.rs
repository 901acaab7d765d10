// Domain layer holds the capability traits (ports); core holds the demo
// variants and orchestrators, one file per principle.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, ScenarioConfig};
pub use core::runner::{run_all, run_demo, Principle};
pub use utils::error::{DemoError, Result};
