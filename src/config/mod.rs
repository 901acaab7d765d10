pub mod cli;
pub mod scenario;

pub use cli::CliConfig;
pub use scenario::ScenarioConfig;
