pub mod settings;
pub mod toml_config;

pub use settings::AppSettings;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "bbq-salt"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Work out how much kosher salt to add on top of a BBQ rub")
)]
pub struct CliConfig {
    /// Optional TOML settings file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Skip the two worked examples and go straight to the calculator
    #[cfg_attr(feature = "cli", arg(long))]
    pub skip_demo: bool,

    /// Also print each result as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
}
