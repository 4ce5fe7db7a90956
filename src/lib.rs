pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::TerminalConsole;
pub use crate::config::{AppSettings, CliConfig};
pub use crate::core::calculator::{compute, compute_additional_salt};
pub use crate::core::session::{run_interactive, SessionOutcome};
pub use crate::domain::model::{SaltInputs, SaltResult};
pub use crate::utils::error::{Result, SaltError};
