use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::core::session::SessionOptions;
use crate::domain::model::DEFAULT_TARGET_SODIUM_PER_LB_MG;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Effective settings: CLI flags over the TOML file over built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub default_target_mg: f64,
    pub show_demo: bool,
    pub show_tips: bool,
    pub json: bool,
    pub verbose: bool,
    pub log_level: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_target_mg: DEFAULT_TARGET_SODIUM_PER_LB_MG,
            show_demo: true,
            show_tips: true,
            json: false,
            verbose: false,
            log_level: None,
        }
    }
}

impl AppSettings {
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let defaults = Self::default();
        let file_target = file.and_then(|f| f.default_target_mg());
        let file_demo = file.and_then(|f| f.show_demo());
        let file_tips = file.and_then(|f| f.show_tips());

        Self {
            default_target_mg: file_target.unwrap_or(defaults.default_target_mg),
            show_demo: !cli.skip_demo && file_demo.unwrap_or(defaults.show_demo),
            show_tips: file_tips.unwrap_or(defaults.show_tips),
            json: cli.json,
            verbose: cli.verbose,
            log_level: file.and_then(|f| f.log_level()).map(str::to_string),
        }
    }

    /// Reads and validates `--config` when given, then merges.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };
        Ok(Self::resolve(cli, file.as_ref()))
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            default_target_mg: self.default_target_mg,
            show_tips: self.show_tips,
            json: self.json,
        }
    }
}
