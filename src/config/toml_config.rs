use crate::utils::error::{Result, SaltError};
use crate::utils::validation::{validate_non_empty_string, validate_positive, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub calculator: Option<CalculatorConfig>,
    pub session: Option<SessionConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub default_target_sodium_per_lb_mg: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub show_demo: Option<bool>,
    pub show_tips: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| SaltError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SaltError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BBQ_TARGET})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SaltError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn default_target_mg(&self) -> Option<f64> {
        self.calculator
            .as_ref()
            .and_then(|c| c.default_target_sodium_per_lb_mg)
    }

    pub fn show_demo(&self) -> Option<bool> {
        self.session.as_ref().and_then(|s| s.show_demo)
    }

    pub fn show_tips(&self) -> Option<bool> {
        self.session.as_ref().and_then(|s| s.show_tips)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(target) = self.default_target_mg() {
            validate_positive("calculator.default_target_sodium_per_lb_mg", target).map_err(
                |e| SaltError::ConfigValidationError {
                    field: "calculator.default_target_sodium_per_lb_mg".to_string(),
                    message: e.to_string(),
                },
            )?;
        }

        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[calculator]
default_target_sodium_per_lb_mg = 800

[session]
show_demo = false
show_tips = true

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.default_target_mg(), Some(800.0));
        assert_eq!(config.show_demo(), Some(false));
        assert_eq!(config.show_tips(), Some(true));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.default_target_mg(), None);
        assert_eq!(config.show_demo(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BBQ_SALT_TEST_TARGET", "1200");

        let toml_content = r#"
[calculator]
default_target_sodium_per_lb_mg = ${BBQ_SALT_TEST_TARGET}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_target_mg(), Some(1200.0));

        std::env::remove_var("BBQ_SALT_TEST_TARGET");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[calculator]
default_target_sodium_per_lb_mg = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SaltError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[calculator\nbroken");
        assert!(matches!(
            result,
            Err(SaltError::ConfigValidationError { ref field, .. }) if field == "toml_parsing"
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[session]\nshow_tips = false").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.show_tips(), Some(false));
    }

    #[test]
    fn test_missing_file() {
        let result = TomlConfig::from_file("/definitely/not/here/bbq-salt.toml");
        assert!(matches!(result, Err(SaltError::ConfigError { .. })));
    }
}
