pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_number, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-demo")]
#[command(about = "A small demo: rectangle area calculation and a barking dog")]
pub struct CliConfig {
    #[arg(long, default_value = "10.5")]
    pub length: f64,

    #[arg(long, default_value = "4")]
    pub width: f64,

    #[arg(long, default_value = "Rex")]
    pub dog_name: String,

    #[arg(long, default_value = "5")]
    pub dog_age: u32,

    #[arg(long, help = "Load the scenario from a TOML file instead")]
    pub config: Option<String>,

    #[arg(long, help = "Emit the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn length(&self) -> f64 {
        self.length
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn dog_name(&self) -> &str {
        &self.dog_name
    }

    fn dog_age(&self) -> u32 {
        self.dog_age
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 正數檢查屬於 calculate_area,這裡只擋掉非有限值
        validate_finite_number("length", self.length)?;
        validate_finite_number("width", self.width)?;

        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig {
            length: 10.5,
            width: 4.0,
            dog_name: "Rex".to_string(),
            dog_age: 5,
            config: None,
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(default_config().validate().is_ok());
    }

    #[test]
    fn test_negative_dimension_passes_config_validation() {
        // 留給 calculate_area 負責
        let config = CliConfig {
            length: -3.0,
            ..default_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nan_dimension_fails_config_validation() {
        let config = CliConfig {
            width: f64::NAN,
            ..default_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_config_path_fails_validation() {
        let config = CliConfig {
            config: Some(String::new()),
            ..default_config()
        };
        assert!(config.validate().is_err());
    }
}
