use crate::core::ConfigProvider;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_finite_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub rectangle: RectangleConfig,
    pub dog: DogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleConfig {
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogConfig {
    pub name: String,
    pub age: u32,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOG_NAME});未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn length(&self) -> f64 {
        self.rectangle.length
    }

    fn width(&self) -> f64 {
        self.rectangle.width
    }

    fn dog_name(&self) -> &str {
        &self.dog.name
    }

    fn dog_age(&self) -> u32 {
        self.dog.age
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_finite_number("rectangle.length", self.rectangle.length)?;
        validate_finite_number("rectangle.width", self.rectangle.width)?;
        Ok(())
    }
}
