pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::area::{calculate_area, format_area};
pub use crate::core::demo::{DemoEngine, DemoReport};
pub use domain::model::Dog;
pub use domain::ports::ConfigProvider;
pub use utils::error::{DemoError, Result};
