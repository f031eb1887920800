pub mod area;
pub mod demo;

pub use crate::domain::model::Dog;
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
