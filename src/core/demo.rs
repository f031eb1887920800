use crate::core::area::{calculate_area, format_area};
use crate::core::ConfigProvider;
use crate::domain::model::Dog;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Result of one demonstration run: the computed area and the dog's greeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoReport {
    pub area: f64,
    pub greeting: String,
}

impl DemoReport {
    /// The two lines the demonstration writes to standard output.
    pub fn render_lines(&self) -> Vec<String> {
        vec![
            format!("The area is: {}", format_area(self.area)),
            self.greeting.clone(),
        ]
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct DemoEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> DemoEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Runs the demonstration: compute the rectangle area, then build the
    /// dog and collect its greeting. An area validation failure aborts the
    /// run before the dog is constructed.
    pub fn run(&self) -> Result<DemoReport> {
        tracing::info!(
            "📐 Computing area for {} x {}",
            self.config.length(),
            self.config.width()
        );
        let area = calculate_area(self.config.length(), self.config.width())?;
        tracing::debug!("Area computed: {}", area);

        let dog = Dog::new(self.config.dog_name(), self.config.dog_age());
        tracing::info!("🐕 Created dog '{}' (age {})", dog.name, dog.age);

        Ok(DemoReport {
            area,
            greeting: dog.bark(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DemoError;

    struct FixedConfig {
        length: f64,
        width: f64,
        dog_name: String,
        dog_age: u32,
    }

    impl ConfigProvider for FixedConfig {
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

    fn rex_config(length: f64, width: f64) -> FixedConfig {
        FixedConfig {
            length,
            width,
            dog_name: "Rex".to_string(),
            dog_age: 5,
        }
    }

    #[test]
    fn test_run_produces_report() {
        let engine = DemoEngine::new(rex_config(10.5, 4.0));
        let report = engine.run().unwrap();

        assert_eq!(report.area, 42.0);
        assert_eq!(report.greeting, "Rex says woof!");
        assert_eq!(
            report.render_lines(),
            vec!["The area is: 42.0".to_string(), "Rex says woof!".to_string()]
        );
    }

    #[test]
    fn test_run_propagates_validation_failure() {
        let engine = DemoEngine::new(rex_config(0.0, 5.0));
        let err = engine.run().unwrap_err();
        assert!(matches!(err, DemoError::InvalidArgument { .. }));
        assert_eq!(err.user_friendly_message(), "Dimensions must be positive");
    }

    #[test]
    fn test_report_json_output() {
        let engine = DemoEngine::new(rex_config(10.5, 4.0));
        let report = engine.run().unwrap();
        let json = report.to_json().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["area"], 42.0);
        assert_eq!(parsed["greeting"], "Rex says woof!");
    }
}
