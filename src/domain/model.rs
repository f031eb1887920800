use serde::{Deserialize, Serialize};

/// A dog with a name and an age. Construction performs no validation;
/// an empty name or an age of zero is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub age: u32,
}

impl Dog {
    /// Shared across all instances; never stored per-object.
    pub const SPECIES: &'static str = "Canis lupus familiaris";

    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn species(&self) -> &'static str {
        Self::SPECIES
    }

    pub fn bark(&self) -> String {
        format!("{} says woof!", self.name)
    }
}
