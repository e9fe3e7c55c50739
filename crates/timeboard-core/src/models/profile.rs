//! Profile shown in the dashboard header

use serde::{Deserialize, Serialize};

/// Owner of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Caption above the name
    pub description: String,
    /// Avatar image path (used by HTML export)
    pub image: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jeremy Robson".to_string(),
            description: "Report for".to_string(),
            image: "/images/image-jeremy.png".to_string(),
        }
    }
}

impl Profile {
    /// Up to two uppercase initials, used as a text avatar
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
