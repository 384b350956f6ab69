use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamName {
    pub name: String,
    pub name_pretty: String,
}

impl TeamName {
    /// From the canonical (underscored) name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            name_pretty: name.replace('_', " "),
        }
    }

    /// From the display name
    pub fn from_pretty(name_pretty: &str) -> Self {
        Self {
            name: name_pretty.replace(' ', "_"),
            name_pretty: name_pretty.to_string(),
        }
    }
}
