use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopScorer {
    pub name: String,
    pub team: String,
    pub goals: u16,
    pub logo: String,
    pub photo: Option<String>,
}

impl TopScorer {
    /// "Erling Haaland" -> "EH"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|e| e.chars().next())
            .collect()
    }
}
