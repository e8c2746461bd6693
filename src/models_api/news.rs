use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub source: String,
    pub timestamp: String,
    pub image: Option<String>,
}
