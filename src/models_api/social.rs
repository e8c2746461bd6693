use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialUser {
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub verified: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    Text,
    MatchResult,
    Transfer,
    Analysis,
    Video,
    Highlights,
}

impl PostCategory {
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            PostCategory::MatchResult => Some("🏆"),
            PostCategory::Transfer => Some("👥"),
            PostCategory::Analysis => Some("📈"),
            PostCategory::Video => Some("🎥"),
            PostCategory::Highlights => Some("⭐"),
            PostCategory::Text => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialPost {
    pub id: u32,
    pub user: SocialUser,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub category: PostCategory,
    pub team: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tweet {
    pub id: u32,
    pub user: SocialUser,
    pub content: String,
    pub timestamp: String,
}
