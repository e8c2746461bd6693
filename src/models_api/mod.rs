pub mod standings;
pub mod fixture;
pub mod top_scorer;
pub mod news;
pub mod social;
pub mod dashboard;
