pub mod envelope;
pub mod standings;
pub mod fixture;
pub mod top_scorer;
