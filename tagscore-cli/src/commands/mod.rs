//! CLI command implementations

pub mod score;

pub use score::ScoreArgs;
