//! Heuristic analysis engine and rule set

pub mod engine;
pub mod rules;

pub use engine::HeuristicAnalyzer;
