//! Agents and the search core: the `Agent` trait, the depth-limited
//! minimax/alpha-beta engine, static evaluators, and a random baseline.

mod agent;
mod heuristics;
mod random;
mod search;

pub use agent::Agent;
pub use heuristics::{
    CountHeuristic, Heuristic, LinePowerHeuristic, LineSource, OpenLineHeuristic, ThreatHeuristic,
};
pub use random::RandomAgent;
pub use search::{MinimaxAgent, Position, SearchOutcome, Strategy};
