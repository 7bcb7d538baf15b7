//! # Minimax Tic-Tac-Toe
//!
//! Game-playing agents for two adversarial tic-tac-toe variants — a 4x4
//! board and a 4x4x4 cube — built on depth-limited minimax search with
//! alpha-beta pruning and heuristic static evaluators. One search engine
//! serves both boards through a state-provider trait; the evaluators fold
//! over each board's win-line enumeration.
//!
//! ## Modules
//!
//! - [`game`] — Boards, players, and immutable game states
//! - [`ai`] — Agent trait, search engine, static evaluators
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`ui`] — Terminal UI for playing against the agent

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
