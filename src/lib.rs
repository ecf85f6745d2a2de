//! # Connect Four Engine
//!
//! A Connect Four engine for a human-vs-computer game: an immutable 6x7
//! board, win detection, a window-based heuristic and a minimax search with
//! alpha-beta pruning across three difficulty tiers.
//!
//! ## Modules
//!
//! - [`game`]: Board model, move executor, win detector, score calculator
//!   and the controller-side game state machine
//! - [`ai`]: Heuristic evaluator, minimax search engine, agents
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
