//! # Command Core
//!
//! The command interpreter for MedSchoolRPG. It reads player input, matches it
//! against a closed vocabulary and applies the result to a `game_state::GameState`.
//!
//! ## Core Components
//!
//! - **commands**: The vocabulary and input normalization
//! - **interpreter**: Dispatch table, command framing and handlers
//! - **shared**: A lock-guarded session for multi-threaded hosts
//!
//! The interpreter never renders anything. All output goes to the state's
//! history log, which a front-end reads after each call.

pub mod commands;
pub mod interpreter;
pub mod shared;

pub use commands::*;
pub use interpreter::*;
pub use shared::*;
