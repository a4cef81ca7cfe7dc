//! # Game State
//!
//! The state store for MedSchoolRPG - stamina, knowledge, the quest log and the
//! history transcript. This crate holds data only; every gameplay rule lives in
//! `command_core`, which is the single writer.

pub mod config;
pub mod quests;
pub mod state;

pub use config::*;
pub use quests::*;
pub use state::*;
