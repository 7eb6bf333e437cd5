//! Core data types of the engine.
//!
//! - Machine description via [`Config`] and [`StateConfig`]
//! - Undo/redo bookkeeping via [`StateHistory`]
//!
//! Nothing in this module logs or fails except [`Config::validate`].

mod config;
mod history;

pub use config::{Config, ConfigError, EventId, StateConfig, StateId};
pub use history::StateHistory;
