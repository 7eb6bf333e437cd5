//! Engine error types.

use crate::core::{ConfigError, EventId, StateId};
use thiserror::Error;

/// Errors returned by [`crate::Fsm`] construction and forward moves.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// No configuration was supplied
    #[error("Configuration is not provided")]
    MissingConfig,

    /// Strict construction found an inconsistent configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Direct change to a state that is not declared
    #[error("State '{state}' does not exist")]
    UnknownState { state: StateId },

    /// Current state has no transition for the event
    #[error("Event '{event}' has no transition from state '{state}'")]
    UnknownTransition { state: StateId, event: EventId },
}
