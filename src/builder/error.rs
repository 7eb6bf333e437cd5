//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Call .state(id) or .transition(from, event, to)")]
    NoStates,
}
