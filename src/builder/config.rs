//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{Config, EventId, StateConfig, StateId};
use indexmap::IndexMap;

/// Builder for [`Config`] with a fluent API.
///
/// `transition` declares its source state implicitly. Destinations are not
/// declared for you, so a typo in a target only shows up when the machine
/// reaches it (or at [`crate::Fsm::strict`]).
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: IndexMap<StateId, StateConfig>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state without adding transitions.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add a transition from `from` on `event` to `to`.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Config {
            initial,
            states: self.states,
        })
    }
}
