//! Static machine description: states and their event transitions.
//!
//! A [`Config`] is handed to the engine once and never mutated afterwards.
//! Lookups are explicit map queries returning `Option`, so a missing state
//! or event is always visible at the call site.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a state.
pub type StateId = String;

/// Identifier of an event.
pub type EventId = String;

/// Problems found by [`Config::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Initial state '{0}' is not declared")]
    UnknownInitialState(StateId),

    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    UnknownTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}

/// Outgoing transitions of a single state.
///
/// # Example
///
/// ```rust
/// use undofsm::core::StateConfig;
///
/// let off = StateConfig::new().on("toggle", "on");
///
/// assert_eq!(off.destination("toggle"), Some("on"));
/// assert!(off.destination("missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Event id -> destination state id, in declaration order
    #[serde(default)]
    pub transitions: IndexMap<EventId, StateId>,
}

impl StateConfig {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition taken on `event`, replacing any earlier one for the same event.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Destination reached by `event`, if this state declares it.
    pub fn destination(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state declares a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Complete machine description.
///
/// Serializes to the shape
/// `{ "initial": .., "states": { <id>: { "transitions": { <event>: <id> } } } }`.
///
/// # Example
///
/// ```rust
/// use undofsm::core::{Config, StateConfig};
///
/// let config = Config::new("off")
///     .with_state("off", StateConfig::new().on("toggle", "on"))
///     .with_state("on", StateConfig::new().on("toggle", "off"));
///
/// assert!(config.contains_state("on"));
/// assert_eq!(config.destination("on", "toggle"), Some("off"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// State the machine starts in
    pub initial: StateId,
    /// Declared states, enumerated in declaration order
    #[serde(default)]
    pub states: IndexMap<StateId, StateConfig>,
}

impl Config {
    /// Create a configuration with only an initial state id and no declared states.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Declare a state, replacing any earlier declaration with the same id.
    ///
    /// A replaced state keeps its original position.
    pub fn with_state(mut self, id: impl Into<StateId>, state: StateConfig) -> Self {
        self.states.insert(id.into(), state);
        self
    }

    /// Whether `id` is a declared state.
    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Descriptor of a declared state.
    pub fn state(&self, id: &str) -> Option<&StateConfig> {
        self.states.get(id)
    }

    /// Destination of `event` taken from `state`.
    ///
    /// Returns `None` both when `state` is undeclared and when it has no
    /// transition for `event`.
    pub fn destination(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state)?.destination(event)
    }

    /// All declared state ids, in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Ids of states declaring a transition for `event`, in declaration order.
    pub fn states_with_event(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, state)| state.handles(event))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Check that the initial state and every transition target are declared.
    ///
    /// The engine never calls this on its own; see [`crate::Fsm::strict`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.contains_state(&self.initial) {
            return Err(ConfigError::UnknownInitialState(self.initial.clone()));
        }

        for (id, state) in &self.states {
            for (event, target) in &state.transitions {
                if !self.contains_state(target) {
                    return Err(ConfigError::UnknownTarget {
                        state: id.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_config() -> Config {
        Config::new("off")
            .with_state("off", StateConfig::new().on("toggle", "on"))
            .with_state("on", StateConfig::new().on("toggle", "off").on("break", "broken"))
    }

    #[test]
    fn destination_follows_declared_transition() {
        let config = toggle_config();

        assert_eq!(config.destination("off", "toggle"), Some("on"));
        assert_eq!(config.destination("on", "toggle"), Some("off"));
    }

    #[test]
    fn destination_is_none_for_missing_event_or_state() {
        let config = toggle_config();

        assert!(config.destination("off", "break").is_none());
        assert!(config.destination("nowhere", "toggle").is_none());
    }

    #[test]
    fn state_ids_are_in_declaration_order() {
        let config = Config::new("b")
            .with_state("c", StateConfig::new())
            .with_state("a", StateConfig::new())
            .with_state("b", StateConfig::new());

        let ids: Vec<_> = config.state_ids().collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn redeclared_state_keeps_its_position() {
        let config = Config::new("z")
            .with_state("z", StateConfig::new())
            .with_state("a", StateConfig::new())
            .with_state("z", StateConfig::new().on("go", "a"));

        let ids: Vec<_> = config.state_ids().collect();
        assert_eq!(ids, vec!["z", "a"]);
        assert_eq!(config.destination("z", "go"), Some("a"));
    }

    #[test]
    fn deserialized_states_keep_document_order() {
        let json = r#"{
            "initial": "idle",
            "states": {
                "idle": { "transitions": { "start": "busy", "abort": "idle" } },
                "busy": { "transitions": { "finish": "idle" } }
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.state_ids().collect::<Vec<_>>(), vec!["idle", "busy"]);
        let events: Vec<_> = config.state("idle").unwrap().transitions.keys().collect();
        assert_eq!(events, vec!["start", "abort"]);
    }

    #[test]
    fn states_with_event_filters_by_exact_key() {
        let config = toggle_config();

        assert_eq!(config.states_with_event("toggle"), vec!["off", "on"]);
        assert_eq!(config.states_with_event("break"), vec!["on"]);
        assert!(config.states_with_event("tog").is_empty());
    }

    #[test]
    fn later_transition_replaces_earlier_one() {
        let state = StateConfig::new().on("go", "a").on("go", "b");

        assert_eq!(state.destination("go"), Some("b"));
        assert_eq!(state.transitions.len(), 1);
    }

    #[test]
    fn validate_rejects_undeclared_initial() {
        let config = Config::new("missing").with_state("off", StateConfig::new());

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownInitialState("missing".to_string()))
        );
    }

    #[test]
    fn validate_rejects_dangling_target() {
        let result = toggle_config().validate();

        assert_eq!(
            result,
            Err(ConfigError::UnknownTarget {
                state: "on".to_string(),
                event: "break".to_string(),
                target: "broken".to_string(),
            })
        );
    }

    #[test]
    fn config_deserializes_from_contract_shape() {
        let json = r#"{
            "initial": "off",
            "states": {
                "off": { "transitions": { "toggle": "on" } },
                "on": { "transitions": { "toggle": "off" } },
                "idle": {}
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.initial, "off");
        assert_eq!(config.destination("off", "toggle"), Some("on"));
        assert!(config.state("idle").unwrap().transitions.is_empty());
    }

    #[test]
    fn config_serializes_to_contract_shape() {
        let config = Config::new("off").with_state("off", StateConfig::new().on("toggle", "on"));

        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["initial"], "off");
        assert_eq!(value["states"]["off"]["transitions"]["toggle"], "on");
    }
}
