//! Finite state machine with event transitions and undo/redo history.

use crate::core::{Config, StateHistory};
use crate::engine::error::FsmError;
use tracing::{debug, trace};

/// Finite state machine driven by a static [`Config`].
///
/// The machine owns its configuration for its whole lifetime and tracks
/// visited states in a [`StateHistory`]. Forward moves ([`Fsm::change_state`],
/// [`Fsm::trigger`]) empty the redo basket; [`Fsm::undo`] and [`Fsm::redo`]
/// walk back and forth along the recorded path.
///
/// # Example
///
/// ```rust
/// use undofsm::core::{Config, StateConfig};
/// use undofsm::Fsm;
///
/// let config = Config::new("off")
///     .with_state("off", StateConfig::new().on("toggle", "on"))
///     .with_state("on", StateConfig::new().on("toggle", "off"));
///
/// let mut fsm = Fsm::new(config);
/// assert_eq!(fsm.state(), "off");
///
/// fsm.trigger("toggle").unwrap();
/// assert_eq!(fsm.state(), "on");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "off");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "on");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Config,
    history: StateHistory,
}

impl Fsm {
    /// Create a machine in the configuration's initial state.
    ///
    /// The configuration is not validated; undeclared states surface as
    /// errors when they are used.
    pub fn new(config: Config) -> Self {
        let history = StateHistory::new(config.initial.clone());
        Self { config, history }
    }

    /// Create a machine from an optional configuration.
    ///
    /// # Errors
    ///
    /// [`FsmError::MissingConfig`] when `config` is `None`.
    ///
    /// ```rust
    /// use undofsm::{Fsm, FsmError};
    ///
    /// assert_eq!(Fsm::create(None).unwrap_err(), FsmError::MissingConfig);
    /// ```
    pub fn create(config: Option<Config>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or(FsmError::MissingConfig)
    }

    /// Create a machine after checking that the initial state and every
    /// transition target are declared.
    ///
    /// # Errors
    ///
    /// [`FsmError::InvalidConfig`] with the first problem found.
    pub fn strict(config: Config) -> Result<Self, FsmError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Current state id.
    pub fn state(&self) -> &str {
        self.history.current()
    }

    /// Move directly to a declared state.
    ///
    /// # Errors
    ///
    /// [`FsmError::UnknownState`] when `target` is not declared. The machine
    /// is left unchanged.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(target) {
            return Err(FsmError::UnknownState {
                state: target.to_string(),
            });
        }

        debug!(from = %self.state(), to = %target, "state changed");
        self.history.push(target);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// # Errors
    ///
    /// [`FsmError::UnknownTransition`] when the current state declares no
    /// transition for `event`, including when the current state itself is
    /// undeclared. The machine is left unchanged.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let from = self.state();
        let Some(target) = self.config.destination(from, event).map(str::to_owned) else {
            return Err(FsmError::UnknownTransition {
                state: from.to_string(),
                event: event.to_string(),
            });
        };

        debug!(from = %from, to = %target, event = %event, "transition triggered");
        self.history.push(target);
        Ok(())
    }

    /// Return to the initial state. The redo basket is kept.
    pub fn reset(&mut self) {
        debug!(initial = %self.config.initial, "reset");
        self.history.rewind(self.config.initial.clone());
    }

    /// Declared state ids in declaration order.
    ///
    /// With `Some(event)`, only states declaring a transition for exactly
    /// that event are returned.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            Some(event) => self.config.states_with_event(event),
            None => self.config.state_ids().collect(),
        }
    }

    /// Events the current state has transitions for, in declaration order.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state(self.state())
            .map(|state| state.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` when already at the start of the history.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            trace!(state = %self.state(), "undo");
        }
        undone
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            trace!(state = %self.state(), "redo");
        }
        redone
    }

    /// Return to the initial state and forget everything that could be redone.
    pub fn clear_history(&mut self) {
        debug!(initial = %self.config.initial, "history cleared");
        self.history.clear(self.config.initial.clone());
    }

    /// Whether [`Fsm::undo`] would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`Fsm::redo`] would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Visited path and redo basket.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// The configuration this machine was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
