//! Visited-state history with a redo basket.
//!
//! Two stacks: the visited path, whose top is the current state, and the
//! basket of states popped by undo. The path is never empty.

use super::config::StateId;

/// Linear undo/redo history of visited states.
///
/// # Example
///
/// ```rust
/// use undofsm::core::StateHistory;
///
/// let mut history = StateHistory::new("off");
/// history.push("on");
/// assert_eq!(history.current(), "on");
///
/// assert!(history.undo());
/// assert_eq!(history.current(), "off");
/// assert!(!history.undo()); // cannot undo past the initial state
///
/// assert!(history.redo());
/// assert_eq!(history.current(), "on");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateHistory {
    path: Vec<StateId>,
    basket: Vec<StateId>,
}

impl StateHistory {
    /// Create a history holding only `initial`, with an empty basket.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            path: vec![initial.into()],
            basket: Vec::new(),
        }
    }

    /// The current state: top of the visited path.
    pub fn current(&self) -> &str {
        // path always holds at least the initial state
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Record a forward move. Empties the redo basket.
    pub fn push(&mut self, state: impl Into<StateId>) {
        self.path.push(state.into());
        self.basket.clear();
    }

    /// Move the current state into the basket.
    ///
    /// Returns `false` without changes when only one state remains.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        match self.path.pop() {
            Some(state) => {
                self.basket.push(state);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone state back onto the path.
    ///
    /// Returns `false` without changes when the basket is empty.
    pub fn redo(&mut self) -> bool {
        match self.basket.pop() {
            Some(state) => {
                self.path.push(state);
                true
            }
            None => false,
        }
    }

    /// Replace the path with `[initial]`, leaving the basket as it is.
    pub fn rewind(&mut self, initial: impl Into<StateId>) {
        self.path = vec![initial.into()];
    }

    /// Replace the path with `[initial]` and empty the basket.
    pub fn clear(&mut self, initial: impl Into<StateId>) {
        self.rewind(initial);
        self.basket.clear();
    }

    /// Whether more than the initial state is on the path.
    pub fn can_undo(&self) -> bool {
        self.path.len() > 1
    }

    /// Whether the basket holds anything to redo.
    pub fn can_redo(&self) -> bool {
        !self.basket.is_empty()
    }

    /// Visited states, oldest first. The last entry is the current state.
    pub fn path(&self) -> &[StateId] {
        &self.path
    }

    /// Undone states in push order. The last entry is restored first by redo.
    pub fn redo_basket(&self) -> &[StateId] {
        &self.basket
    }
}
