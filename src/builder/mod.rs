//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for assembling a
//! [`Config`](crate::core::Config) in code instead of writing out the maps.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;

use crate::core::Config;

/// Create a two-state configuration where one event flips between the states.
///
/// The first state is initial.
///
/// # Example
///
/// ```
/// use undofsm::builder::toggle;
/// use undofsm::Fsm;
///
/// let mut fsm = Fsm::new(toggle("off", "on", "toggle"));
/// fsm.trigger("toggle").unwrap();
/// assert_eq!(fsm.state(), "on");
/// ```
pub fn toggle(first: &str, second: &str, event: &str) -> Config {
    ConfigBuilder::new()
        .initial(first)
        .transition(first, event, second)
        .transition(second, event, first)
        .build()
        .expect("Toggle config always has an initial state and states")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_builds_symmetric_pair() {
        let config = toggle("off", "on", "toggle");

        assert_eq!(config.initial, "off");
        assert_eq!(config.destination("off", "toggle"), Some("on"));
        assert_eq!(config.destination("on", "toggle"), Some("off"));
    }
}
