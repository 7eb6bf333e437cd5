//! The state machine engine.
//!
//! [`Fsm`] owns a [`crate::core::Config`] and a [`crate::core::StateHistory`]
//! and moves between states either directly or by triggering events.

mod error;
mod machine;

pub use error::FsmError;
pub use machine::Fsm;
