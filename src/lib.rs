//! Undofsm: a small finite state machine engine with undo/redo history
//!
//! A machine is described once by a [`Config`]: an initial state and, for
//! every declared state, the events it reacts to and where each one leads.
//! The [`Fsm`] engine then tracks the current state, moves between states
//! directly or by triggering events, and keeps a linear history that can be
//! walked with undo and redo.
//!
//! # Core Concepts
//!
//! - **Config**: Immutable description of states and event transitions
//! - **History**: Stack of visited states plus a redo basket
//! - **Fsm**: The engine tying the two together
//!
//! Configurations are not validated unless asked for with [`Fsm::strict`];
//! undeclared states surface as errors at the point of use.
//!
//! # Example
//!
//! ```rust
//! use undofsm::{fsm_config, Fsm, FsmError};
//!
//! let config = fsm_config! {
//!     initial: off,
//!     off { toggle => on },
//!     on { toggle => off },
//! };
//!
//! let mut fsm = Fsm::new(config);
//! fsm.trigger("toggle")?;
//! assert_eq!(fsm.state(), "on");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "off");
//!
//! assert_eq!(fsm.states(Some("toggle")), vec!["off", "on"]);
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{Config, ConfigError, StateConfig, StateHistory};
pub use engine::{Fsm, FsmError};
