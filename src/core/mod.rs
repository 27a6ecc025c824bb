//! Core state machine types.
//!
//! This module contains the whole of the machine:
//! - [`StateMachine`]: the authoritative state index over a named vocabulary
//! - [`Router`] strategies for computing proposed transitions
//! - [`Case`]-based dispatch over the current state
//! - Error types for construction and invalid proposals
//!
//! Everything here is synchronous and single-owner; listeners run inline
//! during the `set_state` call that changed the state.

mod error;
mod machine;
mod matcher;
mod router;

pub use error::{InitializationError, InvalidStateError};
pub use machine::{ListenerId, StateChangeListener, StateMachine};
pub use matcher::Case;
pub use router::{LinearDecrease, LinearIncrease, Router};
