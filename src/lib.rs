//! Flowstep: an index-based finite state machine for multi-step UI flows
//!
//! Flowstep drives closed step progressions — wizards, verification
//! sequences, confirmation dialogs — with a single owned integer index over
//! a fixed, named state vocabulary. It performs no I/O and assumes no UI
//! framework; any renderer observes changes by registering a listener.
//!
//! # Core Concepts
//!
//! - **Vocabulary**: the ordered list of state names fixed at construction
//! - **Clamping**: out-of-range proposals saturate at the boundaries
//!   instead of failing, so over-advancing past the last step is a no-op
//! - **Routers**: pluggable strategies computing the proposed next index
//! - **Listeners**: callbacks fired exactly once per effective change
//! - **Dispatch**: `match_state` maps the current state to a result value
//!
//! # Example
//!
//! ```rust
//! use flowstep::{Case, LinearDecrease, StateMachine};
//!
//! let mut machine = StateMachine::new(["Email", "Code", "Details", "Done"])?;
//!
//! machine.subscribe(|previous, new| {
//!     println!("step {previous} -> {new}");
//! });
//!
//! machine.next()?; // Email -> Code
//! machine.next_with(&LinearDecrease)?; // back to Email
//! machine.next()?;
//! machine.next()?;
//! machine.next()?; // Done
//! machine.next()?; // saturates at Done, nobody is notified
//!
//! let label = machine.match_state([
//!     Case::on(3, || "all set"),
//!     Case::fallback(|| "in progress"),
//! ]);
//! assert_eq!(label, Some("all set"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod macros;

// Re-export commonly used types
pub use core::{
    Case, InitializationError, InvalidStateError, LinearDecrease, LinearIncrease, ListenerId,
    Router, StateChangeListener, StateMachine,
};
