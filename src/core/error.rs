//! Error types for machine construction and state proposals.

use thiserror::Error;

/// Construction was attempted with an empty state vocabulary.
///
/// This is fatal: no machine is produced. A flow with zero steps has no
/// meaningful current state, so the constructor refuses to build one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("state vocabulary cannot be empty")]
pub struct InitializationError;

/// A non-integral state index was proposed while within bounds.
///
/// Out-of-range proposals saturate at the nearest boundary and are not
/// errors; a fractional in-range proposal is a programming mistake and
/// rejects that single call, leaving the machine's state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("proposed state index {proposed} is not an integer")]
pub struct InvalidStateError {
    /// The offending proposal, as received.
    pub proposed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(
            InitializationError.to_string(),
            "state vocabulary cannot be empty"
        );
        let err = InvalidStateError { proposed: 1.5 };
        assert_eq!(err.to_string(), "proposed state index 1.5 is not an integer");
    }
}
