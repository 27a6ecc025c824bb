//! Pluggable transition strategies.
//!
//! A router computes a *proposed* next index from the current one. Routers
//! are pure and stateless; they never clamp. Boundary handling (saturating
//! at the first or last state) belongs entirely to
//! [`StateMachine::set_state`](crate::StateMachine::set_state), which lets a
//! single router implementation work for vocabularies of any length.

/// Strategy for computing the next state index.
///
/// The contract is a total function from the current index to a proposed
/// index. Proposals may land anywhere — past either boundary, or even on a
/// fractional value — the consuming machine applies its clamping and
/// validation rules to whatever comes back.
///
/// Any `Fn(usize) -> f64` closure is a router, so custom strategies rarely
/// need a named type:
///
/// ```rust
/// use flowstep::StateMachine;
///
/// let mut machine = StateMachine::new(["Red", "Yellow", "Green"]).unwrap();
///
/// // Cycle: Red -> Yellow -> Green -> Red -> ...
/// let cyclic = |current: usize| ((current + 1) % 3) as f64;
///
/// machine.next_with(&cyclic).unwrap();
/// machine.next_with(&cyclic).unwrap();
/// machine.next_with(&cyclic).unwrap();
/// assert_eq!(machine.state(), 0);
/// ```
pub trait Router {
    /// Compute the proposed next index for `current`.
    fn state_for(&self, current: usize) -> f64;
}

impl<F> Router for F
where
    F: Fn(usize) -> f64,
{
    fn state_for(&self, current: usize) -> f64 {
        self(current)
    }
}

/// Built-in router that always proposes the next consecutive index.
///
/// Proposing past the last state is fine: the machine clamps, so driving
/// `next` at the final step saturates instead of failing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearIncrease;

impl Router for LinearIncrease {
    fn state_for(&self, current: usize) -> f64 {
        current as f64 + 1.0
    }
}

/// Built-in router that always proposes the previous consecutive index.
///
/// Proposing below the first state is fine: the machine clamps to zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearDecrease;

impl Router for LinearDecrease {
    fn state_for(&self, current: usize) -> f64 {
        current as f64 - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_increase_proposes_successor() {
        assert_eq!(LinearIncrease.state_for(0), 1.0);
        assert_eq!(LinearIncrease.state_for(7), 8.0);
    }

    #[test]
    fn linear_decrease_proposes_predecessor() {
        assert_eq!(LinearDecrease.state_for(3), 2.0);
        // Underflow is the machine's problem, not the router's.
        assert_eq!(LinearDecrease.state_for(0), -1.0);
    }

    #[test]
    fn closures_are_routers() {
        let skip_two = |current: usize| current as f64 + 2.0;
        assert_eq!(skip_two.state_for(1), 3.0);
    }

    #[test]
    fn routers_are_pure() {
        let router = LinearIncrease;
        assert_eq!(router.state_for(4), router.state_for(4));
    }
}
