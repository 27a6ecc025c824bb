//! The state machine: a single authoritative index over a named vocabulary.

use crate::core::error::{InitializationError, InvalidStateError};
use crate::core::router::{LinearIncrease, Router};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// Handle returned by [`StateMachine::subscribe`], used to unsubscribe.
///
/// Ids increase monotonically over a machine's lifetime and are never
/// reused, even after the listener they named has been removed.
pub type ListenerId = u64;

/// Callback invoked on every effective state change with
/// `(previous, new)` indices.
pub type StateChangeListener = Box<dyn FnMut(usize, usize)>;

/// A finite state machine over a fixed, ordered vocabulary of named states.
///
/// The machine owns one authoritative index into its vocabulary, mediates
/// every transition, and notifies registered listeners exactly once per
/// *effective* (value-changing) transition. It is the driver behind
/// multi-step UI flows: wizard screens, verification sequences, and other
/// closed step progressions.
///
/// Out-of-range proposals saturate at the boundaries rather than failing,
/// so "advance past the last step" is a harmless no-op — the behavior a
/// next-button wants.
///
/// # Example
///
/// ```rust
/// use flowstep::StateMachine;
///
/// let mut machine = StateMachine::new(["Email", "Code", "Details", "Done"]).unwrap();
/// assert_eq!(machine.state(), 0);
///
/// let id = machine.subscribe(|previous, new| {
///     println!("step {previous} -> {new}");
/// });
///
/// machine.next().unwrap(); // Email -> Code
/// machine.next().unwrap(); // Code -> Details
/// assert_eq!(machine.state(), machine.index_of("Details").unwrap());
///
/// machine.unsubscribe(id);
/// ```
pub struct StateMachine {
    states: Vec<String>,
    enum_map: HashMap<String, usize>,
    current: usize,
    next_listener_id: ListenerId,
    listeners: BTreeMap<ListenerId, StateChangeListener>,
}

impl StateMachine {
    /// Create a machine over `states`, starting at index 0.
    ///
    /// The vocabulary is fixed for the machine's lifetime. Names should be
    /// unique for the enum map to be meaningful; a duplicated name maps to
    /// its last position.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError`] when `states` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstep::{InitializationError, StateMachine};
    ///
    /// let machine = StateMachine::new(["Draft", "Review", "Published"]).unwrap();
    /// assert_eq!(machine.len(), 3);
    ///
    /// let empty: [&str; 0] = [];
    /// assert_eq!(StateMachine::new(empty).unwrap_err(), InitializationError);
    /// ```
    pub fn new<I, S>(states: I) -> Result<Self, InitializationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let states: Vec<String> = states.into_iter().map(Into::into).collect();
        if states.is_empty() {
            return Err(InitializationError);
        }

        let enum_map = states
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();

        debug!(states = states.len(), "state machine created");

        Ok(Self {
            states,
            enum_map,
            current: 0,
            next_listener_id: 0,
            listeners: BTreeMap::new(),
        })
    }

    /// Current state index. Always within `[0, len - 1]`.
    pub fn state(&self) -> usize {
        self.current
    }

    /// Propose a new state index.
    ///
    /// Proposals are taken as `f64` because the boundary contract is
    /// asymmetric: a proposal past either end of the vocabulary saturates
    /// silently, while an in-range *fractional* proposal is a programming
    /// error and is rejected. UI callers that compute indices arithmetically
    /// rely on the saturating half of this contract to over-advance safely.
    ///
    /// Listeners fire, in registration order, only when the stored value
    /// actually changes — a proposal that clamps back onto the current index
    /// notifies nobody.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] for an in-range non-integral proposal
    /// (including NaN). The machine's state is untouched in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstep::StateMachine;
    ///
    /// let mut machine = StateMachine::new(["A", "B", "C"]).unwrap();
    ///
    /// machine.set_state(99.0).unwrap();
    /// assert_eq!(machine.state(), 2); // clamped to the last state
    ///
    /// machine.set_state(-4.0).unwrap();
    /// assert_eq!(machine.state(), 0); // clamped to the first state
    ///
    /// assert!(machine.set_state(1.5).is_err());
    /// assert_eq!(machine.state(), 0); // rejection leaves state alone
    /// ```
    pub fn set_state(&mut self, proposed: f64) -> Result<(), InvalidStateError> {
        // Bounds are checked before integrality: an out-of-range fractional
        // proposal clamps silently instead of erroring.
        if proposed >= self.states.len() as f64 {
            trace!(proposed, clamped = self.states.len() - 1, "proposal clamped high");
            return self.set_state((self.states.len() - 1) as f64);
        }

        if proposed < 0.0 {
            trace!(proposed, clamped = 0, "proposal clamped low");
            return self.set_state(0.0);
        }

        // NaN also lands here: NaN.fract() != 0.0 holds.
        if proposed.fract() != 0.0 {
            debug!(proposed, "rejected non-integral state proposal");
            return Err(InvalidStateError { proposed });
        }

        let new = proposed as usize;
        let previous = self.current;
        self.current = new;

        if previous != new {
            trace!(previous, new, "state changed");
            self.notify(previous, new);
        }

        Ok(())
    }

    /// Advance using the default [`LinearIncrease`] router.
    ///
    /// At the last state this is a saturating no-op: the proposal clamps
    /// back onto the current index and no listener fires.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if the proposal is in range but
    /// non-integral; impossible for the default router.
    pub fn next(&mut self) -> Result<(), InvalidStateError> {
        self.next_with(&LinearIncrease)
    }

    /// Transition using `router` to compute the proposed index.
    ///
    /// This is the only operation that consults a router; direct
    /// [`set_state`](Self::set_state) calls bypass routing entirely. The
    /// proposal goes through the full `set_state` rules, so routers are
    /// free to overshoot the boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] when the router proposes an in-range
    /// non-integral index.
    pub fn next_with<R>(&mut self, router: &R) -> Result<(), InvalidStateError>
    where
        R: Router + ?Sized,
    {
        self.set_state(router.state_for(self.current))
    }

    /// Register a listener called on every effective state change.
    ///
    /// Listeners receive `(previous, new)` and are invoked synchronously,
    /// in registration order, during the `set_state` call that changed the
    /// state. The returned id unsubscribes; ids are never reused.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(usize, usize) + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.insert(id, Box::new(listener));
        trace!(id, listeners = self.listeners.len(), "listener subscribed");
        id
    }

    /// Remove a previously subscribed listener.
    ///
    /// Unknown or already-removed ids are an idempotent no-op.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        if self.listeners.remove(&id).is_some() {
            trace!(id, listeners = self.listeners.len(), "listener unsubscribed");
        }
    }

    /// The name → index map over the vocabulary, built at construction.
    pub fn enum_map(&self) -> &HashMap<String, usize> {
        &self.enum_map
    }

    /// Index of `name` in the vocabulary, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.enum_map.get(name).copied()
    }

    /// Name at `index`, if within bounds.
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.states.get(index).map(String::as_str)
    }

    /// The ordered state vocabulary.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Number of states in the vocabulary.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: construction rejects empty vocabularies.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, previous: usize, new: usize) {
        // BTreeMap iterates in id order, which is registration order
        // because ids only ever increase.
        for listener in self.listeners.values_mut() {
            listener(previous, new);
        }
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("states", &self.states)
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
