//! Macros for ergonomic flow declaration.

/// Declare a typed vocabulary enum alongside its machine.
///
/// The generated enum mirrors the machine's vocabulary: each variant's
/// discriminant is its zero-based index, `NAMES` lists the names in order,
/// and `machine()` builds a [`StateMachine`](crate::StateMachine) over them.
/// This keeps call sites comparing against named steps instead of bare
/// integers.
///
/// # Example
///
/// ```
/// use flowstep::flow_states;
///
/// flow_states! {
///     pub enum SignupStep {
///         Email,
///         Code,
///         Details,
///         Done,
///     }
/// }
///
/// let mut machine = SignupStep::machine();
/// machine.next().unwrap();
/// assert_eq!(machine.state(), SignupStep::Code.index());
/// assert_eq!(machine.name_of(SignupStep::Done.index()), Some("Done"));
/// ```
#[macro_export]
macro_rules! flow_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Ordered state names, matching the machine's vocabulary.
            $vis const NAMES: &'static [&'static str] = &[$(stringify!($variant)),+];

            /// Zero-based position of this step in the vocabulary.
            $vis fn index(self) -> usize {
                self as usize
            }

            /// Build a machine over this vocabulary, starting at the first step.
            $vis fn machine() -> $crate::StateMachine {
                $crate::StateMachine::new(Self::NAMES.iter().copied())
                    .expect("declared vocabulary is never empty")
            }
        }
    };
}

#[cfg(test)]
mod tests {
    flow_states! {
        enum Step {
            Email,
            Code,
            Details,
            Done,
        }
    }

    #[test]
    fn indices_follow_declaration_order() {
        assert_eq!(Step::Email.index(), 0);
        assert_eq!(Step::Code.index(), 1);
        assert_eq!(Step::Details.index(), 2);
        assert_eq!(Step::Done.index(), 3);
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(Step::NAMES, ["Email", "Code", "Details", "Done"]);
    }

    #[test]
    fn machine_vocabulary_matches_enum() {
        let machine = Step::machine();
        assert_eq!(machine.len(), 4);
        assert_eq!(machine.state(), Step::Email.index());
        assert_eq!(machine.index_of("Details"), Some(Step::Details.index()));
    }

    #[test]
    fn macro_supports_visibility_and_attributes() {
        flow_states! {
            /// Steps of a revocation flow.
            pub(crate) enum Revoke {
                Confirm,
                Done,
            }
        }

        assert_eq!(Revoke::NAMES.len(), 2);
        assert_eq!(Revoke::Done.index(), 1);
    }
}
