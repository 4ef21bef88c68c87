use super::StateId;

/// Structural invariant violations, detected eagerly at construction or at
/// the entry of a transformation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("initial state {0} is not in the state set")]
    UnknownInitial(StateId),

    #[error("transition references unknown state {0}")]
    UnknownState(StateId),

    #[error("symbol '{0}' is not in the alphabet")]
    UnknownSymbol(char),

    #[error("duplicate state name `{0}`")]
    DuplicateState(String),

    #[error("state `{state}` has an epsilon transition")]
    EpsilonTransition { state: String },

    #[error("state `{state}` has more than one transition on '{symbol}'")]
    Nondeterministic { state: String, symbol: char },

    #[error("state `{state}` has no transition on '{symbol}'")]
    Incomplete { state: String, symbol: char },
}
