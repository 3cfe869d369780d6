use thiserror::Error;

/// Result type for pairing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building or solving a gift exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No valid assignment exists for the given participants and exclusions.
    #[error("the graph is not solvable: {0}")]
    NotSolvable(#[from] Unsolvable),

    /// More participants than the configured limit allows.
    #[error("too many participants: {count} (maximum {max})")]
    TooManyParticipants { count: usize, max: usize },

    /// A single participant lists more exclusions than allowed.
    #[error("{participant} has too many exclusions: {count} (maximum {max})")]
    TooManyExclusions {
        participant: String,
        count: usize,
        max: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// The reason a graph has no Hamiltonian cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unsolvable {
    #[error("graph must contain at least two nodes")]
    TooFewNodes,

    #[error("could not find a path that includes every node")]
    NoPath,
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Returns true for any flavour of [`Error::NotSolvable`].
    pub fn is_not_solvable(&self) -> bool {
        matches!(self, Error::NotSolvable(_))
    }

    /// The specific cause when this is a [`Error::NotSolvable`] error.
    pub fn unsolvable_reason(&self) -> Option<Unsolvable> {
        match self {
            Error::NotSolvable(reason) => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_solvable_messages() {
        let err = Error::from(Unsolvable::TooFewNodes);
        assert_eq!(
            err.to_string(),
            "the graph is not solvable: graph must contain at least two nodes"
        );

        let err = Error::from(Unsolvable::NoPath);
        assert_eq!(
            err.to_string(),
            "the graph is not solvable: could not find a path that includes every node"
        );
    }

    #[test]
    fn test_reason_accessors() {
        let err = Error::NotSolvable(Unsolvable::NoPath);
        assert!(err.is_not_solvable());
        assert_eq!(err.unsolvable_reason(), Some(Unsolvable::NoPath));

        let err = Error::invalid_input("empty name");
        assert!(!err.is_not_solvable());
        assert_eq!(err.unsolvable_reason(), None);
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg == "empty name"));
    }
}
