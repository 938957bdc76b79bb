use thiserror::Error;

/// The only failure a [`crate::mover::Mover`] (or its destination card selection) reports.
///
/// Raised whenever the paired `can_*` predicate would have returned `false`.
/// No game state is ever changed alongside an `IllegalMove`.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{reason}")]
pub struct IllegalMove {
    reason: String,
}

impl IllegalMove {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Human-readable explanation of why the move was refused.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Shorthand used by all the legality checks.
pub type MoveResult<T = ()> = Result<T, IllegalMove>;
