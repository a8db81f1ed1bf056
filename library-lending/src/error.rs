use thiserror::Error;

use crate::book_state::BookState;

/// Advice attached to a loan limit failure
const LOAN_LIMIT_SUGGESTION: &str = "Suggestion: return a book before requesting a new loan.";

/// Errors raised by the lending workflow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// A text field was empty or a numeric field was out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required value was absent
    #[error("missing argument: {0}")]
    NullArgument(String),

    /// The book cannot be lent in its current state
    #[error(
        "book '{title}' is not available. Current state: {state}\n{}",
        unavailable_suggestion(*.state)
    )]
    BookUnavailable {
        /// Title of the requested book
        title: String,
        /// State the book was in when the loan was attempted
        state: BookState,
    },

    /// The user already holds as many books as the policy allows
    #[error(
        "user {user} tried to borrow more than {limit} books\nBooks currently borrowed: {borrowed}\n{}",
        LOAN_LIMIT_SUGGESTION
    )]
    LoanLimitExceeded {
        /// Name of the user at the cap
        user: String,
        /// Books the user holds right now
        borrowed: u32,
        /// Loan cap in force for the user
        limit: u32,
    },

    /// No registered user matched the queried name
    #[error("user with name '{0}' not found")]
    UserNotFound(String),
}

impl LendingError {
    /// Remediation hint for the recoverable lending failures
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::BookUnavailable { state, .. } => Some(unavailable_suggestion(*state)),
            Self::LoanLimitExceeded { .. } => Some(LOAN_LIMIT_SUGGESTION),
            Self::InvalidArgument(_) | Self::NullArgument(_) | Self::UserNotFound(_) => None,
        }
    }

    /// Whether the caller is expected to handle this error and carry on.
    ///
    /// Argument failures mean a value could not be built at all; the
    /// remaining kinds are per-call conditions (try another book, return a
    /// loan first, look up a different name).
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::BookUnavailable { .. } | Self::LoanLimitExceeded { .. } | Self::UserNotFound(_)
        )
    }
}

/// Hint for a book that is not on the shelf, depending on why
const fn unavailable_suggestion(state: BookState) -> &'static str {
    match state {
        BookState::Borrowed => {
            "Suggestion: wait for the book to be returned or try to reserve it."
        }
        BookState::Available | BookState::Reserved => {
            "Suggestion: ask the library about its availability."
        }
    }
}
