use std::fmt;

use serde::Serialize;

/// Outcome reported by a successful lending operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LendingEvent {
    /// A user joined the registry
    UserAdded {
        /// Name of the new user
        user: String,
    },
    /// A book left the shelf
    Borrowed {
        /// Borrowing user
        user: String,
        /// Title of the lent book
        title: String,
        /// Books the user holds after the loan
        borrowed_count: u32,
    },
    /// A book came back
    Returned {
        /// Returning user
        user: String,
        /// Title of the returned book
        title: String,
        /// Books the user still holds
        remaining: u32,
    },
    /// Return requested by a user holding no books; nothing changed
    NothingToReturn {
        /// User who asked to return
        user: String,
    },
}

impl LendingEvent {
    /// Whether the operation changed any lending state
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        !matches!(self, Self::NothingToReturn { .. })
    }
}

impl fmt::Display for LendingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserAdded { user } => write!(f, "User '{user}' added to the system."),
            Self::Borrowed { user, title, borrowed_count } => write!(
                f,
                "Book borrowed successfully. Current books: {borrowed_count}. {user} borrowed '{title}'."
            ),
            Self::Returned { user, title, remaining } => write!(
                f,
                "Book returned successfully. Remaining books: {remaining}. {user} returned '{title}'."
            ),
            Self::NothingToReturn { user } => write!(f, "{user} has no borrowed books to return."),
        }
    }
}
