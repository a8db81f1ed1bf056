use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    book::Book, book_state::BookState, config::LendingPolicy, error::LendingError,
    events::LendingEvent,
};

/// A library member who borrows and returns books
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Display name, never blank
    name: String,
    /// Age in years
    age: u64,
    /// Books currently held, within `0..=policy.loan_limit()`
    borrowed_count: u32,
    /// Loan rules this user is bound by
    #[serde(skip)]
    policy: LendingPolicy,
}

impl User {
    /// Create a user bound by the default lending policy
    ///
    /// # Errors
    ///
    /// Returns `LendingError::InvalidArgument` if the name is blank or the age is negative
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self, LendingError> {
        Self::with_policy(name, age, LendingPolicy::default())
    }

    /// Create a user bound by a custom lending policy
    ///
    /// # Errors
    ///
    /// Returns `LendingError::InvalidArgument` if the name is blank or the age is negative
    pub fn with_policy(
        name: impl Into<String>,
        age: i64,
        policy: LendingPolicy,
    ) -> Result<Self, LendingError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LendingError::InvalidArgument("user name cannot be empty".to_string()));
        }
        let age = u64::try_from(age)
            .map_err(|_| LendingError::InvalidArgument("user age cannot be negative".to_string()))?;
        Ok(Self { name, age, borrowed_count: 0, policy })
    }

    /// Like [`User::new`], for callers whose name may be absent
    ///
    /// # Errors
    ///
    /// Returns `LendingError::InvalidArgument` if the name is missing or blank, or the age is negative
    pub fn try_from_optional(name: Option<&str>, age: i64) -> Result<Self, LendingError> {
        match name {
            Some(name) => Self::new(name, age),
            None => Err(LendingError::InvalidArgument("user name cannot be empty".to_string())),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn age(&self) -> u64 {
        self.age
    }

    #[must_use]
    pub const fn borrowed_count(&self) -> u32 {
        self.borrowed_count
    }

    #[must_use]
    pub const fn loan_limit(&self) -> u32 {
        self.policy.loan_limit()
    }

    /// Whether another loan would stay within the cap
    #[must_use]
    pub const fn can_borrow(&self) -> bool {
        self.borrowed_count < self.policy.loan_limit()
    }

    /// Loans left before the cap is reached
    #[must_use]
    pub const fn remaining_loans(&self) -> u32 {
        self.policy.loan_limit().saturating_sub(self.borrowed_count)
    }

    /// Lend `book` to this user.
    ///
    /// The loan cap is checked before the book's availability, so a user at
    /// the cap always gets `LoanLimitExceeded`.
    ///
    /// # Errors
    ///
    /// - `LendingError::LoanLimitExceeded` if the user already holds the maximum number of books
    /// - `LendingError::BookUnavailable` if the book is not `Available`; its state is left as is
    pub fn borrow(&mut self, book: &mut Book) -> Result<LendingEvent, LendingError> {
        if !self.can_borrow() {
            warn!(
                user = %self.name,
                borrowed = self.borrowed_count,
                limit = self.policy.loan_limit(),
                "loan limit reached"
            );
            return Err(LendingError::LoanLimitExceeded {
                user: self.name.clone(),
                borrowed: self.borrowed_count,
                limit: self.policy.loan_limit(),
            });
        }

        if !book.state().is_available() {
            warn!(user = %self.name, title = book.title(), state = %book.state(), "book not available");
            return Err(LendingError::BookUnavailable {
                title: book.title().to_string(),
                state: book.state(),
            });
        }

        book.set_state(BookState::Borrowed);
        self.borrowed_count = self.borrowed_count.saturating_add(1);
        info!(
            user = %self.name,
            title = book.title(),
            borrowed = self.borrowed_count,
            "book borrowed"
        );

        Ok(LendingEvent::Borrowed {
            user: self.name.clone(),
            title: book.title().to_string(),
            borrowed_count: self.borrowed_count,
        })
    }

    /// Give `book` back to the library.
    ///
    /// Only the user's own counter is consulted: the book is marked
    /// `Available` whenever the user holds at least one loan, whether or not
    /// this user borrowed that particular book. A user with no loans gets
    /// `LendingEvent::NothingToReturn` and nothing changes.
    pub fn return_book(&mut self, book: &mut Book) -> LendingEvent {
        if self.borrowed_count == 0 {
            info!(user = %self.name, title = book.title(), "nothing to return");
            return LendingEvent::NothingToReturn { user: self.name.clone() };
        }

        book.set_state(BookState::Available);
        self.borrowed_count = self.borrowed_count.saturating_sub(1);
        info!(
            user = %self.name,
            title = book.title(),
            remaining = self.borrowed_count,
            "book returned"
        );

        LendingEvent::Returned {
            user: self.name.clone(),
            title: book.title().to_string(),
            remaining: self.borrowed_count,
        }
    }

    /// Human-readable rendering of name, age and loan count
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User: {} | Age: {} | Borrowed books: {}",
            self.name, self.age, self.borrowed_count
        )
    }
}
