use std::fmt;

use serde::Serialize;

use crate::{book_state::BookState, error::LendingError};

/// A title on the library shelf and its lending state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Title, never blank
    title: String,
    /// Current lending state
    state: BookState,
}

impl Book {
    /// Create an available book
    ///
    /// # Errors
    ///
    /// Returns `LendingError::InvalidArgument` if the title is empty or only whitespace
    pub fn new(title: impl Into<String>) -> Result<Self, LendingError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LendingError::InvalidArgument("book title cannot be empty".to_string()));
        }
        Ok(Self { title, state: BookState::Available })
    }

    /// Like [`Book::new`], for callers whose title may be absent
    ///
    /// # Errors
    ///
    /// Returns `LendingError::InvalidArgument` if the title is missing, empty or only whitespace
    pub fn try_from_optional(title: Option<&str>) -> Result<Self, LendingError> {
        title.map_or_else(
            || Err(LendingError::InvalidArgument("book title cannot be empty".to_string())),
            Self::new,
        )
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn state(&self) -> BookState {
        self.state
    }

    /// Overwrite the lending state. No transition rules are checked here;
    /// [`crate::User::borrow`] and [`crate::User::return_book`] are the
    /// intended callers.
    pub const fn set_state(&mut self, state: BookState) {
        self.state = state;
    }

    /// Human-readable rendering of title and state
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book: '{}' | State: {}", self.title, self.state)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Book;
    use crate::{book_state::BookState, error::LendingError};

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n  ")]
    fn test_blank_titles_are_rejected(#[case] title: &str) {
        assert!(matches!(Book::new(title), Err(LendingError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        assert!(matches!(Book::try_from_optional(None), Err(LendingError::InvalidArgument(_))));
    }

    #[rstest]
    #[case("Don Quijote")]
    #[case(" Padded ")]
    #[case("1984")]
    fn test_new_books_are_available(#[case] title: &str) {
        let book = Book::try_from_optional(Some(title));
        assert!(matches!(book, Ok(ref b) if b.state() == BookState::Available && b.title() == title));
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_set_state_accepts_any_state() {
        let mut book = Book::new("Dune").expect("valid title");
        book.set_state(BookState::Reserved);
        assert_eq!(book.state(), BookState::Reserved);
        book.set_state(BookState::Borrowed);
        assert_eq!(book.describe(), "Book: 'Dune' | State: BORROWED");
    }
}
