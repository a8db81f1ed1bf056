use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the possible lending states of a library book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookState {
    /// Book is on the shelf and can be lent
    #[default]
    Available,
    /// Book is in the hands of a user
    Borrowed,
    /// Book is held for another user
    Reserved,
}

impl BookState {
    /// Upper-case name of the state, as shown in reports and errors
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Borrowed => "BORROWED",
            Self::Reserved => "RESERVED",
        }
    }

    /// Get a human-readable description of the current state
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Available => "Book is ready to be lent",
            Self::Borrowed => "Book is in the hands of a user",
            Self::Reserved => "Book is reserved for another user",
        }
    }

    /// Whether a book in this state can be borrowed
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for BookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::BookState;

    #[test]
    fn test_defaults_to_available() {
        assert_eq!(BookState::default(), BookState::Available);
        assert!(BookState::default().is_available());
    }

    #[test]
    fn test_only_available_can_be_lent() {
        assert!(!BookState::Borrowed.is_available());
        assert!(!BookState::Reserved.is_available());
    }

    #[test]
    fn test_displays_upper_case_name() {
        assert_eq!(BookState::Borrowed.to_string(), "BORROWED");
        assert_eq!(BookState::Reserved.name(), "RESERVED");
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_serializes_as_upper_case_name() {
        let json = serde_json::to_string(&BookState::Available).expect("state serializes");
        assert_eq!(json, "\"AVAILABLE\"");
        let parsed: BookState = serde_json::from_str("\"RESERVED\"").expect("state parses");
        assert_eq!(parsed, BookState::Reserved);
    }
}
