use std::fmt;

use tracing::{debug, info, warn};

use crate::{error::LendingError, events::LendingEvent, user::User};

/// In-memory list of library users, kept in insertion order.
///
/// Names are not required to be unique; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRegistry {
    /// Registered users, oldest first
    users: Vec<User>,
}

impl UserRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Register a user.
    ///
    /// Accepts a `User` or an `Option<User>` so callers holding a possibly
    /// absent user can hand it over directly.
    ///
    /// # Errors
    ///
    /// Returns `LendingError::NullArgument` if `user` is `None`; the registry is unchanged
    pub fn add(&mut self, user: impl Into<Option<User>>) -> Result<LendingEvent, LendingError> {
        let Some(user) = user.into() else {
            warn!("rejected absent user");
            return Err(LendingError::NullArgument("user cannot be absent".to_string()));
        };

        let name = user.name().to_string();
        self.users.push(user);
        info!(user = %name, total = self.users.len(), "user added");

        Ok(LendingEvent::UserAdded { user: name })
    }

    /// Find the first user whose name matches `name`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `LendingError::UserNotFound` carrying `name` as given when nobody matches
    pub fn find_by_name(&self, name: &str) -> Result<&User, LendingError> {
        let found = self.users.iter().find(|user| names_match(user.name(), name));
        debug!(query = name, found = found.is_some(), "user lookup");
        found.ok_or_else(|| LendingError::UserNotFound(name.to_string()))
    }

    /// Mutable counterpart of [`UserRegistry::find_by_name`], for borrowing
    /// and returning through a registered user
    ///
    /// # Errors
    ///
    /// Returns `LendingError::UserNotFound` carrying `name` as given when nobody matches
    pub fn find_by_name_mut(&mut self, name: &str) -> Result<&mut User, LendingError> {
        self.users
            .iter_mut()
            .find(|user| names_match(user.name(), name))
            .ok_or_else(|| LendingError::UserNotFound(name.to_string()))
    }

    /// Render every registered user, in insertion order. Each call starts a
    /// fresh pass over the registry.
    pub fn list_all(&self) -> impl Iterator<Item = String> + '_ {
        self.users.iter().map(User::describe)
    }

    /// Registered users, in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Case-insensitive name equality, one character at a time.
///
/// Each character is upper-cased then lower-cased so that letters with
/// several lower-case forms (final sigma) compare equal.
fn names_match(candidate: &str, query: &str) -> bool {
    fold_case(candidate).eq(fold_case(query))
}

/// Case-folded characters of `text`
fn fold_case(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_uppercase).flat_map(char::to_lowercase)
}

impl<'a> IntoIterator for &'a UserRegistry {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Listing block, as shown by a front end
impl fmt::Display for UserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== USER LIST ===")?;
        if self.is_empty() {
            writeln!(f, "   No users registered.")?;
        } else {
            for line in self.list_all() {
                writeln!(f, "   {line}")?;
            }
        }
        write!(f, "=================")
    }
}

#[cfg(test)]
mod tests;
