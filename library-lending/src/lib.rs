//! Library lending workflow: books, users and a user registry.
//!
//! Books and users validate themselves on construction. Users borrow and
//! return books under a loan cap, and the registry looks users up by name.
//! Every failure is reported through [`LendingError`].

pub mod book;
pub mod book_state;
pub mod config;
pub mod error;
pub mod events;
pub mod registry;
pub mod user;

pub use book::Book;
pub use book_state::BookState;
pub use config::{ConfigError, DEFAULT_LOAN_LIMIT, LendingPolicy};
pub use error::LendingError;
pub use events::LendingEvent;
pub use registry::UserRegistry;
pub use user::User;
