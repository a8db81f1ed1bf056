#![allow(clippy::expect_used)]

use rstest::{fixture, rstest};

use crate::{
    book::Book, book_state::BookState, error::LendingError, events::LendingEvent,
    registry::UserRegistry, user::User,
};

/// Helper to build a registry with a few members
#[fixture]
fn registry() -> UserRegistry {
    let mut registry = UserRegistry::new();
    for (name, age) in [("Ana", 25), ("Luis", 40), ("ana", 61)] {
        registry.add(User::new(name, age).expect("valid user")).expect("present user");
    }
    registry
}

#[test]
fn test_add_reports_the_new_user() {
    let mut registry = UserRegistry::new();
    let event = registry.add(User::new("Marta", 33).expect("valid user"));
    assert_eq!(event, Ok(LendingEvent::UserAdded { user: "Marta".to_string() }));
    assert_eq!(registry.count(), 1);
}

#[rstest]
fn test_absent_user_is_rejected_without_growing(mut registry: UserRegistry) {
    let result = registry.add(None::<User>);

    // Count should be unchanged
    assert!(matches!(result, Err(LendingError::NullArgument(_))));
    assert_eq!(registry.count(), 3);
}

#[rstest]
#[case("ANA")]
#[case("ana")]
#[case("Ana")]
fn test_lookup_ignores_case_and_prefers_first_inserted(
    registry: UserRegistry,
    #[case] query: &str,
) {
    let user = registry.find_by_name(query).expect("registered name");
    assert_eq!(user.name(), "Ana");
    assert_eq!(user.age(), 25);
}

#[rstest]
#[case("οδυσσεασ")]
#[case("οδυσσεας")]
#[case("ΟΔΥΣΣΕΑΣ")]
fn test_lookup_ignores_case_beyond_ascii(mut registry: UserRegistry, #[case] query: &str) {
    // Register a name ending in a capital sigma
    registry.add(User::new("ΟΔΥΣΣΕΑΣ", 30).expect("valid user")).expect("present user");

    // Look it up with either lower-case sigma
    let user = registry.find_by_name(query).expect("registered name");

    assert_eq!(user.name(), "ΟΔΥΣΣΕΑΣ");
    assert_eq!(user.age(), 30);
}

#[rstest]
fn test_lookup_does_not_match_prefixes(registry: UserRegistry) {
    assert!(matches!(registry.find_by_name("An"), Err(LendingError::UserNotFound(_))));
    assert!(matches!(registry.find_by_name("Anas"), Err(LendingError::UserNotFound(_))));
}

#[rstest]
fn test_miss_carries_the_exact_query(registry: UserRegistry) {
    let result = registry.find_by_name("  Pedro ");
    assert_eq!(result, Err(LendingError::UserNotFound("  Pedro ".to_string())));
}

#[test]
fn test_empty_registry_misses_lookups() {
    let registry = UserRegistry::new();
    assert!(registry.is_empty());
    assert!(matches!(registry.find_by_name("Ana"), Err(LendingError::UserNotFound(_))));
}

#[rstest]
fn test_lending_through_the_registry_updates_the_user(mut registry: UserRegistry) {
    let mut book = Book::new("Don Quijote").expect("valid title");

    // Borrow through the registered user
    registry.find_by_name_mut("luis").expect("registered name").borrow(&mut book).expect("loan");

    assert_eq!(book.state(), BookState::Borrowed);
    assert_eq!(registry.find_by_name("Luis").expect("registered name").borrowed_count(), 1);
    assert!(matches!(registry.find_by_name_mut("Pedro"), Err(LendingError::UserNotFound(_))));
}

#[rstest]
fn test_list_all_is_ordered_and_restartable(registry: UserRegistry) {
    // Walk the registry twice
    let first: Vec<String> = registry.list_all().collect();
    let second: Vec<String> = registry.list_all().collect();

    assert_eq!(
        first,
        vec![
            "User: Ana | Age: 25 | Borrowed books: 0",
            "User: Luis | Age: 40 | Borrowed books: 0",
            "User: ana | Age: 61 | Borrowed books: 0",
        ]
    );
    assert_eq!(first, second);
    assert_eq!(registry.iter().count(), registry.count());
    assert_eq!((&registry).into_iter().map(User::age).sum::<u64>(), 126);
}

#[test]
fn test_empty_listing_says_so() {
    let listing = UserRegistry::new().to_string();
    assert_eq!(listing, "=== USER LIST ===\n   No users registered.\n=================");
    assert_eq!(UserRegistry::new().list_all().count(), 0);
}

#[rstest]
fn test_listing_shows_each_user(registry: UserRegistry) {
    let listing = registry.to_string();
    assert!(listing.contains("   User: Luis | Age: 40 | Borrowed books: 0\n"));
    assert!(!listing.contains("No users registered."));
}
