//! Storage Integration Tests
//!
//! Net-effect properties of add/remove/list sequences against the
//! in-memory backend, through the public trait.

use bookshelf::{Book, BookStorage, MemoryStorage};

fn book(title: &str, author: &str, year: &str) -> Book {
    Book::new(title, author, year)
}

#[test]
fn test_duplicate_add_stores_exactly_one_book() {
    let mut storage = MemoryStorage::new();

    assert!(storage.add(book("1984", "Orwell", "1949")));
    assert!(!storage.add(book("1984", "Orwell", "1949")));

    assert_eq!(storage.list(), vec![book("1984", "Orwell", "1949")]);
}

#[test]
fn test_any_single_field_difference_makes_a_distinct_book() {
    let base = book("1984", "Orwell", "1949");
    let variants = [
        book("Animal Farm", "Orwell", "1949"),
        book("1984", "Unknown", "1949"),
        book("1984", "Orwell", "1950"),
    ];

    for variant in variants {
        let mut storage = MemoryStorage::new();
        storage.add(base.clone());
        storage.add(variant);
        assert_eq!(storage.len(), 2);
    }
}

#[test]
fn test_removing_unknown_title_leaves_storage_unchanged() {
    let mut storage = MemoryStorage::new();
    storage.add(book("A", "X", "2000"));
    storage.add(book("B", "Y", "2001"));

    assert_eq!(storage.remove_by_title("C"), 0);
    assert_eq!(
        storage.list(),
        vec![book("A", "X", "2000"), book("B", "Y", "2001")]
    );
}

#[test]
fn test_list_reflects_net_survivors_in_insertion_order() {
    let mut storage = MemoryStorage::new();

    storage.add(book("A", "X", "2000"));
    storage.add(book("B", "Y", "2001"));
    storage.add(book("C", "Z", "2002"));
    storage.remove_by_title("B");
    storage.add(book("D", "W", "2003"));
    storage.add(book("A", "X", "2000")); // duplicate, ignored
    storage.remove_by_title("missing"); // no-op

    assert_eq!(
        storage.list(),
        vec![
            book("A", "X", "2000"),
            book("C", "Z", "2002"),
            book("D", "W", "2003"),
        ]
    );
}

#[test]
fn test_remove_takes_every_matching_title() {
    let mut storage = MemoryStorage::new();
    storage.add(book("Faust", "Goethe", "1808"));
    storage.add(book("Faust", "Turgenev", "1856"));

    assert_eq!(storage.remove_by_title("Faust"), 2);
    assert!(storage.is_empty());
}

#[test]
fn test_list_is_a_defensive_copy() {
    let mut storage = MemoryStorage::new();
    storage.add(book("1984", "Orwell", "1949"));

    let mut snapshot = storage.list();
    snapshot.clear();
    snapshot.push(book("Intruder", "Nobody", "0"));

    assert_eq!(storage.list(), vec![book("1984", "Orwell", "1949")]);
}
