//! End-to-end catalog and lending tests

use std::io::Cursor;

use shelfkeeper::{
    import::DelimitedReader,
    models::{LendOutcome, ReturnOutcome, SearchOutcome},
    CatalogService,
};

const BOOKS: &str = "\
9780451524935, 1984, George Orwell, 9.99, 1
9780061120084, To Kill a Mockingbird, Harper Lee, 12.49, 2
9780316769488, The Catcher in the Rye, J.D. Salinger, 8.99, 0

9781857880113, Chess for Young Beginners, William Hartston, , 2
";

fn load(input: &str) -> CatalogService {
    let mut catalog = CatalogService::new();
    catalog.load(&mut DelimitedReader::new("books.csv", Cursor::new(input.to_string())));
    catalog
}

#[test]
fn test_malformed_row_is_dropped() {
    let input = "\
A1,Dune,Frank Herbert,9.99,1
A2,Emma,Jane Austen,4.50,x
A3,Ulysses,James Joyce,15.00,2
";
    let mut catalog = CatalogService::new();
    let report = catalog.load(&mut DelimitedReader::new("inline", Cursor::new(input)));

    assert_eq!(report.added, 2);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(catalog.list_books().len(), 2);
    assert!(catalog.get("A2").is_none());
}

#[test]
fn test_reservations_keep_arrival_order() {
    let mut catalog = load(BOOKS);
    catalog.reserve_book("1984");
    catalog.reserve_book("1984");
    catalog.reserve_book("Dune");

    assert_eq!(catalog.reservations(), vec!["1984", "1984", "Dune"]);
}

#[test]
fn test_demonstration_round() {
    let mut catalog = load(BOOKS);
    for title in [
        "1984",
        "1984",
        "To Kill a Mockingbird",
        "The Catcher in the Rye",
        "Moby Dick",
    ] {
        catalog.reserve_book(title);
    }

    assert_eq!(
        catalog.lend_book(),
        LendOutcome::Lent {
            title: "1984".into(),
            remaining: 0
        }
    );
    assert_eq!(
        catalog.lend_book(),
        LendOutcome::Unavailable {
            title: "1984".into()
        }
    );
    assert_eq!(
        catalog.lend_book(),
        LendOutcome::Unavailable {
            title: "1984".into()
        }
    );
    assert_eq!(
        catalog.reservations(),
        vec!["1984", "To Kill a Mockingbird", "The Catcher in the Rye", "Moby Dick"]
    );

    assert_eq!(
        catalog.return_book(),
        ReturnOutcome::Returned {
            title: "1984".into(),
            available: 1
        }
    );
    assert_eq!(
        catalog.lend_book(),
        LendOutcome::Lent {
            title: "1984".into(),
            remaining: 0
        }
    );
    assert_eq!(
        catalog.lend_book(),
        LendOutcome::Lent {
            title: "To Kill a Mockingbird".into(),
            remaining: 1
        }
    );
    assert_eq!(
        catalog.lend_book(),
        LendOutcome::Unavailable {
            title: "The Catcher in the Rye".into()
        }
    );
}

#[test]
fn test_unknown_reservation_is_not_retried() {
    let mut catalog = load(BOOKS);
    catalog.reserve_book("Moby Dick");
    catalog.reserve_book("1984");

    assert_eq!(
        catalog.lend_book(),
        LendOutcome::BookNotFound {
            title: "Moby Dick".into()
        }
    );
    assert!(matches!(catalog.lend_book(), LendOutcome::Lent { .. }));
    assert_eq!(catalog.lend_book(), LendOutcome::NoBooksToLend);
}

#[test]
fn test_lend_then_return_restores_stock() {
    let mut catalog = load(BOOKS);
    let before = catalog.get("9780061120084").map(|b| b.total_copies);

    catalog.reserve_book("to kill a mockingbird");
    assert!(matches!(catalog.lend_book(), LendOutcome::Lent { .. }));
    assert!(matches!(catalog.return_book(), ReturnOutcome::Returned { .. }));

    assert_eq!(catalog.get("9780061120084").map(|b| b.total_copies), before);
    assert_eq!(catalog.return_book(), ReturnOutcome::NoBooksToReturn);
}

#[test]
fn test_title_search_uses_index_copy() {
    let mut catalog = load(BOOKS);
    catalog.reserve_book("1984");
    catalog.lend_book();

    // the index keeps the copy made at load time
    match catalog.search_by_title("1984") {
        SearchOutcome::Found { book } => assert_eq!(book.total_copies, 1),
        other => panic!("expected a match, got {:?}", other),
    }
    assert_eq!(catalog.get("9780451524935").map(|b| b.total_copies), Some(0));
    assert!(matches!(
        catalog.search_by_title("Chess for Young Beginners"),
        SearchOutcome::NotFound { .. }
    ));
}
