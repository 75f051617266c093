//! End-to-end checks of the library against a real file on disk.
//!
//! Tests:
//! - Added books survive a reload with every field intact
//! - Remove and toggle reject out-of-range positions without touching the file
//! - A corrupt file fails loudly instead of being overwritten
//! - Statistics and search over a reloaded collection
use std::fs;

use personal_library_manager::store::{load, search};
use personal_library_manager::{Library, LibraryError, NewBook, SearchField};
use tempfile::TempDir;

/// Initialize tracing for tests
fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

#[test]
fn added_book_round_trips_through_disk() {
    tracing_init();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("library.json");

    let mut library = Library::open(&path).expect("open");
    let added = library
        .add(NewBook::new("Dune", "Frank Herbert", 1965, "Science Fiction", true))
        .expect("add")
        .clone();

    let books = load(&path).expect("reload");
    assert_eq!(books.len(), 1);
    let stored = &books[0];
    assert_eq!(stored, &added);
    assert_eq!(stored.title, "Dune");
    assert_eq!(stored.author, "Frank Herbert");
    assert_eq!(stored.publication_year, 1965);
    assert_eq!(stored.genre, "Science Fiction");
    assert!(stored.read_status);
    assert!(!stored.added_date().is_empty());
}

#[test]
fn out_of_range_operations_leave_file_untouched() {
    tracing_init();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("library.json");

    let mut library = Library::open(&path).expect("open");
    library
        .add(NewBook::new("Emma", "Jane Austen", 1815, "Romance", false))
        .expect("add");
    let before = fs::read_to_string(&path).expect("read");

    assert!(matches!(
        library.remove(1),
        Err(LibraryError::IndexOutOfRange { index: 1, len: 1 })
    ));
    assert!(matches!(
        library.toggle_read(7),
        Err(LibraryError::IndexOutOfRange { index: 7, len: 1 })
    ));

    assert_eq!(fs::read_to_string(&path).expect("read"), before);
    assert_eq!(library.len(), 1);
}

#[test]
fn corrupt_file_is_not_overwritten() {
    tracing_init();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("library.json");
    fs::write(&path, "[{\"title\": ").expect("write");

    let err = Library::open(&path).expect_err("corrupt file must not load");
    assert!(matches!(err, LibraryError::Corrupt { .. }));
    assert_eq!(fs::read_to_string(&path).expect("read"), "[{\"title\": ");
}

#[test]
fn loads_file_written_by_hand() {
    tracing_init();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("library.json");
    fs::write(
        &path,
        r#"[
            {"title": "Dune", "author": "Frank Herbert", "publication_year": 1985,
             "genre": "SF", "read_status": true, "added_date": "2025-03-01 09:30:00"},
            {"title": "Foundation", "author": "Isaac Asimov", "publication_year": 1992,
             "genre": "SF", "read_status": false, "added_date": "2025-03-02 18:05:11"}
        ]"#,
    )
    .expect("write");

    let library = Library::open(&path).expect("open");
    assert_eq!(library.books()[0].added_date(), "2025-03-01 09:30:00");

    let stats = library.stats();
    assert_eq!(stats.total_books, 2);
    assert_eq!(stats.percent_read, 50.0);
    assert_eq!(stats.genres, vec![("SF".to_string(), 2)]);
    assert_eq!(stats.decades, vec![(1980, 1), (1990, 1)]);

    let hits = search(library.books(), "dune", SearchField::Title);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dune");
}

#[test]
fn remove_then_reload_keeps_remaining_order() {
    tracing_init();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("library.json");

    let mut library = Library::open(&path).expect("open");
    for (title, year) in [("A", 2001), ("B", 2002), ("C", 2003)] {
        library
            .add(NewBook::new(title, "Anon", year, "", false))
            .expect("add");
    }
    let removed = library.remove(1).expect("remove");
    assert_eq!(removed.title, "B");

    let reloaded = Library::open(&path).expect("reopen");
    let titles: Vec<&str> = reloaded.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C"]);
}
