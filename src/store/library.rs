use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use tracing::{info, warn};

use crate::error::LibraryError;
use crate::models::{Book, NewBook, SearchField};

use super::file;
use super::stats::LibraryStats;

/// The in-memory book collection together with the file it is mirrored to.
/// Every mutation rewrites the whole file before returning and is undone in
/// memory if that write fails, so the on-disk copy never lags behind what the
/// UI shows.
#[derive(Debug)]
pub struct Library {
    path: PathBuf,
    books: Vec<Book>,
}

impl Library {
    /// Load the collection stored at `path`, or start empty if nothing is
    /// there yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LibraryError> {
        let path = path.into();
        let books = file::load(&path)?;
        Ok(Self { path, books })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validate the draft, stamp it with the current time, append it, and
    /// persist. Rejected drafts leave both the collection and the file alone.
    pub fn add(&mut self, draft: NewBook) -> Result<&Book, LibraryError> {
        let draft = draft.normalized(current_year())?;
        self.books.push(Book::new(draft));
        if let Err(err) = self.save() {
            self.books.pop();
            return Err(err);
        }

        let index = self.books.len() - 1;
        let book = &self.books[index];
        info!(index, title = %book.title, author = %book.author, "added book");
        Ok(book)
    }

    /// Remove the book at `index` and persist. Later books shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Book, LibraryError> {
        self.check_index(index)?;
        let removed = self.books.remove(index);
        if let Err(err) = self.save() {
            self.books.insert(index, removed);
            return Err(err);
        }
        info!(index, title = %removed.title, "removed book");
        Ok(removed)
    }

    /// Flip the read flag of the book at `index`, persist, and return the new
    /// value.
    pub fn toggle_read(&mut self, index: usize) -> Result<bool, LibraryError> {
        self.check_index(index)?;
        let book = &mut self.books[index];
        book.read_status = !book.read_status;
        let read = book.read_status;
        if let Err(err) = self.save() {
            self.books[index].read_status = !read;
            return Err(err);
        }
        info!(index, read, "toggled read status");
        Ok(read)
    }

    /// Matching books paired with their position in the library, so callers
    /// can act on a search hit by index.
    pub fn search(&self, term: &str, field: SearchField) -> Vec<(usize, &Book)> {
        let needle = term.to_lowercase();
        self.books
            .iter()
            .enumerate()
            .filter(|(_, book)| field_matches(book, &needle, field))
            .collect()
    }

    pub fn stats(&self) -> LibraryStats {
        LibraryStats::compute(&self.books)
    }

    fn check_index(&self, index: usize) -> Result<(), LibraryError> {
        if index < self.books.len() {
            Ok(())
        } else {
            warn!(index, len = self.books.len(), "book index out of range");
            Err(LibraryError::IndexOutOfRange {
                index,
                len: self.books.len(),
            })
        }
    }

    fn save(&self) -> Result<(), LibraryError> {
        file::save(&self.path, &self.books)
    }
}

/// Case-insensitive substring search over one field, keeping library order.
pub fn search<'a>(books: &'a [Book], term: &str, field: SearchField) -> Vec<&'a Book> {
    let needle = term.to_lowercase();
    books
        .iter()
        .filter(|book| field_matches(book, &needle, field))
        .collect()
}

fn field_matches(book: &Book, needle: &str, field: SearchField) -> bool {
    field.value(book).to_lowercase().contains(needle)
}

fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library_in(dir: &TempDir) -> Library {
        Library::open(dir.path().join("library.json")).unwrap()
    }

    fn seeded(dir: &TempDir) -> Library {
        let mut library = library_in(dir);
        library
            .add(NewBook::new("Dune", "Frank Herbert", 1965, "Science Fiction", true))
            .unwrap();
        library
            .add(NewBook::new("Foundation", "Isaac Asimov", 1951, "Science Fiction", false))
            .unwrap();
        library
            .add(NewBook::new("Emma", "Jane Austen", 1815, "Romance", false))
            .unwrap();
        library
    }

    fn titles(library: &Library) -> Vec<&str> {
        library.books().iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn add_appends_in_insertion_order_and_persists() {
        let dir = TempDir::new().unwrap();
        let library = seeded(&dir);
        assert_eq!(titles(&library), vec!["Dune", "Foundation", "Emma"]);
        assert_eq!(library.path(), dir.path().join("library.json"));

        let reloaded = library_in(&dir);
        assert_eq!(reloaded.books(), library.books());
    }

    #[test]
    fn add_rejects_invalid_draft_without_touching_disk() {
        let dir = TempDir::new().unwrap();
        let mut library = library_in(&dir);
        let err = library
            .add(NewBook::new("", "Nobody", 2000, "", false))
            .unwrap_err();
        assert!(matches!(err, LibraryError::InvalidBook(_)));
        assert!(library.is_empty());
        assert!(!dir.path().join("library.json").exists());
    }

    #[test]
    fn duplicates_are_allowed() {
        let dir = TempDir::new().unwrap();
        let mut library = library_in(&dir);
        let draft = NewBook::new("Dune", "Frank Herbert", 1965, "SF", false);
        library.add(draft.clone()).unwrap();
        library.add(draft).unwrap();
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn remove_shifts_later_books_down() {
        let dir = TempDir::new().unwrap();
        let mut library = seeded(&dir);
        let removed = library.remove(0).unwrap();
        assert_eq!(removed.title, "Dune");
        assert_eq!(titles(&library), vec!["Foundation", "Emma"]);
        assert_eq!(titles(&library_in(&dir)), vec!["Foundation", "Emma"]);
    }

    #[test]
    fn remove_out_of_range_leaves_library_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut library = seeded(&dir);
        let before = library.books().to_vec();

        for index in [3, 4, usize::MAX] {
            let err = library.remove(index).unwrap_err();
            assert!(matches!(
                err,
                LibraryError::IndexOutOfRange { len: 3, .. }
            ));
        }
        assert_eq!(library.books(), before.as_slice());
    }

    #[test]
    fn toggle_twice_restores_original_value() {
        let dir = TempDir::new().unwrap();
        let mut library = seeded(&dir);
        let original = library.get(1).map(|b| b.read_status);

        assert!(library.toggle_read(1).unwrap());
        assert!(!library.toggle_read(1).unwrap());
        assert_eq!(library.get(1).map(|b| b.read_status), original);
        assert!(!library_in(&dir).books()[1].read_status);
    }

    #[test]
    fn toggle_is_persisted() {
        let dir = TempDir::new().unwrap();
        let mut library = seeded(&dir);
        library.toggle_read(2).unwrap();
        assert!(library_in(&dir).books()[2].read_status);
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut library = seeded(&dir);
        assert!(matches!(
            library.toggle_read(10),
            Err(LibraryError::IndexOutOfRange { index: 10, len: 3 })
        ));
    }

    /// Swap the library file for a directory so the next save fails.
    fn break_storage(dir: &TempDir) {
        let path = dir.path().join("library.json");
        if path.exists() {
            std::fs::remove_file(&path).unwrap();
        }
        std::fs::create_dir(&path).unwrap();
    }

    #[test]
    fn failed_save_rolls_back_add() {
        let dir = TempDir::new().unwrap();
        let mut library = library_in(&dir);
        break_storage(&dir);

        let err = library
            .add(NewBook::new("Dune", "Frank Herbert", 1965, "SF", false))
            .unwrap_err();
        assert!(matches!(err, LibraryError::Io { .. }));
        assert!(library.is_empty());
    }

    #[test]
    fn failed_save_rolls_back_remove() {
        let dir = TempDir::new().unwrap();
        let mut library = seeded(&dir);
        let before = library.books().to_vec();
        break_storage(&dir);

        assert!(matches!(library.remove(1), Err(LibraryError::Io { .. })));
        assert_eq!(library.books(), before.as_slice());
    }

    #[test]
    fn failed_save_rolls_back_toggle() {
        let dir = TempDir::new().unwrap();
        let mut library = seeded(&dir);
        break_storage(&dir);

        assert!(matches!(library.toggle_read(0), Err(LibraryError::Io { .. })));
        assert_eq!(library.get(0).map(|b| b.read_status), Some(true));
    }

    #[test]
    fn search_matches_selected_field_only() {
        let dir = TempDir::new().unwrap();
        let library = seeded(&dir);

        let hits = library.search("dune", SearchField::Title);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 0);

        assert!(library.search("dune", SearchField::Author).is_empty());

        let hits: Vec<usize> = library
            .search("SCIENCE", SearchField::Genre)
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        assert_eq!(hits, vec![0, 1]);
    }

    #[test]
    fn free_search_preserves_order() {
        let dir = TempDir::new().unwrap();
        let library = seeded(&dir);
        let hits = search(library.books(), "a", SearchField::Author);
        let found: Vec<&str> = hits.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(found, vec!["Dune", "Foundation", "Emma"]);
    }
}
