//! Domain models persisted in the library file and passed throughout the TUI.
//! These types stay light-weight data holders so the other layers can focus on
//! persistence and presentation. The serde field names double as the on-disk
//! JSON keys, so renaming a field here is a format change.

use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::LibraryError;

/// Earliest publication year accepted for a new book.
pub const MIN_PUBLICATION_YEAR: i32 = 1000;

/// Format used for the `added_date` stamp.
pub const ADDED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One tracked book. Everything except `added_date` can change over the
/// book's lifetime; the stamp is written once when the record is created and
/// only exposed through a read accessor afterwards.
pub struct Book {
    /// Title displayed on cards and matched by title searches.
    pub title: String,
    /// Author used for display, author searches, and the author table.
    pub author: String,
    /// Publication year. Also drives the decade buckets in the statistics.
    pub publication_year: i32,
    /// Free-form genre label. May be empty.
    pub genre: String,
    /// Whether the book has been read.
    pub read_status: bool,
    added_date: String,
}

impl Book {
    /// Build a record from a draft, stamping it with the current local time.
    pub fn new(draft: NewBook) -> Self {
        let added_date = Local::now().format(ADDED_DATE_FORMAT).to_string();
        Self::with_added_date(draft, added_date)
    }

    /// Build a record with an explicit creation stamp.
    pub fn with_added_date(draft: NewBook, added_date: impl Into<String>) -> Self {
        Self {
            title: draft.title,
            author: draft.author,
            publication_year: draft.publication_year,
            genre: draft.genre,
            read_status: draft.read_status,
            added_date: added_date.into(),
        }
    }

    pub fn added_date(&self) -> &str {
        &self.added_date
    }

    /// `Read` or `Unread`, matching the badge shown on book cards.
    pub fn read_label(&self) -> &'static str {
        if self.read_status {
            "Read"
        } else {
            "Unread"
        }
    }

    /// `Title by Author (Year)`, the one-line form used in search results.
    pub fn summary(&self) -> String {
        format!(
            "{} by {} ({})",
            self.title, self.author, self.publication_year
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Caller-supplied fields for a book that has not been added yet.
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
    pub read_status: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: impl Into<String>,
        read_status: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
            read_status,
        }
    }

    /// Trim the text fields and check them against the record rules: title
    /// and author are required, and the year must fall between
    /// [`MIN_PUBLICATION_YEAR`] and `current_year`.
    pub fn normalized(self, current_year: i32) -> Result<Self, LibraryError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(LibraryError::InvalidBook("Title is required.".to_string()));
        }
        let author = self.author.trim().to_string();
        if author.is_empty() {
            return Err(LibraryError::InvalidBook("Author is required.".to_string()));
        }
        if !(MIN_PUBLICATION_YEAR..=current_year).contains(&self.publication_year) {
            return Err(LibraryError::InvalidBook(format!(
                "Publication year must be between {MIN_PUBLICATION_YEAR} and {current_year}."
            )));
        }

        Ok(Self {
            title,
            author,
            publication_year: self.publication_year,
            genre: self.genre.trim().to_string(),
            read_status: self.read_status,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which book field a search term is matched against.
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Genre];

    /// The field's value on a given book.
    pub fn value<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
            SearchField::Genre => &book.genre,
        }
    }

    /// Cycle to the next selector, wrapping after `Genre`.
    pub fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Genre,
            SearchField::Genre => SearchField::Title,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
            SearchField::Genre => "Genre",
        };
        write!(f, "{label}")
    }
}
