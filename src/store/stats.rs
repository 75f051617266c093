use std::collections::HashMap;

use crate::models::Book;

/// Read-only aggregates over a snapshot of the library.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryStats {
    pub total_books: usize,
    pub read_books: usize,
    /// Share of read books in percent, `0.0` for an empty library.
    pub percent_read: f64,
    /// Genre to count, most common first.
    pub genres: Vec<(String, usize)>,
    /// Author to count, most common first.
    pub authors: Vec<(String, usize)>,
    /// Decade to count, oldest decade first.
    pub decades: Vec<(i32, usize)>,
}

impl LibraryStats {
    pub fn compute(books: &[Book]) -> Self {
        let total_books = books.len();
        let read_books = books.iter().filter(|book| book.read_status).count();
        let percent_read = if total_books > 0 {
            read_books as f64 / total_books as f64 * 100.0
        } else {
            0.0
        };

        let mut genres = tally(books.iter().map(|book| book.genre.as_str()));
        genres.sort_by(|a, b| b.1.cmp(&a.1));
        let mut authors = tally(books.iter().map(|book| book.author.as_str()));
        authors.sort_by(|a, b| b.1.cmp(&a.1));

        let mut decades: Vec<(i32, usize)> = Vec::new();
        for book in books {
            let decade = decade_of(book.publication_year);
            match decades.iter_mut().find(|(key, _)| *key == decade) {
                Some((_, count)) => *count += 1,
                None => decades.push((decade, 1)),
            }
        }
        decades.sort_by_key(|(decade, _)| *decade);

        Self {
            total_books,
            read_books,
            percent_read,
            genres,
            authors,
            decades,
        }
    }

    pub fn unread_books(&self) -> usize {
        self.total_books - self.read_books
    }
}

/// Bucket a year into its decade, e.g. 1985 -> 1980.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Count occurrences while remembering first-seen order, so the stable sort
/// afterwards breaks ties by insertion order.
fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match positions.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts
}
