use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Local};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Book, NewBook};

/// Longest year the form accepts while typing.
const YEAR_DIGITS: usize = 4;

/// Internal representation of the "Add Book" form fields.
#[derive(Clone, Debug)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) genre: String,
    pub(crate) read: bool,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

/// Fields available within the book form, in tab order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum BookField {
    #[default]
    Title,
    Author,
    Year,
    Genre,
    Read,
}

impl BookField {
    pub(crate) const ORDER: [BookField; 5] = [
        BookField::Title,
        BookField::Author,
        BookField::Year,
        BookField::Genre,
        BookField::Read,
    ];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            BookField::Title => "Book Title",
            BookField::Author => "Author",
            BookField::Year => "Publication Year",
            BookField::Genre => "Genre",
            BookField::Read => "Read Status",
        }
    }

    fn position(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| field == self)
            .unwrap_or(0)
    }
}

impl Default for BookForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            year: Local::now().year().to_string(),
            genre: String::new(),
            read: false,
            active: BookField::Title,
            error: None,
        }
    }
}

impl BookForm {
    pub(crate) fn next_field(&mut self) {
        let next = (self.active.position() + 1) % BookField::ORDER.len();
        self.active = BookField::ORDER[next];
    }

    pub(crate) fn previous_field(&mut self) {
        let len = BookField::ORDER.len();
        let previous = (self.active.position() + len - 1) % len;
        self.active = BookField::ORDER[previous];
    }

    /// Append a character to the active field, validating allowed input. On
    /// the read-status field a space flips the flag instead.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            BookField::Title => self.title.push(ch),
            BookField::Author => self.author.push(ch),
            BookField::Genre => self.genre.push(ch),
            BookField::Year => {
                if !ch.is_ascii_digit() || self.year.len() >= YEAR_DIGITS {
                    return false;
                }
                self.year.push(ch);
            }
            BookField::Read => {
                if ch != ' ' {
                    return false;
                }
                self.read = !self.read;
            }
        }
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            BookField::Title => {
                self.title.pop();
            }
            BookField::Author => {
                self.author.pop();
            }
            BookField::Year => {
                self.year.pop();
            }
            BookField::Genre => {
                self.genre.pop();
            }
            BookField::Read => {}
        }
    }

    /// Validate the inputs and return a draft ready for the library. The year
    /// range itself is checked when the draft is added.
    pub(crate) fn parse_inputs(&self) -> Result<NewBook> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(anyhow!("Book title is required."));
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(anyhow!("Author is required."));
        }
        let year_raw = self.year.trim();
        if year_raw.is_empty() {
            return Err(anyhow!("Publication year is required."));
        }
        let year = year_raw
            .parse::<i32>()
            .context("Publication year must be a number.")?;

        Ok(NewBook::new(title, author, year, self.genre.trim(), self.read))
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: BookField) -> Line<'static> {
        let is_active = self.active == field;
        let (display, empty) = match field {
            BookField::Read => {
                let marker = |on: bool| if on { "(•)" } else { "( )" };
                (
                    format!("{} Read   {} Unread", marker(self.read), marker(!self.read)),
                    false,
                )
            }
            BookField::Genre if self.genre.is_empty() => ("<optional>".to_string(), true),
            _ => {
                let value = self.value(field);
                if value.is_empty() {
                    ("<required>".to_string(), true)
                } else {
                    (value.to_string(), false)
                }
            }
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if empty {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Return the character count for the requested field.
    pub(crate) fn value_len(&self, field: BookField) -> usize {
        self.value(field).chars().count()
    }

    fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Year => &self.year,
            BookField::Genre => &self.genre,
            BookField::Read => "",
        }
    }
}

/// Pending removal awaiting a yes/no answer.
#[derive(Clone, Debug)]
pub(crate) struct ConfirmBookRemove {
    pub(crate) index: usize,
    pub(crate) title: String,
    pub(crate) author: String,
}

impl ConfirmBookRemove {
    pub(crate) fn new(index: usize, book: &Book) -> Self {
        Self {
            index,
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}
