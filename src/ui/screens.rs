use crate::models::SearchField;
use crate::store::Library;

/// Top-level views reachable from the tab bar.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum View {
    Library,
    AddBook,
    Search,
    Statistics,
}

impl View {
    pub(crate) const ALL: [View; 4] = [View::Library, View::AddBook, View::Search, View::Statistics];

    pub(crate) fn title(&self) -> &'static str {
        match self {
            View::Library => "View Library",
            View::AddBook => "Add Book",
            View::Search => "Search Books",
            View::Statistics => "Library Statistics",
        }
    }

    /// `1`-`4` (or `F1`-`F4`) in tab order.
    pub(crate) fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub(crate) fn position(&self) -> usize {
        Self::ALL.iter().position(|view| view == self).unwrap_or(0)
    }
}

/// Cursor over the full book list.
pub(crate) struct LibraryScreen {
    pub(crate) selected: usize,
}

impl LibraryScreen {
    pub(crate) fn new(selected: usize, len: usize) -> Self {
        let mut screen = Self { selected };
        screen.ensure_in_bounds(len);
        screen
    }

    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max_index = len as isize - 1;
        let next = (self.selected as isize + offset).clamp(0, max_index);
        self.selected = next as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub(crate) fn ensure_in_bounds(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// Live search: the selected field, the typed term, and the library positions
/// of the current hits.
pub(crate) struct SearchScreen {
    pub(crate) field: SearchField,
    pub(crate) query: String,
    pub(crate) hits: Vec<usize>,
    pub(crate) selected: usize,
}

impl SearchScreen {
    pub(crate) fn new(library: &Library) -> Self {
        let mut screen = Self {
            field: SearchField::default(),
            query: String::new(),
            hits: Vec::new(),
            selected: 0,
        };
        screen.refresh(library);
        screen
    }

    /// Re-run the search against the current library contents.
    pub(crate) fn refresh(&mut self, library: &Library) {
        self.hits = library
            .search(&self.query, self.field)
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        if self.hits.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.hits.len() {
            self.selected = self.hits.len() - 1;
        }
    }

    pub(crate) fn cycle_field(&mut self, library: &Library) {
        self.field = self.field.next();
        self.refresh(library);
    }

    pub(crate) fn push_char(&mut self, ch: char, library: &Library) {
        self.query.push(ch);
        self.selected = 0;
        self.refresh(library);
    }

    pub(crate) fn backspace(&mut self, library: &Library) {
        self.query.pop();
        self.refresh(library);
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.hits.is_empty() {
            self.selected = 0;
            return;
        }
        let max_index = self.hits.len() as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, max_index) as usize;
    }

    /// Library position of the highlighted hit.
    pub(crate) fn current_index(&self) -> Option<usize> {
        self.hits.get(self.selected).copied()
    }

    /// True when a term was typed but nothing matched.
    pub(crate) fn no_matches(&self) -> bool {
        !self.query.is_empty() && self.hits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewBook;
    use tempfile::TempDir;

    fn library(dir: &TempDir) -> Library {
        let mut library = Library::open(dir.path().join("library.json")).unwrap();
        library
            .add(NewBook::new("Dune", "Frank Herbert", 1965, "SF", false))
            .unwrap();
        library
            .add(NewBook::new("Foundation", "Isaac Asimov", 1951, "SF", false))
            .unwrap();
        library
            .add(NewBook::new("Children of Dune", "Frank Herbert", 1976, "SF", true))
            .unwrap();
        library
    }

    #[test]
    fn views_map_to_number_keys() {
        assert_eq!(View::from_number(1), Some(View::Library));
        assert_eq!(View::from_number(4), Some(View::Statistics));
        assert_eq!(View::from_number(0), None);
        assert_eq!(View::from_number(5), None);
        assert_eq!(View::Search.position(), 2);
    }

    #[test]
    fn library_selection_clamps() {
        let mut screen = LibraryScreen::new(10, 3);
        assert_eq!(screen.selected, 2);
        screen.move_selection(-5, 3);
        assert_eq!(screen.selected, 0);
        screen.select_last(3);
        assert_eq!(screen.selected, 2);
        screen.ensure_in_bounds(0);
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn empty_query_lists_everything() {
        let dir = TempDir::new().unwrap();
        let library = library(&dir);
        let screen = SearchScreen::new(&library);
        assert_eq!(screen.hits, vec![0, 1, 2]);
        assert!(!screen.no_matches());
    }

    #[test]
    fn typing_narrows_hits_and_field_cycle_reruns() {
        let dir = TempDir::new().unwrap();
        let library = library(&dir);
        let mut screen = SearchScreen::new(&library);
        for ch in "DUNE".chars() {
            screen.push_char(ch, &library);
        }
        assert_eq!(screen.hits, vec![0, 2]);
        screen.move_selection(1);
        assert_eq!(screen.current_index(), Some(2));

        screen.cycle_field(&library);
        assert_eq!(screen.field, SearchField::Author);
        assert!(screen.no_matches());
        assert_eq!(screen.current_index(), None);
    }

    #[test]
    fn whitespace_term_without_hits_reports_no_matches() {
        let dir = TempDir::new().unwrap();
        let library = library(&dir);
        let mut screen = SearchScreen::new(&library);
        screen.push_char(' ', &library);
        screen.push_char(' ', &library);
        assert!(screen.hits.is_empty());
        assert!(screen.no_matches());
    }
}
