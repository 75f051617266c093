use std::cmp::min;
use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    BarChart, Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap,
};
use ratatui::Frame;

use crate::assets::Banner;
use crate::models::{Book, SearchField};
use crate::store::{Library, LibraryStats};

use super::forms::{BookField, BookForm, ConfirmBookRemove};
use super::helpers::{
    centered_rect, decade_label, genre_label, read_badge, surface_error, truncate_label,
};
use super::screens::{LibraryScreen, SearchScreen, View};

/// Header space for the application title and tab bar.
const HEADER_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height allocation per book card in the library view.
const BOOK_CARD_HEIGHT: u16 = 5;
/// Width of a single bar in the statistics charts.
const BAR_WIDTH: u16 = 8;
/// How many authors the statistics view lists.
const TOP_AUTHORS: usize = 10;
const APP_TITLE: &str = " Personal Library Manager ";

/// Content of the main area. Each variant carries the state its view needs.
enum Screen {
    Library(LibraryScreen),
    AddBook(BookForm),
    Search(SearchScreen),
    Statistics,
}

impl Screen {
    fn view(&self) -> View {
        match self {
            Screen::Library(_) => View::Library,
            Screen::AddBook(_) => View::AddBook,
            Screen::Search(_) => View::Search,
            Screen::Statistics => View::Statistics,
        }
    }
}

/// Modal state layered over the current screen.
enum Mode {
    Normal,
    ConfirmRemove(ConfirmBookRemove),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state. Owns the library; every view reads from it and
/// every mutation goes through its operations.
pub struct App {
    library: Library,
    banner: Option<Banner>,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(library: Library, banner: Option<Banner>) -> Self {
        let len = library.len();
        Self {
            library,
            banner,
            screen: Screen::Library(LibraryScreen::new(0, len)),
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Feed one key press through the state machine. Returns `true` when the
    /// user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::ConfirmRemove(confirm) => self.handle_confirm_remove(code, confirm),
        };

        exit
    }

    /// Ctrl+R: toggle the read flag of the highlighted search hit.
    pub(crate) fn handle_ctrl_r(&mut self) {
        if !matches!(self.mode, Mode::Normal) {
            return;
        }
        let current = match &self.screen {
            Screen::Search(search) => search.current_index(),
            _ => return,
        };
        let Some(index) = current else {
            self.set_status("No book selected.", StatusKind::Error);
            return;
        };

        let outcome = self.library.toggle_read(index);
        if let Screen::Search(search) = &mut self.screen {
            search.refresh(&self.library);
        }
        match outcome {
            Ok(read) => self.set_read_status_message(index, read),
            Err(err) => {
                self.set_status(surface_error(&anyhow::Error::from(err)), StatusKind::Error)
            }
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        if let KeyCode::F(number) = code {
            if let Some(view) = View::from_number(number) {
                self.open_view(view);
            }
            return Mode::Normal;
        }

        // Each handler takes its screen by value and returns the screen to show
        // next, which may belong to a different view.
        let screen = mem::replace(&mut self.screen, Screen::Statistics);
        let (screen, mode) = match screen {
            Screen::Library(view) => self.handle_library_key(code, view, exit),
            Screen::AddBook(form) => (self.handle_add_book_key(code, form), Mode::Normal),
            Screen::Search(search) => (self.handle_search_key(code, search), Mode::Normal),
            Screen::Statistics => (self.handle_statistics_key(code, exit), Mode::Normal),
        };
        self.screen = screen;
        mode
    }

    fn handle_library_key(
        &mut self,
        code: KeyCode,
        mut view: LibraryScreen,
        exit: &mut bool,
    ) -> (Screen, Mode) {
        let len = self.library.len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => view.move_selection(-1, len),
            KeyCode::Down => view.move_selection(1, len),
            KeyCode::PageUp => view.move_selection(-5, len),
            KeyCode::PageDown => view.move_selection(5, len),
            KeyCode::Home => view.select_first(),
            KeyCode::End => view.select_last(len),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if len == 0 {
                    self.set_status("No book selected to update.", StatusKind::Error);
                } else {
                    match self.library.toggle_read(view.selected) {
                        Ok(read) => self.set_read_status_message(view.selected, read),
                        Err(err) => self.set_status(
                            surface_error(&anyhow::Error::from(err)),
                            StatusKind::Error,
                        ),
                    }
                }
            }
            KeyCode::Char('-') | KeyCode::Delete => {
                if let Some(book) = self.library.get(view.selected) {
                    let confirm = ConfirmBookRemove::new(view.selected, book);
                    self.clear_status();
                    return (Screen::Library(view), Mode::ConfirmRemove(confirm));
                }
                self.set_status("No book selected to remove.", StatusKind::Error);
            }
            KeyCode::Char(ch) => {
                if let Some(target) = shortcut_view(ch) {
                    return (self.screen_for(target, Some(view.selected)), Mode::Normal);
                }
            }
            _ => {}
        }
        (Screen::Library(view), Mode::Normal)
    }

    fn handle_add_book_key(&mut self, code: KeyCode, mut form: BookForm) -> Screen {
        match code {
            KeyCode::Esc => {
                self.set_status("Add book cancelled.", StatusKind::Info);
                return self.screen_for(View::Library, None);
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Left | KeyCode::Right if form.active == BookField::Read => {
                form.read = !form.read;
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_new_book(&form) {
                Ok(()) => {
                    self.set_status("Book added successfully!", StatusKind::Info);
                    return Screen::AddBook(BookForm::default());
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Screen::AddBook(form)
    }

    fn handle_search_key(&mut self, code: KeyCode, mut search: SearchScreen) -> Screen {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                return self.screen_for(View::Library, None);
            }
            KeyCode::Tab | KeyCode::BackTab => search.cycle_field(&self.library),
            KeyCode::Up => search.move_selection(-1),
            KeyCode::Down => search.move_selection(1),
            KeyCode::PageUp => search.move_selection(-5),
            KeyCode::PageDown => search.move_selection(5),
            KeyCode::Backspace => search.backspace(&self.library),
            KeyCode::Enter => {
                if let Some(index) = search.current_index() {
                    self.clear_status();
                    return self.screen_for(View::Library, Some(index));
                }
            }
            KeyCode::Char(ch) if !ch.is_control() => search.push_char(ch, &self.library),
            _ => {}
        }
        Screen::Search(search)
    }

    fn handle_statistics_key(&mut self, code: KeyCode, exit: &mut bool) -> Screen {
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => return self.screen_for(View::Library, None),
            KeyCode::Char(ch) => {
                if let Some(target) = shortcut_view(ch) {
                    return self.screen_for(target, None);
                }
            }
            _ => {}
        }
        Screen::Statistics
    }

    fn handle_confirm_remove(&mut self, code: KeyCode, confirm: ConfirmBookRemove) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Removal cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.library.remove(confirm.index) {
                    Ok(book) => {
                        let len = self.library.len();
                        if let Screen::Library(view) = &mut self.screen {
                            view.ensure_in_bounds(len);
                        }
                        self.set_status(format!("Removed '{}'.", book.title), StatusKind::Info);
                    }
                    Err(err) => {
                        let message = surface_error(&anyhow::Error::from(err));
                        self.set_status(message, StatusKind::Error);
                    }
                }
                Mode::Normal
            }
            _ => Mode::ConfirmRemove(confirm),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);

        match &self.screen {
            Screen::Library(view) => self.draw_library(frame, chunks[1], view),
            Screen::AddBook(form) => self.draw_book_form(frame, chunks[1], form),
            Screen::Search(search) => self.draw_search(frame, chunks[1], search),
            Screen::Statistics => self.draw_statistics(frame, chunks[1]),
        }

        self.draw_footer(frame, chunks[2]);

        if let Mode::ConfirmRemove(confirm) = &self.mode {
            self.draw_confirm_remove(frame, area, confirm);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(APP_TITLE).bold());
        if let Some(banner) = &self.banner {
            block = block.title(
                Line::from(Span::styled(
                    format!(" {} ", banner.headline()),
                    Style::default().fg(Color::DarkGray),
                ))
                .right_aligned(),
            );
        }

        let titles: Vec<String> = View::ALL
            .iter()
            .enumerate()
            .map(|(idx, view)| format!("[{}] {}", idx + 1, view.title()))
            .collect();
        let tabs = Tabs::new(titles)
            .block(block)
            .select(self.screen.view().position())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");
        frame.render_widget(tabs, area);
    }

    fn draw_library(&self, frame: &mut Frame, area: Rect, view: &LibraryScreen) {
        let block = Block::default().title("Your Library").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.library.is_empty() {
            let message = Paragraph::new("Your library is empty. Add some books!")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(message, inner);
            return;
        }

        self.render_book_cards(frame, inner, self.library.books(), view.selected);
    }

    fn render_book_cards(&self, frame: &mut Frame, area: Rect, books: &[Book], selected: usize) {
        if books.is_empty() || area.height == 0 {
            return;
        }

        let card_height = BOOK_CARD_HEIGHT as usize;
        let capacity = ((area.height as usize) / card_height).max(1);
        let len = books.len();
        let mut start = if selected >= capacity {
            selected + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }
        let end = min(start + capacity, len);
        let visible_len = end.saturating_sub(start);
        if visible_len == 0 {
            return;
        }

        let constraints: Vec<Constraint> = (0..visible_len)
            .map(|_| Constraint::Length(BOOK_CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (idx, chunk) in rows.iter().enumerate() {
            if chunk.height == 0 {
                continue;
            }
            let book_index = start + idx;
            let Some(book) = books.get(book_index) else {
                break;
            };

            let is_selected = book_index == selected;
            let mut block = Block::default().borders(Borders::LEFT | Borders::BOTTOM);
            block = if is_selected {
                block.border_style(Style::default().fg(Color::Yellow))
            } else {
                block.border_style(Style::default().fg(Color::Blue))
            };

            let title = if is_selected {
                format!("▶ {}", book.title)
            } else {
                book.title.clone()
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    read_badge(book.read_status),
                ]),
                Line::from(vec![
                    Span::styled("Author: ", Style::default().fg(Color::Gray)),
                    Span::raw(book.author.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Publication Year: ", Style::default().fg(Color::Gray)),
                    Span::raw(book.publication_year.to_string()),
                    Span::styled("   Genre: ", Style::default().fg(Color::Gray)),
                    Span::raw(genre_label(&book.genre).to_string()),
                ]),
                Line::from(Span::styled(
                    format!("Added {}", book.added_date()),
                    Style::default().fg(Color::DarkGray),
                )),
            ];

            let paragraph = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, *chunk);
        }
    }

    fn draw_book_form(&self, frame: &mut Frame, area: Rect, form: &BookForm) {
        let block = Block::default()
            .title("Add a New Book")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = BookField::ORDER
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to add • Tab to switch field • Space toggles read status • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);

        if form.active != BookField::Read {
            let row = BookField::ORDER
                .iter()
                .position(|field| *field == form.active)
                .unwrap_or(0) as u16;
            let prefix = form.active.label().chars().count() as u16 + 2;
            let cursor_x = inner.x + prefix + form.value_len(form.active) as u16;
            frame.set_cursor_position((cursor_x, inner.y + row));
        }
    }

    fn draw_search(&self, frame: &mut Frame, area: Rect, search: &SearchScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let mut spans = vec![Span::styled("Search By ", Style::default().fg(Color::Cyan))];
        for field in SearchField::ALL {
            if field == search.field {
                spans.push(Span::styled(
                    format!("[{field}]"),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {field} "),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        spans.push(Span::styled(": ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(search.query.clone()));
        let line = Line::from(spans);
        let prompt_width = line.width() as u16;

        let input = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title("Search Books"));
        frame.render_widget(input, chunks[0]);

        let cursor_x = chunks[0].x + 1 + prompt_width;
        frame.set_cursor_position((cursor_x, chunks[0].y + 1));

        let results_block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Results ({})", search.hits.len()));

        if search.no_matches() {
            let warning = Paragraph::new("No books found matching your search.")
                .style(Style::default().fg(Color::Yellow))
                .block(results_block);
            frame.render_widget(warning, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = search
            .hits
            .iter()
            .filter_map(|index| self.library.get(*index))
            .map(|book| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        book.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" by {} ({})  ", book.author, book.publication_year)),
                    read_badge(book.read_status),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(results_block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        if !search.hits.is_empty() {
            list_state.select(Some(search.selected));
        }
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    fn draw_statistics(&self, frame: &mut Frame, area: Rect) {
        let stats = self.library.stats();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let metrics = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[0]);
        let metric_values = [
            ("Total Books", stats.total_books.to_string()),
            ("Books Read", stats.read_books.to_string()),
            ("Percent Read", format!("{:.1}%", stats.percent_read)),
        ];
        for ((label, value), chunk) in metric_values.into_iter().zip(metrics.iter()) {
            let metric = Paragraph::new(Span::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(label));
            frame.render_widget(metric, *chunk);
        }

        if stats.total_books == 0 {
            let message = Paragraph::new("Add some books to see your reading statistics.")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            frame.render_widget(message, rows[1]);
            return;
        }

        let ratio = (stats.percent_read / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Read vs Unread Books"),
            )
            .gauge_style(Style::default().fg(Color::Green).bg(Color::LightRed))
            .ratio(ratio)
            .label(format!(
                "{} read / {} unread",
                stats.read_books,
                stats.unread_books()
            ));
        frame.render_widget(gauge, rows[1]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
            ])
            .split(rows[2]);

        self.draw_genre_chart(frame, charts[0], &stats);
        self.draw_decade_chart(frame, charts[1], &stats);
        self.draw_top_authors(frame, charts[2], &stats);
    }

    fn draw_genre_chart(&self, frame: &mut Frame, area: Rect, stats: &LibraryStats) {
        let labels: Vec<(String, u64)> = stats
            .genres
            .iter()
            .map(|(genre, count)| {
                (
                    truncate_label(genre_label(genre), BAR_WIDTH as usize),
                    *count as u64,
                )
            })
            .collect();
        let data: Vec<(&str, u64)> = labels
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title("Books by Genre"))
            .data(data.as_slice())
            .bar_width(BAR_WIDTH)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Blue))
            .value_style(Style::default().fg(Color::White).bg(Color::Blue));
        frame.render_widget(chart, area);
    }

    fn draw_decade_chart(&self, frame: &mut Frame, area: Rect, stats: &LibraryStats) {
        let labels: Vec<(String, u64)> = stats
            .decades
            .iter()
            .map(|(decade, count)| (decade_label(*decade), *count as u64))
            .collect();
        let data: Vec<(&str, u64)> = labels
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title("Books by Decade"))
            .data(data.as_slice())
            .bar_width(BAR_WIDTH - 2)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(chart, area);
    }

    fn draw_top_authors(&self, frame: &mut Frame, area: Rect, stats: &LibraryStats) {
        let items: Vec<ListItem> = stats
            .authors
            .iter()
            .take(TOP_AUTHORS)
            .map(|(author, count)| ListItem::new(format!("{count:>3}  {author}")))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Top Authors"));
        frame.render_widget(list, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let keys: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::ConfirmRemove(_)) => &[("[y/Enter]", " Remove   "), ("[n/Esc]", " Keep")],
            (Screen::Library(_), _) => &[
                ("[↑↓]", " Select   "),
                ("[r]", " Toggle Read   "),
                ("[-]", " Remove   "),
                ("[a]", " Add   "),
                ("[f]", " Search   "),
                ("[t]", " Statistics   "),
                ("[q]", " Quit"),
            ],
            (Screen::AddBook(_), _) => &[
                ("[Tab]", " Next Field   "),
                ("[Enter]", " Add Book   "),
                ("[F1-F4]", " Views   "),
                ("[Esc]", " Back"),
            ],
            (Screen::Search(_), _) => &[
                ("[Tab]", " Search By   "),
                ("[↑↓]", " Select   "),
                ("[Ctrl+R]", " Toggle Read   "),
                ("[Enter]", " Show in Library   "),
                ("[Esc]", " Back"),
            ],
            (Screen::Statistics, _) => &[
                ("[1-4]", " Views   "),
                ("[Esc]", " Back   "),
                ("[q]", " Quit"),
            ],
        };

        let spans: Vec<Span<'static>> = keys
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(key.to_string(), key_style),
                    Span::raw(action.to_string()),
                ]
            })
            .collect();
        Line::from(spans)
    }

    fn draw_confirm_remove(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmBookRemove) {
        let popup_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Remove Book").borders(Borders::ALL);
        let lines = vec![
            Line::from(format!("Remove '{}' by {}?", confirm.title, confirm.author)),
            Line::from(""),
            Line::from(Span::styled(
                "y/Enter to remove • n/Esc to keep",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn open_view(&mut self, view: View) {
        let selected = match &self.screen {
            Screen::Library(current) => Some(current.selected),
            _ => None,
        };
        self.screen = self.screen_for(view, selected);
    }

    fn screen_for(&self, view: View, selected: Option<usize>) -> Screen {
        match view {
            View::Library => {
                Screen::Library(LibraryScreen::new(selected.unwrap_or(0), self.library.len()))
            }
            View::AddBook => Screen::AddBook(BookForm::default()),
            View::Search => Screen::Search(SearchScreen::new(&self.library)),
            View::Statistics => Screen::Statistics,
        }
    }

    fn save_new_book(&mut self, form: &BookForm) -> Result<()> {
        let draft = form.parse_inputs()?;
        self.library.add(draft)?;
        Ok(())
    }

    fn set_read_status_message(&mut self, index: usize, read: bool) {
        let title = self
            .library
            .get(index)
            .map(|book| book.title.clone())
            .unwrap_or_default();
        let state = if read { "read" } else { "unread" };
        self.set_status(format!("Marked '{title}' as {state}."), StatusKind::Info);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Letter and number shortcuts available on the non-text views.
fn shortcut_view(ch: char) -> Option<View> {
    match ch {
        'a' | 'A' | '+' => Some(View::AddBook),
        'f' | 'F' | '/' => Some(View::Search),
        't' | 'T' => Some(View::Statistics),
        'l' | 'L' => Some(View::Library),
        digit @ '1'..='4' => View::from_number(digit as u8 - b'0'),
        _ => None,
    }
}
