//! The single catalog screen: key dispatch across the form, search box and
//! book list, and all drawing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::models::Book;
use crate::state::LibraryState;

use super::forms::{Focus, InputField};
use super::helpers::{clamp_cursor, offset_cursor, split_body, visible_window};

/// Rows taken by the title banner.
const HEADER_HEIGHT: u16 = 4;
/// Footer space reserved for status messages and key hints.
const FOOTER_HEIGHT: u16 = 3;
/// Height of one book card, borders included.
const CARD_HEIGHT: u16 = 4;
/// Cards skipped by PageUp/PageDown.
const PAGE_STEP: isize = 5;

const TITLE_PLACEHOLDER: &str = "Ingrese el título...";
const AUTHOR_PLACEHOLDER: &str = "Ingrese el autor...";
const SEARCH_PLACEHOLDER: &str = "título o autor...";

const ACCENT: Color = Color::Rgb(180, 83, 9);

/// Terminal-facing state: the controller plus focus, list cursor and the
/// footer message.
pub struct App {
    state: LibraryState,
    focus: Focus,
    /// Index into the filtered view, independent of the selection.
    cursor: usize,
    status: Option<String>,
}

impl App {
    pub fn new(state: LibraryState) -> Self {
        Self {
            state,
            focus: Focus::default(),
            cursor: 0,
            status: None,
        }
    }

    /// Read access to the controller, mainly for the binary's exit log.
    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    /// Dispatch a key event with its modifiers. Ctrl+C quits and Ctrl+D
    /// removes the selection; every other Ctrl/Alt chord is dropped so it never
    /// reaches an input as plain text. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> bool {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char('c') => return true,
                KeyCode::Char('d') => {
                    self.handle_ctrl_d();
                    return false;
                }
                _ => {}
            }
        }
        if !event.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            debug!(code = ?event.code, modifiers = ?event.modifiers, "ignoring key chord");
            return false;
        }
        self.handle_key(event.code)
    }

    /// Dispatch one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => return true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => match self.focus {
                Focus::Title | Focus::Author => self.handle_form_key(code),
                Focus::Search => self.handle_search_key(code),
                Focus::List => return self.handle_list_key(code),
            },
        }
        false
    }

    /// Remove the selected book regardless of focus.
    pub fn handle_ctrl_d(&mut self) {
        self.remove_selected();
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.add_book(),
            KeyCode::Backspace => {
                self.active_input().pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => self.active_input().push(ch),
            KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::Up if self.focus == Focus::Author => self.focus = Focus::Title,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        let mut query = self.state.search().to_string();
        match code {
            KeyCode::Backspace => {
                if query.pop().is_none() {
                    return;
                }
            }
            KeyCode::Char(ch) if !ch.is_control() => query.push(ch),
            KeyCode::Enter | KeyCode::Down => {
                self.focus = Focus::List;
                return;
            }
            KeyCode::Up => {
                self.focus = Focus::Author;
                return;
            }
            _ => return,
        }
        self.state.set_search(query);
        self.cursor = clamp_cursor(self.cursor, self.state.filtered_count());
    }

    fn handle_list_key(&mut self, code: KeyCode) -> bool {
        let len = self.state.filtered_count();
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('f') | KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Up => self.cursor = offset_cursor(self.cursor, -1, len),
            KeyCode::Down => self.cursor = offset_cursor(self.cursor, 1, len),
            KeyCode::PageUp => self.cursor = offset_cursor(self.cursor, -PAGE_STEP, len),
            KeyCode::PageDown => self.cursor = offset_cursor(self.cursor, PAGE_STEP, len),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len.saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(&id) = self.state.visible_ids().get(self.cursor) {
                    self.state.select(id);
                }
            }
            KeyCode::Delete | KeyCode::Char('-') => self.remove_selected(),
            _ => {}
        }
        false
    }

    fn active_input(&mut self) -> &mut String {
        match self.focus {
            Focus::Author => self.state.author_input_mut(),
            _ => self.state.title_input_mut(),
        }
    }

    fn add_book(&mut self) {
        let Some(id) = self.state.add_book() else {
            return;
        };
        if let Some(book) = self.state.catalog().get(id) {
            self.status = Some(format!("Agregado «{book}»."));
        }
        if let Some(index) = self.state.visible_ids().iter().position(|v| *v == id) {
            self.cursor = index;
        }
        self.focus = Focus::Title;
    }

    fn remove_selected(&mut self) {
        match self.state.remove_selected() {
            Some(book) => {
                self.status = Some(format!("Eliminado «{book}»."));
                self.cursor = clamp_cursor(self.cursor, self.state.filtered_count());
            }
            None => debug!("remove requested without a selection"),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);
        let header_height = HEADER_HEIGHT.min(area.height.saturating_sub(footer_height));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        let (controls, catalog) = split_body(chunks[1]);
        self.draw_controls(frame, controls);
        self.draw_catalog(frame, catalog);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let lines = vec![
            Line::from(Span::styled(
                "Biblioteca Digital",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Sistema de Gestión de Libros",
                Style::default().fg(Color::Gray),
            )),
        ];
        let header = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }

    fn draw_controls(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        self.draw_add_form(frame, rows[0]);
        self.draw_search(frame, rows[1]);
        self.draw_remove_action(frame, rows[2]);

        let total = Paragraph::new(Line::from(vec![
            Span::raw("Total de libros: "),
            Span::styled(
                self.state.total_count().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(panel_block(None));
        frame.render_widget(total, rows[3]);
    }

    fn draw_add_form(&self, frame: &mut Frame, area: Rect) {
        let block = panel_block(Some("Agregar Libro"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = InputField {
            label: "Título",
            value: self.state.title_input(),
            placeholder: TITLE_PLACEHOLDER,
            active: self.focus == Focus::Title,
        };
        let author = InputField {
            label: "Autor",
            value: self.state.author_input(),
            placeholder: AUTHOR_PLACEHOLDER,
            active: self.focus == Focus::Author,
        };

        let lines = vec![
            title.build_line(),
            author.build_line(),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] Agregar Libro",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);

        match self.focus {
            Focus::Title => place_cursor(frame, inner, 0, &title),
            Focus::Author => place_cursor(frame, inner, 1, &author),
            _ => {}
        }
    }

    fn draw_search(&self, frame: &mut Frame, area: Rect) {
        let block = panel_block(None);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let field = InputField {
            label: "Buscar",
            value: self.state.search(),
            placeholder: SEARCH_PLACEHOLDER,
            active: self.focus == Focus::Search,
        };
        frame.render_widget(Paragraph::new(field.build_line()), inner);
        if self.focus == Focus::Search {
            place_cursor(frame, inner, 0, &field);
        }
    }

    fn draw_remove_action(&self, frame: &mut Frame, area: Rect) {
        let style = if self.state.can_remove() {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let action = Paragraph::new(Span::styled("[Supr] Eliminar Seleccionado", style))
            .alignment(Alignment::Center)
            .block(panel_block(None));
        frame.render_widget(action, area);
    }

    fn draw_catalog(&self, frame: &mut Frame, area: Rect) {
        let title = format!(
            "Catálogo de Libros ({} resultados)",
            self.state.filtered_count()
        );
        let mut block = panel_block(Some(title.as_str()));
        if self.focus == Focus::List {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.state.filtered_count() == 0 {
            let message = Paragraph::new("No se encontraron libros")
                .alignment(Alignment::Center)
                .style(Style::default().fg(ACCENT));
            frame.render_widget(message, inner);
            return;
        }

        self.render_book_cards(frame, inner);
    }

    fn render_book_cards(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let books: Vec<&Book> = self.state.visible_books().collect();
        let capacity = ((area.height / CARD_HEIGHT) as usize).max(1);
        let (start, end) = visible_window(self.cursor, capacity, books.len());

        let constraints: Vec<Constraint> = (start..end)
            .map(|_| Constraint::Length(CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (chunk, index) in rows.iter().zip(start..end) {
            if chunk.height == 0 {
                continue;
            }
            let book = books[index];
            let selected = self.state.is_selected(book.id);
            let under_cursor = self.focus == Focus::List && index == self.cursor;

            let mut block = Block::default().borders(Borders::ALL);
            if selected {
                block = block
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(ACCENT));
            }
            if under_cursor {
                block = block.border_style(Style::default().fg(Color::Yellow));
            }

            let marker = if under_cursor { "▶ " } else { "" };
            let mut title_spans = vec![Span::styled(
                format!("{marker}{}", book.title),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if selected {
                title_spans.push(Span::raw("  "));
                title_spans.push(Span::styled(
                    " Seleccionado ",
                    Style::default()
                        .fg(Color::White)
                        .bg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                ));
            }

            let lines = vec![
                Line::from(title_spans),
                Line::from(vec![
                    Span::styled("Autor: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(book.author.clone(), Style::default().fg(Color::Gray)),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), *chunk);
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status_line = match &self.status {
            Some(text) => Line::from(Span::styled(
                text.clone(),
                Style::default().fg(Color::Green),
            )),
            None => Line::from(""),
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::styled("[Tab]", key_style), Span::raw(" Focus   ")];
        match self.focus {
            Focus::Title | Focus::Author => {
                spans.push(Span::styled("[Enter]", key_style));
                spans.push(Span::raw(" Add   "));
            }
            Focus::Search => {
                spans.push(Span::styled("[Enter]", key_style));
                spans.push(Span::raw(" Results   "));
            }
            Focus::List => {
                spans.push(Span::styled("[↑↓]", key_style));
                spans.push(Span::raw(" Move   "));
                spans.push(Span::styled("[Enter]", key_style));
                spans.push(Span::raw(" Select   "));
                spans.push(Span::styled("[Del]", key_style));
                spans.push(Span::raw(" Remove   "));
                spans.push(Span::styled("[f]", key_style));
                spans.push(Span::raw(" Search   "));
                spans.push(Span::styled("[q]", key_style));
                spans.push(Span::raw(" Quit   "));
            }
        }
        if self.focus.is_input() {
            spans.push(Span::styled("[Ctrl+D]", key_style));
            spans.push(Span::raw(" Remove   "));
        }
        spans.push(Span::styled("[Esc]", key_style));
        spans.push(Span::raw(" Quit"));
        Line::from(spans)
    }
}

fn panel_block(title: Option<&str>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    match title {
        Some(title) => block.title(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        None => block,
    }
}

fn place_cursor(frame: &mut Frame, inner: Rect, row: u16, field: &InputField) {
    if inner.width == 0 || row >= inner.height {
        return;
    }
    let x = inner.x + field.cursor_offset().min(inner.width.saturating_sub(1));
    frame.set_cursor_position((x, inner.y + row));
}
