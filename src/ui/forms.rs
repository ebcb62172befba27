//! Input focus and the single-line text fields of the control panel.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Which part of the screen receives typed keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Focus {
    #[default]
    Title,
    Author,
    Search,
    List,
}

impl Focus {
    /// Tab order: Title → Author → Search → List → Title.
    pub(crate) fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Author,
            Focus::Author => Focus::Search,
            Focus::Search => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Focus::Title => Focus::List,
            Focus::Author => Focus::Title,
            Focus::Search => Focus::Author,
            Focus::List => Focus::Search,
        }
    }

    /// Whether typed characters land in a text input.
    pub(crate) fn is_input(self) -> bool {
        !matches!(self, Focus::List)
    }
}

/// Label, current value and placeholder for one text input.
pub(crate) struct InputField<'a> {
    pub(crate) label: &'a str,
    pub(crate) value: &'a str,
    pub(crate) placeholder: &'a str,
    pub(crate) active: bool,
}

impl InputField<'_> {
    /// Render `Label: value`, falling back to a dimmed placeholder while the
    /// input is empty.
    pub(crate) fn build_line(&self) -> Line<'static> {
        let display = if self.value.is_empty() {
            self.placeholder.to_string()
        } else {
            self.value.to_string()
        };

        let style = if self.value.is_empty() {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else if self.active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let label_style = if self.active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        Line::from(vec![
            Span::styled(self.prefix(), label_style),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn prefix(&self) -> String {
        format!("{}: ", self.label)
    }

    /// Column offset of the text cursor relative to the start of the line.
    pub(crate) fn cursor_offset(&self) -> u16 {
        (self.prefix().chars().count() + self.value.chars().count()) as u16
    }
}
