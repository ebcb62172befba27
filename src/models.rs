//! Domain models shared by the catalog store, the controller and the TUI.
//! These stay plain data holders so the other layers can focus on mutation
//! rules and presentation.

use std::fmt;

/// Identifier handed out by the catalog's counter. Never reused.
pub type BookId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single catalog entry. Title and author are stored trimmed and never
/// change after the record is created.
pub struct Book {
    /// Unique id assigned when the record enters the catalog.
    pub id: BookId,
    /// Title shown in bold on the catalog card.
    pub title: String,
    /// Author line, also searched by the filter.
    pub author: String,
}

impl Book {
    /// Case-insensitive substring match against title or author. The needle
    /// must already be lowercased so a whole filter pass lowercases it once.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str) -> Book {
        Book {
            id: 1,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn matches_title_or_author_ignoring_case() {
        let b = book("Rayuela", "Julio Cortázar");
        assert!(b.matches_lowercase("rayu"));
        assert!(b.matches_lowercase("cortázar"));
        assert!(!b.matches_lowercase("orwell"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(book("1984", "George Orwell").matches_lowercase(""));
    }

    #[test]
    fn display_joins_title_and_author() {
        assert_eq!(book("1984", "George Orwell").to_string(), "1984 - George Orwell");
    }
}
