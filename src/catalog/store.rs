//! The catalog store: the single source of truth for which books exist and
//! in what order, plus the counter that guarantees ids are never handed out
//! twice.

use tracing::{debug, info, warn};

use crate::models::{Book, BookId};

use super::seed::DEFAULT_SEED;

/// Ordered book list plus the counter that hands out ids. Insertion order is
/// the display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    /// Next id to hand out; `None` once every `BookId` has been used.
    next_id: Option<BookId>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Empty catalog whose first id will be 1.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Catalog populated with the built-in seed records.
    pub fn seeded() -> Self {
        let books = DEFAULT_SEED
            .iter()
            .map(|&(id, title, author)| Book {
                id,
                title: title.to_string(),
                author: author.to_string(),
            })
            .collect();
        Self::from_books(books)
    }

    /// Build from already-validated records. The counter resumes one past the
    /// largest id present, or is exhausted when that id is `BookId::MAX`.
    pub(crate) fn from_books(books: Vec<Book>) -> Self {
        let next_id = books
            .iter()
            .map(|b| b.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self { books, next_id }
    }

    /// Append a record when both fields are non-blank after trimming. Blank
    /// input is ignored and yields `None`, as does an exhausted id counter.
    pub fn add(&mut self, title: &str, author: &str) -> Option<&Book> {
        let title = title.trim();
        let author = author.trim();
        if title.is_empty() || author.is_empty() {
            debug!("ignoring add with blank title or author");
            return None;
        }

        let Some(id) = self.next_id else {
            warn!("id space exhausted, refusing to add");
            return None;
        };
        self.next_id = id.checked_add(1);
        self.books.push(Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
        });
        info!(id, title, author, "book added");
        self.books.last()
    }

    /// Delete the record with `id`, returning it. Unknown ids are a no-op.
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let index = self.books.iter().position(|b| b.id == id)?;
        let removed = self.books.remove(index);
        info!(id, title = %removed.title, "book removed");
        Some(removed)
    }

    /// Look up a record by id.
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// All records in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn seeded_catalog_has_eight_books_in_order() {
        let catalog = Catalog::seeded();
        let ids: Vec<BookId> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(catalog.books()[2].title, "1984");
    }

    #[test]
    fn add_appends_with_fresh_ids() {
        let mut catalog = Catalog::seeded();
        let mut seen: HashSet<BookId> = catalog.books().iter().map(|b| b.id).collect();

        for n in 0..20 {
            let before = catalog.len();
            let id = catalog
                .add(&format!("Libro {n}"), "Autor")
                .map(|b| b.id)
                .expect("valid add");
            assert_eq!(catalog.len(), before + 1);
            assert!(seen.insert(id), "id {id} handed out twice");
            assert_eq!(catalog.books().last().map(|b| b.id), Some(id));
        }
    }

    #[test]
    fn add_trims_fields() {
        let mut catalog = Catalog::new();
        let book = catalog.add("  Ficciones ", " Jorge Luis Borges  ").cloned();
        assert_eq!(
            book,
            Some(Book {
                id: 1,
                title: "Ficciones".to_string(),
                author: "Jorge Luis Borges".to_string(),
            })
        );
    }

    #[test]
    fn blank_adds_are_ignored() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.add("", "X").is_none());
        assert!(catalog.add("X", "").is_none());
        assert!(catalog.add("   ", "   ").is_none());
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.remove(99).is_none());
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut catalog = Catalog::seeded();
        catalog.remove(8);
        let id = catalog.add("Pedro Páramo", "Juan Rulfo").map(|b| b.id);
        assert_eq!(id, Some(9));
    }

    #[test]
    fn counter_resumes_after_largest_id() {
        let mut catalog = Catalog::from_books(vec![Book {
            id: 40,
            title: "a".into(),
            author: "b".into(),
        }]);
        assert_eq!(catalog.add("c", "d").map(|b| b.id), Some(41));
    }

    #[test]
    fn exhausted_counter_refuses_instead_of_wrapping() {
        let mut catalog = Catalog::from_books(vec![
            Book {
                id: 0,
                title: "a".into(),
                author: "b".into(),
            },
            Book {
                id: BookId::MAX,
                title: "c".into(),
                author: "d".into(),
            },
        ]);
        assert!(catalog.add("x", "y").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn last_id_is_handed_out_once() {
        let mut catalog = Catalog::from_books(vec![Book {
            id: BookId::MAX - 1,
            title: "a".into(),
            author: "b".into(),
        }]);
        assert_eq!(catalog.add("c", "d").map(|b| b.id), Some(BookId::MAX));
        assert!(catalog.add("e", "f").is_none());
    }
}
